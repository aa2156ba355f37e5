use crate::model::{GolferStanding, ScoringRules, OVERFLOW_GROUP};

/// Bring the first under-represented draft group (scanning 1 through 5) back
/// up to the per-group minimum, pulling the best-world-ranked pool golfers
/// not already rostered. Tops up at most one group per call; callers loop
/// via [`fill_roster`].
#[must_use]
pub fn top_up_one_group(
    mut roster: Vec<GolferStanding>,
    pool: &[GolferStanding],
    rules: &ScoringRules,
) -> Vec<GolferStanding> {
    for group in 1..=OVERFLOW_GROUP {
        let held = roster.iter().filter(|g| g.group == group).count();
        if held >= rules.group_min {
            continue;
        }

        let mut candidates: Vec<&GolferStanding> = pool
            .iter()
            .filter(|candidate| {
                candidate.group == group
                    && !roster.iter().any(|g| g.espn_id == candidate.espn_id)
            })
            .collect();
        candidates.sort_by_key(|candidate| {
            (
                candidate.world_rank.unwrap_or(rules.default_world_rank),
                candidate.espn_id,
            )
        });

        roster.extend(
            candidates
                .into_iter()
                .take(rules.group_min - held)
                .cloned(),
        );
        break;
    }

    roster
}

/// Replacement fill: repeat the one-group top-up until the roster reaches
/// its target size, bounded by a hard cap so a depleted pool cannot loop
/// forever.
#[must_use]
pub fn fill_roster(
    mut roster: Vec<GolferStanding>,
    pool: &[GolferStanding],
    rules: &ScoringRules,
) -> Vec<GolferStanding> {
    for _ in 0..rules.replacement_cap {
        if roster.len() >= rules.roster_size {
            return roster;
        }
        let before = roster.len();
        roster = top_up_one_group(roster, pool, rules);
        if roster.len() == before {
            break;
        }
    }

    if roster.len() < rules.roster_size {
        eprintln!(
            "replacement pool exhausted: roster at {} of {}",
            roster.len(),
            rules.roster_size
        );
    }
    roster
}
