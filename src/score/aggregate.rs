use crate::model::{GolferStanding, RoundState, ScoringRules, TeamStanding};
use crate::score::context::TournamentContext;
use crate::score::rounds::categorize_round;

/// Recompute a team's round scores, live state, and full-precision total
/// from its (replacement-filled) roster. Round contributions count only once
/// the round completes; a round in progress surfaces as the team's live
/// `today`/`thru` averages and feeds the total directly.
pub fn aggregate_team_score(
    team: &mut TeamStanding,
    roster: &[GolferStanding],
    ctx: &TournamentContext,
    rules: &ScoringRules,
) {
    let mut total = 0.0;
    team.round_scores = [None; 4];
    team.today = None;
    team.thru = None;

    for round in 1..=4 {
        let breakdown = categorize_round(roster, round, ctx, rules);
        match breakdown.state {
            RoundState::Completed => {
                let avg = average(breakdown.active.iter().map(|golfer| {
                    relative_round_score(golfer, round, ctx, rules)
                }));
                if let Some(avg) = avg {
                    team.round_scores[round - 1] = Some(round1(avg));
                    total += avg;
                }
            }
            RoundState::Active => {
                let today = average(
                    breakdown
                        .active
                        .iter()
                        .filter_map(|g| g.today)
                        .map(f64::from),
                );
                let thru = average(
                    breakdown
                        .active
                        .iter()
                        .filter_map(|g| g.thru)
                        .map(f64::from),
                );
                team.today = today.map(round1);
                team.thru = thru.map(round1);
                if let Some(today) = today {
                    total += today;
                }
            }
            RoundState::Upcoming | RoundState::Cut => {}
        }
    }

    team.make_cut = categorize_round(roster, 3, ctx, rules).state != RoundState::Cut;
    team.total_score = total + playoff_bonus(team, ctx, rules);
}

/// A completed round's per-golfer contribution, relative to par. Falls back
/// to the live `today` score when the feed has not posted the card yet, then
/// to the missing-round penalty.
fn relative_round_score(
    golfer: &GolferStanding,
    round: usize,
    ctx: &TournamentContext,
    rules: &ScoringRules,
) -> f64 {
    let relative = golfer
        .round_score(round)
        .map(|strokes| strokes - ctx.par)
        .or_else(|| {
            if ctx.current_round == round as i32 {
                golfer.today
            } else {
                None
            }
        })
        .unwrap_or(rules.missing_round_penalty);
    f64::from(relative)
}

/// Playoff bonus strokes. Leg 1 interpolates the team's seeding points
/// between the bracket's best and anchor seeds onto `[-range, 0]`; legs 2-3
/// carry in the entrant's total from the previous leg.
fn playoff_bonus(team: &TeamStanding, ctx: &TournamentContext, rules: &ScoringRules) -> f64 {
    let Some(playoff) = &ctx.playoff else {
        return 0.0;
    };

    match playoff.event_index {
        1 => {
            let Some(mine) = playoff.seed_points.get(&team.bettor_name).copied() else {
                return 0.0;
            };
            let mut seeds: Vec<f64> = playoff.seed_points.values().copied().collect();
            seeds.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
            let best = seeds[0];
            let anchor = seeds[(rules.playoff_seed_anchor - 1).min(seeds.len() - 1)];
            if (best - anchor).abs() < f64::EPSILON {
                return -rules.playoff_bonus_range;
            }
            let bonus = -rules.playoff_bonus_range * (mine - anchor) / (best - anchor);
            bonus.clamp(-rules.playoff_bonus_range, 0.0)
        }
        2 | 3 => playoff
            .prior_event_scores
            .get(&team.bettor_name)
            .copied()
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        if value.is_finite() {
            sum += value;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
