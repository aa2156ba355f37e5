use crate::model::{GolferStanding, RoundBreakdown, RoundState, ScoringRules};
use crate::score::context::TournamentContext;

/// Classify a team's roster for one round (0 = pre-tournament aggregate,
/// 1-4 = tournament rounds, 5 = tournament-final view) and infer the round's
/// state from the data on hand.
///
/// The first `selection_count` golfers by score are active; eligible
/// leftovers are alternates. `CUT`/`WD`/`DQ` golfers are inactive for every
/// round they did not record a score in; the rounds they completed before
/// going out still count. A roster with fewer eligible golfers than the
/// selection count is forced to state `cut`.
#[must_use]
pub fn categorize_round(
    roster: &[GolferStanding],
    round: usize,
    ctx: &TournamentContext,
    rules: &ScoringRules,
) -> RoundBreakdown {
    let required = rules.selection_count(ctx.playoff_event_index(), round);
    let scoring_round = round.clamp(1, 4);
    let live_round = ctx.live_play && ctx.current_round == scoring_round as i32;

    let mut eligible: Vec<&GolferStanding> = Vec::new();
    let mut inactive: Vec<GolferStanding> = Vec::new();
    for golfer in roster {
        let recorded_this_round = golfer.round_score(scoring_round).is_some();
        if golfer.has_terminal_status() && !recorded_this_round {
            inactive.push(golfer.clone());
        } else {
            eligible.push(golfer);
        }
    }

    eligible.sort_by(|a, b| {
        sort_key(a, scoring_round, live_round, ctx.par, rules)
            .cmp(&sort_key(b, scoring_round, live_round, ctx.par, rules))
    });

    let split = required.min(eligible.len());
    let active: Vec<GolferStanding> = eligible[..split].iter().map(|g| (*g).clone()).collect();
    let alternates: Vec<GolferStanding> = eligible[split..].iter().map(|g| (*g).clone()).collect();

    let mut state = infer_state(round, &eligible, &active, live_round);
    if eligible.len() < required {
        state = RoundState::Cut;
    }

    RoundBreakdown {
        state,
        active,
        alternates,
        inactive,
    }
}

/// Deterministic selection ordering: the round score (live or recorded,
/// relative to par, +penalty when missing), then cumulative score, then
/// golfer id.
fn sort_key(
    golfer: &GolferStanding,
    scoring_round: usize,
    live_round: bool,
    par: i32,
    rules: &ScoringRules,
) -> (i32, i32, i64) {
    let primary = if live_round {
        golfer.today.unwrap_or(rules.missing_round_penalty)
    } else {
        golfer
            .round_score(scoring_round)
            .map_or(rules.missing_round_penalty, |strokes| strokes - par)
    };
    (primary, golfer.total_score, golfer.espn_id)
}

fn infer_state(
    round: usize,
    eligible: &[&GolferStanding],
    active: &[GolferStanding],
    live_round: bool,
) -> RoundState {
    match round {
        0 => RoundState::Completed,
        5 => {
            if all_recorded(eligible, 4) {
                RoundState::Completed
            } else {
                RoundState::Upcoming
            }
        }
        r => {
            if all_recorded(eligible, r) {
                RoundState::Completed
            } else if live_round && !active.is_empty() && active.iter().all(|g| g.thru == Some(18))
            {
                RoundState::Completed
            } else if live_round && active.iter().any(|g| g.thru.unwrap_or(0) > 0) {
                RoundState::Active
            } else {
                RoundState::Upcoming
            }
        }
    }
}

fn all_recorded(eligible: &[&GolferStanding], round: usize) -> bool {
    !eligible.is_empty() && eligible.iter().all(|g| g.round_score(round).is_some())
}
