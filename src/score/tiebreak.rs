use crate::feeds::HistoricalStatsClient;
use crate::model::{GolferStanding, ScoringRules, TeamStanding};
use crate::score::context::{roster_for_team, TournamentContext};
use ahash::RandomState;
use std::collections::HashMap;

/// Resolve a tied-for-first finish using real-world prize money: among the
/// teams holding `T1` in a peer group, the one whose final-round active
/// golfers earned strictly the most becomes `1` and the rest drop to `T2`.
///
/// Runs only once the tournament is fully finished. The stats fetch is best
/// effort: a failed or ambiguous lookup leaves the tie standing.
pub async fn resolve_first_place_tie(
    teams: &mut [TeamStanding],
    field: &[GolferStanding],
    ctx: &TournamentContext,
    rules: &ScoringRules,
    stats: &dyn HistoricalStatsClient,
) {
    if ctx.current_round < 4 || ctx.live_play {
        return;
    }

    let mut tied_by_peer: HashMap<String, Vec<usize>, RandomState> = HashMap::default();
    for (idx, team) in teams.iter().enumerate() {
        if team.position == "T1" {
            tied_by_peer
                .entry(team.peer_key().to_string())
                .or_default()
                .push(idx);
        }
    }
    tied_by_peer.retain(|_, indices| indices.len() > 1);
    if tied_by_peer.is_empty() {
        return;
    }

    let earnings = match stats.golfer_earnings(ctx.event_id, ctx.year).await {
        Ok(earnings) => earnings,
        Err(err) => {
            eprintln!("tie-break stats unavailable for event {}: {err}", ctx.event_id);
            return;
        }
    };

    for indices in tied_by_peer.values() {
        let sums: Vec<f64> = indices
            .iter()
            .map(|&idx| team_earnings(&teams[idx], field, ctx, rules, &earnings))
            .collect();

        let best = sums.iter().copied().fold(f64::MIN, f64::max);
        let winners: Vec<usize> = indices
            .iter()
            .zip(&sums)
            .filter(|(_, &sum)| sum == best)
            .map(|(&idx, _)| idx)
            .collect();

        if winners.len() != 1 {
            continue;
        }

        for &idx in indices {
            teams[idx].position = if idx == winners[0] {
                "1".to_string()
            } else {
                "T2".to_string()
            };
        }
    }
}

/// Prize money earned by a team's final-round active golfers. Golfers the
/// stats feed missed count 0.
fn team_earnings(
    team: &TeamStanding,
    field: &[GolferStanding],
    ctx: &TournamentContext,
    rules: &ScoringRules,
    earnings: &HashMap<i64, f64>,
) -> f64 {
    let roster = roster_for_team(team, field);
    let breakdown = crate::score::rounds::categorize_round(&roster, 4, ctx, rules);
    breakdown
        .active
        .iter()
        .map(|golfer| earnings.get(&golfer.espn_id).copied().unwrap_or(0.0))
        .sum()
}
