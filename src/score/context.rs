use crate::error::CoreError;
use crate::feeds::HistoricalStatsClient;
use crate::model::{GolferStanding, ScoringRules, TeamStanding};
use crate::score::aggregate::aggregate_team_score;
use crate::score::replacements::fill_roster;
use crate::score::standings::rank_teams;
use crate::score::tiebreak::resolve_first_place_tie;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable-per-cycle snapshot of the tournament being recomputed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentContext {
    pub event_id: i32,
    pub year: i32,
    /// 0 = not started, 1-4 = in progress, 5 = finished.
    pub current_round: i32,
    pub live_play: bool,
    pub par: i32,
    /// Tier reward arrays, ordered best position to worst.
    pub points: Vec<f64>,
    pub payouts: Vec<f64>,
    pub playoff: Option<PlayoffContext>,
}

impl TournamentContext {
    /// 0 outside the playoffs, 1-3 for the bracket's legs.
    #[must_use]
    pub fn playoff_event_index(&self) -> u8 {
        self.playoff.as_ref().map_or(0, |p| p.event_index)
    }
}

/// Bracket-scoped inputs for playoff scoring: leg 1 converts seeding points
/// to bonus strokes, legs 2-3 carry in each entrant's prior-leg total via an
/// injected lookup.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayoffContext {
    /// 1-based leg within the 3-event bracket.
    pub event_index: u8,
    /// Bettor -> seeding points entering the bracket.
    pub seed_points: HashMap<String, f64>,
    /// Bettor -> total score from the immediately preceding leg.
    pub prior_event_scores: HashMap<String, f64>,
}

/// Result of one recomputation cycle: the fully recomputed teams, plus the
/// teams skipped for malformed input. Callers persist the whole batch at
/// once; the ranking is only meaningful with every peer present.
#[derive(Debug)]
pub struct RecomputeOutcome {
    pub teams: Vec<TeamStanding>,
    pub skipped: Vec<(TeamStanding, CoreError)>,
}

/// A team's roster snapshots, resolved against the tournament pool in pool
/// order.
#[must_use]
pub fn roster_for_team(team: &TeamStanding, field: &[GolferStanding]) -> Vec<GolferStanding> {
    field
        .iter()
        .filter(|golfer| team.golfer_espn_ids.contains(&golfer.espn_id))
        .cloned()
        .collect()
}

/// Recompute one tournament's standings as a single atomic batch: score
/// every team (replacement fill, then aggregation), rank peers, then settle
/// a finished tournament's first-place tie when a stats client is supplied.
///
/// A team with no resolvable roster is skipped and reported rather than
/// aborting the batch.
pub async fn recompute_standings(
    teams: Vec<TeamStanding>,
    field: &[GolferStanding],
    ctx: &TournamentContext,
    rules: &ScoringRules,
    stats: Option<&dyn HistoricalStatsClient>,
) -> RecomputeOutcome {
    let mut scored: Vec<TeamStanding> = Vec::with_capacity(teams.len());
    let mut skipped: Vec<(TeamStanding, CoreError)> = Vec::new();

    for mut team in teams {
        let roster = roster_for_team(&team, field);
        if roster.is_empty() {
            let reason = CoreError::Input(format!(
                "team {} has no roster golfers in the event field",
                team.team_id
            ));
            skipped.push((team, reason));
            continue;
        }

        let roster = fill_roster(roster, field, rules);
        aggregate_team_score(&mut team, &roster, ctx, rules);
        team.golfer_espn_ids = roster.iter().map(|g| g.espn_id).collect();
        scored.push(team);
    }

    rank_teams(&mut scored, ctx, rules);

    if let Some(stats) = stats {
        resolve_first_place_tie(&mut scored, field, ctx, rules, stats).await;
    }

    RecomputeOutcome {
        teams: scored,
        skipped,
    }
}
