use serde::{Deserialize, Serialize};

/// One golfer's standing within a single tournament, as maintained by the
/// live-sync collaborator. The engine treats these as read-only snapshots.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GolferStanding {
    pub espn_id: i64,
    pub golfer_name: String,
    pub group: i64,
    pub world_rank: Option<i64>,
    /// Strokes per round, set once the round is recorded.
    pub rounds: [Option<i32>; 4],
    /// Live score-for-the-day, relative to par.
    pub today: Option<i32>,
    /// Holes completed in the round in progress, 0-18.
    pub thru: Option<i32>,
    /// Numeric, `T`-prefixed tie, or terminal `CUT`/`WD`/`DQ`. Empty before
    /// the tournament starts.
    pub position: String,
    /// Cumulative score relative to par across recorded rounds.
    pub total_score: i32,
}

impl GolferStanding {
    /// Recorded strokes for a 1-based round number.
    #[must_use]
    pub fn round_score(&self, round: usize) -> Option<i32> {
        if (1..=4).contains(&round) {
            self.rounds[round - 1]
        } else {
            None
        }
    }

    /// `CUT`, `WD`, and `DQ` golfers never re-enter scoring.
    #[must_use]
    pub fn has_terminal_status(&self) -> bool {
        matches!(self.position.as_str(), "CUT" | "WD" | "DQ")
    }
}

/// A bettor's team for one tournament. Created once per (bettor, event) pair
/// and recomputed in place every cycle.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamStanding {
    pub team_id: i64,
    pub bettor_name: String,
    pub event_id: i32,
    pub tour: String,
    /// Playoff bracket tag; absent outside the playoffs.
    pub bracket: Option<String>,
    pub golfer_espn_ids: Vec<i64>,
    pub tee_times: Vec<String>,
    /// Per-round team scores relative to par, rounded to 1 decimal for
    /// display. A round contributes only once completed.
    pub round_scores: [Option<f64>; 4],
    pub today: Option<f64>,
    pub thru: Option<f64>,
    /// Full-precision total used for ranking.
    pub total_score: f64,
    pub position: String,
    pub prior_position: String,
    pub points: f64,
    pub earnings: f64,
    pub win: bool,
    pub top_ten: bool,
    pub make_cut: bool,
}

impl TeamStanding {
    /// Teams are ranked against their playoff bracket when tagged, otherwise
    /// against their tour division.
    #[must_use]
    pub fn peer_key(&self) -> &str {
        self.bracket.as_deref().unwrap_or(&self.tour)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundState {
    Upcoming,
    Active,
    Completed,
    Cut,
}

/// Roster classification for one team and one round.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundBreakdown {
    pub state: RoundState,
    pub active: Vec<GolferStanding>,
    pub alternates: Vec<GolferStanding>,
    pub inactive: Vec<GolferStanding>,
}

impl RoundBreakdown {
    #[must_use]
    pub fn active_espn_ids(&self) -> Vec<i64> {
        self.active.iter().map(|g| g.espn_id).collect()
    }
}

/// One entry from the pre-tournament field feed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FieldEntry {
    pub espn_id: i64,
    pub golfer_name: String,
    pub country: Option<String>,
    pub world_rank: Option<i64>,
    pub skill_estimate: Option<f64>,
    pub round_one_tee_time: Option<String>,
    pub round_two_tee_time: Option<String>,
}

/// One entry from the world-rankings feed, joined to the field by `espn_id`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RankingEntry {
    pub espn_id: i64,
    pub own_rank: i64,
    pub player_name: String,
    pub country: Option<String>,
}

/// One entry from the live-scoring feed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LiveStatsEntry {
    pub espn_id: i64,
    pub current_position: String,
    pub thru: Option<i32>,
    pub end_hole: Option<i32>,
    /// Strokes per recorded round, in round order.
    pub round_scores: Vec<i32>,
    /// Cumulative score relative to par.
    pub current_score: i32,
    /// Live score-for-the-day, relative to par.
    pub today: Option<i32>,
}

/// A field golfer after the rankings join, carrying the resolved skill
/// estimate and the 0-150 rating used for draft grouping.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RatedGolfer {
    pub espn_id: i64,
    pub golfer_name: String,
    pub country: Option<String>,
    pub world_rank: Option<i64>,
    pub skill_estimate: f64,
    pub rating: f64,
    pub tee_times: Vec<String>,
}

/// One draft tier and its members, for collaborators to persist.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FieldGroup {
    pub group: i64,
    pub golfer_espn_ids: Vec<i64>,
}

/// Verdict of the event-name compatibility check.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NameMatch {
    pub compatible: bool,
    pub score: f64,
    pub overlapping_tokens: Vec<String>,
    pub expected_tokens: Vec<String>,
    pub actual_tokens: Vec<String>,
}
