#![allow(dead_code)]

use golf_pool::model::{GolferStanding, TeamStanding};
use golf_pool::score::context::TournamentContext;

pub const TEST_EVENT_ID: i32 = 401_580_351;
pub const TEST_YEAR: i32 = 2026;
pub const TEST_PAR: i32 = 72;

pub fn golfer(espn_id: i64, group: i64) -> GolferStanding {
    GolferStanding {
        espn_id,
        golfer_name: format!("Golfer {espn_id}"),
        group,
        world_rank: Some(espn_id),
        rounds: [None; 4],
        today: None,
        thru: None,
        position: String::new(),
        total_score: 0,
    }
}

pub fn golfer_with_rounds(espn_id: i64, group: i64, rounds: [Option<i32>; 4]) -> GolferStanding {
    let total_score: i32 = rounds
        .iter()
        .flatten()
        .map(|strokes| strokes - TEST_PAR)
        .sum();
    GolferStanding {
        rounds,
        total_score,
        ..golfer(espn_id, group)
    }
}

pub fn team(team_id: i64, bettor_name: &str, golfer_espn_ids: Vec<i64>) -> TeamStanding {
    TeamStanding {
        team_id,
        bettor_name: bettor_name.to_string(),
        event_id: TEST_EVENT_ID,
        tour: "pga".to_string(),
        bracket: None,
        golfer_espn_ids,
        tee_times: Vec::new(),
        round_scores: [None; 4],
        today: None,
        thru: None,
        total_score: 0.0,
        position: String::new(),
        prior_position: String::new(),
        points: 0.0,
        earnings: 0.0,
        win: false,
        top_ten: false,
        make_cut: false,
    }
}

pub fn context(current_round: i32, live_play: bool) -> TournamentContext {
    TournamentContext {
        event_id: TEST_EVENT_ID,
        year: TEST_YEAR,
        current_round,
        live_play,
        par: TEST_PAR,
        points: Vec::new(),
        payouts: Vec::new(),
        playoff: None,
    }
}

/// Ten-golfer roster, two per group, with identical recorded rounds.
pub fn even_roster(first_espn_id: i64, rounds: [Option<i32>; 4]) -> Vec<GolferStanding> {
    (0..10)
        .map(|i| golfer_with_rounds(first_espn_id + i, i % 5 + 1, rounds))
        .collect()
}
