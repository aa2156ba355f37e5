mod common;

use common::{context, even_roster, golfer, golfer_with_rounds};
use golf_pool::model::{RoundState, ScoringRules};
use golf_pool::score::categorize_round;
use golf_pool::score::context::PlayoffContext;
use std::collections::HashMap;

fn playoff_context(current_round: i32, live_play: bool, event_index: u8) -> golf_pool::TournamentContext {
    let mut ctx = context(current_round, live_play);
    ctx.playoff = Some(PlayoffContext {
        event_index,
        seed_points: HashMap::new(),
        prior_event_scores: HashMap::new(),
    });
    ctx
}

#[test]
fn test2_recorded_round_is_completed() {
    let roster = even_roster(100, [Some(70), None, None, None]);
    let ctx = context(2, false);
    let rules = ScoringRules::default();

    let breakdown = categorize_round(&roster, 1, &ctx, &rules);
    assert_eq!(breakdown.state, RoundState::Completed);
    assert_eq!(breakdown.active.len(), 10);
    assert!(breakdown.alternates.is_empty());
    assert!(breakdown.inactive.is_empty());
}

#[test]
fn test2_live_round_with_progress_is_active() {
    let mut roster = even_roster(100, [Some(70), None, None, None]);
    for golfer in &mut roster {
        golfer.today = Some(-1);
        golfer.thru = Some(9);
    }
    let ctx = context(2, true);
    let rules = ScoringRules::default();

    let breakdown = categorize_round(&roster, 2, &ctx, &rules);
    assert_eq!(breakdown.state, RoundState::Active);
}

#[test]
fn test2_live_round_everyone_thru_18_is_completed() {
    let mut roster = even_roster(100, [Some(70), None, None, None]);
    for golfer in &mut roster {
        golfer.today = Some(2);
        golfer.thru = Some(18);
    }
    let ctx = context(2, true);
    let rules = ScoringRules::default();

    let breakdown = categorize_round(&roster, 2, &ctx, &rules);
    assert_eq!(breakdown.state, RoundState::Completed);
}

#[test]
fn test2_untouched_round_is_upcoming() {
    let roster = even_roster(100, [Some(70), None, None, None]);
    let ctx = context(2, false);
    let rules = ScoringRules::default();

    let breakdown = categorize_round(&roster, 3, &ctx, &rules);
    assert_eq!(breakdown.state, RoundState::Upcoming);
}

#[test]
fn test2_round_zero_always_completed_and_round_five_mirrors_four() {
    let rules = ScoringRules::default();

    let unfinished = even_roster(100, [Some(70), Some(71), None, None]);
    let ctx = context(3, false);
    assert_eq!(
        categorize_round(&unfinished, 0, &ctx, &rules).state,
        RoundState::Completed
    );
    assert_eq!(
        categorize_round(&unfinished, 5, &ctx, &rules).state,
        RoundState::Upcoming
    );

    let finished = even_roster(100, [Some(70), Some(71), Some(70), Some(69)]);
    let ctx = context(5, false);
    assert_eq!(
        categorize_round(&finished, 5, &ctx, &rules).state,
        RoundState::Completed
    );
}

#[test]
fn test2_terminal_golfers_inactive_for_rounds_they_missed() {
    let mut roster = even_roster(100, [Some(68), Some(69), None, None]);
    roster[0].position = "WD".to_string();
    roster[1].position = "DQ".to_string();
    roster[2].position = "CUT".to_string();
    let ctx = context(3, false);
    let rules = ScoringRules::default();

    // The rounds they finished before going out still count.
    let second_round = categorize_round(&roster, 2, &ctx, &rules);
    assert!(second_round.inactive.is_empty());

    let third_round = categorize_round(&roster, 3, &ctx, &rules);
    let inactive_ids: Vec<i64> = third_round.inactive.iter().map(|g| g.espn_id).collect();
    assert_eq!(inactive_ids, vec![100, 101, 102]);
}

#[test]
fn test2_short_roster_forces_cut_state() {
    let mut roster = even_roster(100, [Some(70), Some(70), None, None]);
    for golfer in roster.iter_mut().take(6) {
        golfer.position = "CUT".to_string();
    }
    let ctx = context(3, false);
    let rules = ScoringRules::default();

    // 4 eligible golfers remain; rounds 3-4 require 5.
    let breakdown = categorize_round(&roster, 3, &ctx, &rules);
    assert_eq!(breakdown.state, RoundState::Cut);
    assert_eq!(
        breakdown.active.len() + breakdown.alternates.len() + breakdown.inactive.len(),
        roster.len()
    );
}

#[test]
fn test2_selection_counts_follow_playoff_schedule() {
    let rules = ScoringRules::default();
    let roster = even_roster(100, [Some(70), Some(71), Some(72), Some(70)]);

    let regular = context(5, false);
    assert_eq!(categorize_round(&roster, 1, &regular, &rules).active.len(), 10);
    assert_eq!(categorize_round(&roster, 4, &regular, &rules).active.len(), 5);

    let leg_two = playoff_context(5, false, 2);
    assert_eq!(categorize_round(&roster, 1, &leg_two, &rules).active.len(), 5);

    let leg_three = playoff_context(5, false, 3);
    assert_eq!(categorize_round(&roster, 1, &leg_three, &rules).active.len(), 3);
    assert_eq!(categorize_round(&roster, 4, &leg_three, &rules).active.len(), 3);
}

#[test]
fn test2_active_set_prefers_lowest_scores_then_golfer_id() {
    let rules = ScoringRules::default();
    let ctx = playoff_context(5, false, 3);

    let roster = vec![
        golfer_with_rounds(301, 1, [Some(74), None, None, None]),
        golfer_with_rounds(302, 1, [Some(68), None, None, None]),
        golfer_with_rounds(303, 2, [Some(70), None, None, None]),
        golfer_with_rounds(304, 2, [Some(70), None, None, None]),
        golfer(305, 3),
    ];

    let breakdown = categorize_round(&roster, 1, &ctx, &rules);
    let active_ids = breakdown.active_espn_ids();
    // 68 first, then the 70s split by espn_id; the missing card sorts last.
    assert_eq!(active_ids, vec![302, 303, 304]);
    let alternate_ids: Vec<i64> = breakdown.alternates.iter().map(|g| g.espn_id).collect();
    assert_eq!(alternate_ids, vec![301, 305]);
}

#[test]
fn test2_categorization_is_deterministic() {
    let mut roster = even_roster(100, [Some(70), Some(71), None, None]);
    roster[3].today = Some(-2);
    roster[3].thru = Some(12);
    let ctx = context(2, true);
    let rules = ScoringRules::default();

    let first = serde_json::to_string(&categorize_round(&roster, 2, &ctx, &rules)).unwrap();
    let second = serde_json::to_string(&categorize_round(&roster, 2, &ctx, &rules)).unwrap();
    assert_eq!(first, second);
}
