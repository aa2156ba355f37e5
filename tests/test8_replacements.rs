mod common;

use common::golfer;
use golf_pool::model::{GolferStanding, ScoringRules};
use golf_pool::score::{fill_roster, top_up_one_group};

fn ranked_golfer(espn_id: i64, group: i64, world_rank: Option<i64>) -> GolferStanding {
    GolferStanding {
        world_rank,
        ..golfer(espn_id, group)
    }
}

#[test]
fn test8_best_available_rank_fills_the_gap() {
    let roster: Vec<GolferStanding> = vec![
        golfer(1, 1),
        golfer(2, 1),
        golfer(3, 2),
        golfer(4, 2),
        golfer(5, 3),
        golfer(6, 3),
        golfer(7, 4),
        golfer(8, 4),
        golfer(9, 5),
    ];
    let pool = vec![
        ranked_golfer(50, 5, Some(50)),
        ranked_golfer(51, 5, Some(20)),
        ranked_golfer(52, 5, None),
    ];
    let rules = ScoringRules::default();

    let topped = top_up_one_group(roster, &pool, &rules);
    assert_eq!(topped.len(), 10);
    assert_eq!(topped[9].espn_id, 51, "lowest world rank number wins");
}

#[test]
fn test8_only_one_group_per_invocation() {
    // Groups 2 and 5 are both short; a single call only repairs group 2.
    let roster: Vec<GolferStanding> = vec![
        golfer(1, 1),
        golfer(2, 1),
        golfer(5, 3),
        golfer(6, 3),
        golfer(7, 4),
        golfer(8, 4),
        golfer(9, 5),
    ];
    let pool = vec![
        ranked_golfer(20, 2, Some(5)),
        ranked_golfer(21, 2, Some(8)),
        ranked_golfer(50, 5, Some(50)),
    ];
    let rules = ScoringRules::default();

    let topped = top_up_one_group(roster, &pool, &rules);
    assert_eq!(topped.len(), 9);
    let group_two: Vec<i64> = topped
        .iter()
        .filter(|g| g.group == 2)
        .map(|g| g.espn_id)
        .collect();
    assert_eq!(group_two, vec![20, 21]);
    assert_eq!(topped.iter().filter(|g| g.group == 5).count(), 1);
}

#[test]
fn test8_fill_roster_loops_until_target() {
    let roster: Vec<GolferStanding> = vec![
        golfer(1, 1),
        golfer(2, 1),
        golfer(3, 2),
        golfer(4, 2),
        golfer(5, 3),
        golfer(6, 3),
    ];
    let pool = vec![
        ranked_golfer(40, 4, Some(10)),
        ranked_golfer(41, 4, Some(11)),
        ranked_golfer(50, 5, Some(12)),
        ranked_golfer(51, 5, Some(13)),
    ];
    let rules = ScoringRules::default();

    let filled = fill_roster(roster, &pool, &rules);
    assert_eq!(filled.len(), 10);
    for group in 1..=5 {
        assert_eq!(
            filled.iter().filter(|g| g.group == group).count(),
            2,
            "group {group} must hold the per-group minimum"
        );
    }
}

#[test]
fn test8_pool_golfers_already_rostered_are_skipped() {
    let roster: Vec<GolferStanding> = vec![golfer(1, 1)];
    let pool = vec![
        ranked_golfer(1, 1, Some(1)),
        ranked_golfer(2, 1, Some(2)),
        ranked_golfer(3, 1, Some(3)),
    ];
    let rules = ScoringRules::default();

    let topped = top_up_one_group(roster, &pool, &rules);
    let ids: Vec<i64> = topped.iter().map(|g| g.espn_id).collect();
    assert_eq!(ids, vec![1, 2], "the rostered golfer must not be duplicated");
}

#[test]
fn test8_exhausted_pool_stops_at_the_cap() {
    let roster: Vec<GolferStanding> = (0..8).map(|i| golfer(i, i % 4 + 1)).collect();
    let rules = ScoringRules::default();

    let filled = fill_roster(roster, &[], &rules);
    assert_eq!(filled.len(), 8, "an empty pool cannot grow the roster");
}
