use crate::feeds::rating::normalize_rating;
use crate::model::{FieldEntry, GolferStanding, LiveStatsEntry, RankingEntry, RatedGolfer, ScoringRules};
use chrono::DateTime;
use std::collections::HashMap;

/// Join the field feed with the rankings feed by `espn_id` and resolve each
/// golfer's world rank, skill estimate, and 0-150 rating ahead of draft
/// grouping.
#[must_use]
pub fn merge_field_with_rankings(
    field: Vec<FieldEntry>,
    rankings: &[RankingEntry],
    rules: &ScoringRules,
) -> Vec<RatedGolfer> {
    let ranks_by_id: HashMap<i64, i64> = rankings
        .iter()
        .map(|entry| (entry.espn_id, entry.own_rank))
        .collect();

    field
        .into_iter()
        .map(|entry| {
            let world_rank = entry
                .world_rank
                .or_else(|| ranks_by_id.get(&entry.espn_id).copied());
            let skill_estimate = entry
                .skill_estimate
                .unwrap_or(rules.default_skill_estimate);
            let rating = normalize_rating(Some(skill_estimate), rules);
            let tee_times = [&entry.round_one_tee_time, &entry.round_two_tee_time]
                .into_iter()
                .filter_map(|raw| raw.as_deref().and_then(format_tee_time))
                .collect();

            RatedGolfer {
                espn_id: entry.espn_id,
                golfer_name: entry.golfer_name,
                country: entry.country,
                world_rank,
                skill_estimate,
                rating,
                tee_times,
            }
        })
        .collect()
}

/// Fold a live-scoring feed batch into the tournament's golfer standings.
/// Entries without a matching golfer are ignored; golfers the batch missed
/// keep their previous snapshot.
pub fn apply_live_stats(golfers: &mut [GolferStanding], entries: &[LiveStatsEntry]) {
    let by_id: HashMap<i64, &LiveStatsEntry> =
        entries.iter().map(|entry| (entry.espn_id, entry)).collect();

    for golfer in golfers.iter_mut() {
        let Some(entry) = by_id.get(&golfer.espn_id) else {
            continue;
        };

        for (idx, strokes) in entry.round_scores.iter().enumerate().take(4) {
            golfer.rounds[idx] = Some(*strokes);
        }
        golfer.position = entry.current_position.clone();
        golfer.thru = entry.thru.or(entry.end_hole);
        golfer.today = entry.today;
        golfer.total_score = entry.current_score;
    }
}

/// Reformat a feed tee time (ISO-8601, e.g. `2026-04-09T13:25Z`) into the
/// short course-local display form, `4/9 8:25a`. Unparseable input yields
/// `None`.
#[must_use]
pub fn format_tee_time(tee_time: &str) -> Option<String> {
    let padded = if tee_time.ends_with('Z') {
        format!("{tee_time}+0000")
    } else {
        tee_time.to_owned()
    };

    let parsed = DateTime::parse_from_str(&padded, "%Y-%m-%dT%H:%MZ%z")
        .or_else(|_| DateTime::parse_from_rfc3339(tee_time))
        .ok()?;

    let course_zone = chrono::offset::FixedOffset::east_opt(-5 * 3600)?;
    let local = parsed.with_timezone(&course_zone);
    let mut formatted = local.format("%-m/%-d %-I:%M%P").to_string();
    formatted.pop();
    Some(formatted)
}
