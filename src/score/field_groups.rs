use crate::model::{FieldGroup, RatedGolfer, DRAFT_GROUP_SPECS, OVERFLOW_GROUP};

/// Partition a tournament field into the 5 draft groups. Groups 1-4 fill
/// top-down from the skill-ranked field, each capped at
/// `min(floor(N * share), max_count)`; the remainder spills into group 5,
/// with a parity fallback that keeps group 4 and group 5 balanced when the
/// tail is still large. Every golfer lands in exactly one group.
#[must_use]
pub fn assign_field_groups(golfers: &[RatedGolfer]) -> Vec<FieldGroup> {
    let field_size = golfers.len();

    let mut ranked: Vec<&RatedGolfer> = golfers.iter().collect();
    ranked.sort_by(|a, b| {
        b.skill_estimate
            .partial_cmp(&a.skill_estimate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.espn_id.cmp(&b.espn_id))
    });

    let caps: Vec<usize> = DRAFT_GROUP_SPECS
        .iter()
        .map(|spec| {
            let share_cap = (field_size as f64 * spec.field_share).floor() as usize;
            share_cap.min(spec.max_count)
        })
        .collect();

    let mut groups: Vec<FieldGroup> = DRAFT_GROUP_SPECS
        .iter()
        .map(|spec| FieldGroup {
            group: spec.group,
            golfer_espn_ids: Vec::new(),
        })
        .collect();
    groups.push(FieldGroup {
        group: OVERFLOW_GROUP,
        golfer_espn_ids: Vec::new(),
    });

    for (idx, golfer) in ranked.iter().enumerate() {
        let open_slot = caps
            .iter()
            .enumerate()
            .find(|(slot, cap)| groups[*slot].golfer_espn_ids.len() < **cap)
            .map(|(slot, _)| slot);

        let slot = match open_slot {
            Some(slot) => slot,
            None => {
                let remaining = field_size - idx;
                let tail_capacity = groups[3].golfer_espn_ids.len() as f64
                    + groups[4].golfer_espn_ids.len() as f64 * 0.5;
                if remaining as f64 <= tail_capacity || remaining == 1 {
                    4
                } else if idx % 2 == 0 {
                    3
                } else {
                    4
                }
            }
        };
        groups[slot].golfer_espn_ids.push(golfer.espn_id);
    }

    groups
}
