/// Scoring rules for one competition format. The reference-domain values
/// live in the `Default` impl so alternative formats can swap the tables
/// without code changes.
#[derive(Clone, Debug)]
pub struct ScoringRules {
    /// Target roster size after replacement fill.
    pub roster_size: usize,
    /// Minimum golfers a team must retain per draft group.
    pub group_min: usize,
    /// Active golfers counted in rounds 1-2, by playoff leg. Index 0 is the
    /// non-playoff schedule; legs 1-3 follow.
    pub early_round_counts: [usize; 4],
    /// Active golfers counted in rounds 3-4, by playoff leg.
    pub late_round_counts: [usize; 4],
    /// Relative-to-par score assigned when a golfer has no recorded score
    /// for the round being sorted or averaged.
    pub missing_round_penalty: i32,
    /// World rank assumed for pool golfers the rankings feed missed.
    pub default_world_rank: i64,
    /// Skill estimate assumed for unranked golfers, also the rating
    /// normalizer's fallback input.
    pub default_skill_estimate: f64,
    /// Seeding interpolation anchors on the Nth-best seed in the bracket.
    pub playoff_seed_anchor: usize,
    /// Bonus strokes span `[-playoff_bonus_range, 0]`.
    pub playoff_bonus_range: f64,
    pub top_ten_cutoff: usize,
    /// Hard cap on replacement top-up calls per roster.
    pub replacement_cap: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            roster_size: 10,
            group_min: 2,
            early_round_counts: [10, 10, 5, 3],
            late_round_counts: [5, 5, 5, 3],
            missing_round_penalty: 8,
            default_world_rank: 1000,
            default_skill_estimate: -50.0,
            playoff_seed_anchor: 35,
            playoff_bonus_range: 10.0,
            top_ten_cutoff: 10,
            replacement_cap: 10,
        }
    }
}

impl ScoringRules {
    /// Active-golfer count for a playoff leg (0 = regular season) and a
    /// round index 0-5. Round 0 follows the early-round schedule, round 5
    /// the late one.
    #[must_use]
    pub fn selection_count(&self, event_index: u8, round: usize) -> usize {
        let leg = usize::from(event_index).min(3);
        if round <= 2 {
            self.early_round_counts[leg]
        } else {
            self.late_round_counts[leg]
        }
    }
}

/// Sizing for one pre-tournament draft group: a share of the field and a
/// hard member cap, whichever is smaller.
#[derive(Clone, Copy, Debug)]
pub struct DraftGroupSpec {
    pub group: i64,
    pub field_share: f64,
    pub max_count: usize,
}

/// Groups 1-4 fill top-down from the skill-ranked field; everyone left over
/// spills into group 5.
pub const DRAFT_GROUP_SPECS: [DraftGroupSpec; 4] = [
    DraftGroupSpec {
        group: 1,
        field_share: 0.10,
        max_count: 10,
    },
    DraftGroupSpec {
        group: 2,
        field_share: 0.175,
        max_count: 16,
    },
    DraftGroupSpec {
        group: 3,
        field_share: 0.225,
        max_count: 22,
    },
    DraftGroupSpec {
        group: 4,
        field_share: 0.25,
        max_count: 30,
    },
];

pub const OVERFLOW_GROUP: i64 = 5;
