pub mod config;
pub mod types;

pub use config::{DraftGroupSpec, ScoringRules, DRAFT_GROUP_SPECS, OVERFLOW_GROUP};
pub use types::{
    FieldEntry, FieldGroup, GolferStanding, LiveStatsEntry, NameMatch, RankingEntry, RatedGolfer,
    RoundBreakdown, RoundState, TeamStanding,
};
