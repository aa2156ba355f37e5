pub mod error;
pub mod feeds;
pub mod model;
pub mod score;

pub use error::CoreError;
pub use model::{GolferStanding, RoundBreakdown, RoundState, ScoringRules, TeamStanding};
pub use score::context::{PlayoffContext, RecomputeOutcome, TournamentContext};
