pub mod aggregate;
pub mod context;
pub mod field_groups;
pub mod replacements;
pub mod rounds;
pub mod standings;
pub mod tiebreak;

pub use aggregate::aggregate_team_score;
pub use context::recompute_standings;
pub use field_groups::assign_field_groups;
pub use replacements::{fill_roster, top_up_one_group};
pub use rounds::categorize_round;
pub use standings::{allocate_tied_share, rank_teams};
pub use tiebreak::resolve_first_place_tie;
