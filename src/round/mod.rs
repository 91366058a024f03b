pub mod file;
pub mod result;
pub mod types;

pub use file::{load_round, CourseRef, RoundFile};
pub use result::PlayerResult;
pub use types::{Course, Hole, Player, Round, ScoringType};

#[cfg(test)]
pub(crate) use types::fixtures;
