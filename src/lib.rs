//! Golf round scoring.
//!
//! The [`scoring`] module is a set of pure functions: handicap stroke
//! allocation, Stableford points, score labels, round totals and rankings.
//! The remaining modules load rounds and courses from YAML, keep a local
//! history of finished rounds, and format results for the terminal.

pub mod config;
pub mod history;
pub mod logging;
pub mod output;
pub mod round;
pub mod scoring;
