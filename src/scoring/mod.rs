pub mod aggregate;
pub mod engine;
pub mod handicap;
pub mod ranking;
pub mod validation;

pub use aggregate::{back_nine, front_nine, net_score, to_par, total_gross, total_stableford};
pub use engine::{score_class, score_label, stableford_points, ScoreClass};
pub use handicap::{course_handicap, handicap_strokes_on_hole, playing_handicap};
pub use ranking::{rank_players, rank_results};
pub use validation::{validate_course, validate_player, validate_round};
