pub mod formatter;

pub use formatter::{
    format_courses, format_history, format_leaderboard, format_player_holes, format_results,
    format_scorecard, format_standings, format_to_par, should_use_colors,
};
