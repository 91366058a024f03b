use std::collections::HashSet;

use crate::round::{Course, Player, Round};

pub const MAX_HANDICAP: f64 = 36.0;
pub const MAX_GROSS: i32 = 15;
pub const MAX_PLAYERS: usize = 4;

/// Validate a course definition.
/// Returns all validation errors at once (not just the first).
pub fn validate_course(course: &Course) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    check_course(course, &format!("course '{}'", course.id), &mut errors);
    into_result(errors)
}

/// Validate a single player against the number of holes in play.
pub fn validate_player(player: &Player, holes: usize) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    check_player(player, holes, "player", &mut errors);
    into_result(errors)
}

/// Validate a round before it is scored or finished.
pub fn validate_round(round: &Round) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_course(&round.course, "course", &mut errors);

    if round.holes != 9 && round.holes != 18 {
        errors.push(format!("holes: must be 9 or 18, got {}", round.holes));
    } else if round.holes as usize > round.course.holes.len() {
        errors.push(format!(
            "holes: round plays {} holes but course '{}' has {}",
            round.holes,
            round.course.id,
            round.course.holes.len()
        ));
    }

    if round.players.is_empty() {
        errors.push("players: at least one player is required".to_string());
    } else if round.players.len() > MAX_PLAYERS {
        errors.push(format!(
            "players: at most {} players, got {}",
            MAX_PLAYERS,
            round.players.len()
        ));
    }

    let mut seen = HashSet::new();
    for (i, player) in round.players.iter().enumerate() {
        let path = format!("players[{}]", i);
        check_player(player, round.holes as usize, &path, &mut errors);
        if !player.name.trim().is_empty() && !seen.insert(player.name.trim().to_lowercase()) {
            errors.push(format!("{}.name: duplicate player '{}'", path, player.name));
        }
    }

    into_result(errors)
}

fn check_course(course: &Course, path: &str, errors: &mut Vec<String>) {
    let count = course.holes.len();
    if count != 9 && count != 18 {
        errors.push(format!("{}: must have 9 or 18 holes, got {}", path, count));
    }

    let mut seen_si = HashSet::new();
    for (i, hole) in course.holes.iter().enumerate() {
        if hole.number as usize != i + 1 {
            errors.push(format!(
                "{}.holes[{}].number: expected {}, got {}",
                path,
                i,
                i + 1,
                hole.number
            ));
        }
        if hole.par < 3 {
            errors.push(format!("{}.holes[{}].par: must be at least 3, got {}", path, i, hole.par));
        }
        if !(1..=18).contains(&hole.stroke_index) {
            errors.push(format!(
                "{}.holes[{}].stroke_index: must be 1-18, got {}",
                path, i, hole.stroke_index
            ));
        } else if !seen_si.insert(hole.stroke_index) {
            errors.push(format!(
                "{}.holes[{}].stroke_index: {} is used more than once",
                path, i, hole.stroke_index
            ));
        }
    }
}

fn check_player(player: &Player, holes: usize, path: &str, errors: &mut Vec<String>) {
    if player.name.trim().is_empty() {
        errors.push(format!("{}.name: must not be empty", path));
    }
    if !player.handicap.is_finite() || !(0.0..=MAX_HANDICAP).contains(&player.handicap) {
        errors.push(format!(
            "{}.handicap: must be between 0 and {}, got {}",
            path, MAX_HANDICAP, player.handicap
        ));
    }
    if player.scores.len() > holes {
        errors.push(format!(
            "{}.scores: {} scores recorded for a {}-hole round",
            path,
            player.scores.len(),
            holes
        ));
    }
    for (i, &gross) in player.scores.iter().enumerate() {
        if !(0..=MAX_GROSS).contains(&gross) {
            errors.push(format!(
                "{}.scores[{}]: must be between 0 and {}, got {}",
                path, i, MAX_GROSS, gross
            ));
        }
    }
}

fn into_result(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
