use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::history::LeaderboardEntry;
use crate::round::{Course, Player, Round, ScoringType};
use crate::scoring::{
    handicap_strokes_on_hole, net_score, playing_handicap, rank_players, score_class, score_label,
    stableford_points, to_par, total_gross, total_stableford, ScoreClass,
};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Score against par as golfers write it: "E", "+3", "-2"
pub fn format_to_par(diff: Option<i32>) -> String {
    match diff {
        None => "-".to_string(),
        Some(0) => "E".to_string(),
        Some(d) if d > 0 => format!("+{}", d),
        Some(d) => d.to_string(),
    }
}

/// Colour an already padded cell by its score tier
fn paint(cell: &str, class: ScoreClass) -> String {
    match class {
        ScoreClass::Eagle => cell.magenta().bold().to_string(),
        ScoreClass::Birdie => cell.green().bold().to_string(),
        ScoreClass::Par => cell.to_string(),
        ScoreClass::Bogey => cell.yellow().to_string(),
        ScoreClass::Double => cell.red().to_string(),
        ScoreClass::Worse => cell.bright_red().bold().to_string(),
    }
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(6)
}

/// Live leaderboard for a round in progress.
/// Columns: position, name, handicap, holes played, points, gross, net, to par
pub fn format_leaderboard(round: &Round, use_colors: bool) -> String {
    if round.players.is_empty() {
        return "No players in this round.".to_string();
    }

    let course = round.playing_course();
    let ranked = rank_players(&round.players, &course, round.scoring_type);
    let width = name_width(round.players.iter().map(|p| p.name.as_str()));

    let header = format!(
        "{:>3}  {:<width$}  {:>5}  {:>4}  {:>4}  {:>5}  {:>4}  {:>5}",
        "#",
        "Player",
        "HCP",
        "Thru",
        "Pts",
        "Gross",
        "Net",
        "Par",
        width = width
    );

    let mut lines = vec![
        format!(
            "{} · {} · {} holes",
            course.display_name(),
            round.scoring_type,
            round.holes
        ),
        if use_colors {
            header.dimmed().to_string()
        } else {
            header
        },
    ];

    for (idx, player) in ranked.iter().enumerate() {
        let thru = player.holes_played();
        let line = format!(
            "{:>2}.  {:<width$}  {:>5.1}  {:>4}  {:>4}  {:>5}  {:>4}  {:>5}",
            idx + 1,
            player.name,
            player.handicap,
            thru,
            total_stableford(player, &course),
            total_gross(player),
            net_score(player, &course),
            format_to_par(to_par(player, &course)),
            width = width
        );
        lines.push(if use_colors && idx == 0 {
            line.bold().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

fn scorecard_header(course: &Course, width: usize) -> Vec<String> {
    let numbers: Vec<String> = course.holes.iter().map(|h| format!("{:>3}", h.number)).collect();
    let pars: Vec<String> = course.holes.iter().map(|h| format!("{:>3}", h.par)).collect();
    let indexes: Vec<String> = course
        .holes
        .iter()
        .map(|h| format!("{:>3}", h.stroke_index))
        .collect();
    vec![
        format!("{:<width$} {}  {:>4}", "Hole", numbers.join(""), "Tot", width = width),
        format!(
            "{:<width$} {}  {:>4}",
            "Par",
            pars.join(""),
            course.par(),
            width = width
        ),
        format!("{:<width$} {}", "SI", indexes.join(""), width = width),
    ]
}

fn scorecard_rows(player: &Player, course: &Course, width: usize, use_colors: bool) -> Vec<String> {
    let playing = playing_handicap(player.handicap);

    let mut gross_cells = Vec::new();
    let mut point_cells = Vec::new();
    let mut stroke_cells = Vec::new();
    for (i, hole) in course.holes.iter().enumerate() {
        let strokes = handicap_strokes_on_hole(playing, hole.stroke_index);
        stroke_cells.push(format!("{:>3}", ".".repeat(strokes.clamp(0, 3) as usize)));

        let gross = player.scores.get(i).copied().unwrap_or(0);
        if gross <= 0 {
            gross_cells.push(format!("{:>3}", "-"));
            point_cells.push(format!("{:>3}", ""));
            continue;
        }
        let cell = format!("{:>3}", gross);
        gross_cells.push(if use_colors {
            paint(&cell, score_class(gross, hole.par))
        } else {
            cell
        });
        let points = stableford_points(gross, hole.par, strokes).unwrap_or(0);
        point_cells.push(format!("{:>3}", points));
    }

    let label = format!("{} ({})", player.name, playing);
    vec![
        format!(
            "{:<width$} {}  {:>4}",
            truncate(&label, width),
            gross_cells.join(""),
            total_gross(player),
            width = width
        ),
        format!("{:<width$} {}", "  strokes", stroke_cells.join(""), width = width),
        format!(
            "{:<width$} {}  {:>4}",
            "  points",
            point_cells.join(""),
            total_stableford(player, course),
            width = width
        ),
    ]
}

/// Hole-by-hole scorecard. Each player row is followed by the handicap
/// strokes received (one dot per stroke) and the Stableford points.
pub fn format_scorecard(round: &Round, use_colors: bool) -> String {
    let course = round.playing_course();
    let width = name_width(round.players.iter().map(|p| p.name.as_str())) + 5;

    let mut lines = vec![format!("{} · Par {}", course.display_name(), course.par())];
    lines.extend(scorecard_header(&course, width));
    for player in &round.players {
        lines.push(String::new());
        lines.extend(scorecard_rows(player, &course, width, use_colors));
    }
    lines.join("\n")
}

/// Per-hole breakdown for one player: gross, label and points.
pub fn format_player_holes(player: &Player, course: &Course) -> String {
    let playing = playing_handicap(player.handicap);
    course
        .holes
        .iter()
        .zip(player.scores.iter())
        .filter(|(_, &gross)| gross > 0)
        .map(|(hole, &gross)| {
            let strokes = handicap_strokes_on_hole(playing, hole.stroke_index);
            let points = stableford_points(gross, hole.par, strokes).unwrap_or(0);
            format!(
                "  H{:<2} par {} SI {:>2}: {:>2}  {:<9} {} pts",
                hole.number,
                hole.par,
                hole.stroke_index,
                gross,
                score_label(gross, hole.par),
                points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final results of a finished round.
pub fn format_results(round: &Round, use_colors: bool) -> String {
    if round.player_results.is_empty() {
        return "No results for this round.".to_string();
    }

    let width = name_width(round.player_results.iter().map(|r| r.name.as_str()));
    let main_column = match round.scoring_type {
        ScoringType::Stableford => "Pts",
        ScoringType::StrokePlay => "Par",
    };

    let mut lines = vec![
        format!(
            "{} · {} · {}",
            round.course.display_name(),
            round.scoring_type,
            round.date.format("%-d %b %Y")
        ),
        format!(
            "{:>3}  {:<width$}  {:>5}  {:>4}  {:>5}  {:>4}  {:>4}  {:>4}",
            "#",
            "Player",
            "HCP",
            main_column,
            "Gross",
            "Net",
            "Out",
            "In",
            width = width
        ),
    ];

    for (idx, result) in round.player_results.iter().enumerate() {
        let main_value = match round.scoring_type {
            ScoringType::Stableford => result.stableford.to_string(),
            ScoringType::StrokePlay => format_to_par(Some(result.to_par)),
        };
        let line = format!(
            "{:>2}.  {:<width$}  {:>5.1}  {:>4}  {:>5}  {:>4}  {:>4}  {:>4}",
            idx + 1,
            result.name,
            result.handicap,
            main_value,
            result.gross,
            result.net,
            result.front_nine,
            result.back_nine,
            width = width
        );
        lines.push(if use_colors && idx == 0 {
            line.bold().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

/// One line per finished round: date, course, winner
pub fn format_history(rounds: &[&Round], use_colors: bool) -> String {
    if rounds.is_empty() {
        return "No rounds played yet.".to_string();
    }

    let term_width = get_terminal_width();

    rounds
        .iter()
        .map(|round| {
            let date = round.date.format("%Y-%m-%d").to_string();
            let winner = match round.winner() {
                Some(w) => match round.scoring_type {
                    ScoringType::Stableford => format!("{} {} pts", w.name, w.stableford),
                    ScoringType::StrokePlay => format!("{} net {}", w.name, w.net),
                },
                None => "-".to_string(),
            };
            let fixed = date.len() + winner.len() + 6;
            let course = match term_width {
                Some(w) if w > fixed + 10 => truncate(&round.course.name, w - fixed),
                Some(_) => truncate(&round.course.name, 20),
                None => round.course.name.clone(),
            };

            if use_colors {
                format!("{}  {}  {}", date.dimmed(), course.cyan(), winner.bold())
            } else {
                format!("{}  {}  {}", date, course, winner)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cumulative leaderboard across all recorded rounds
pub fn format_standings(entries: &[LeaderboardEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "Leaderboard is empty.".to_string();
    }

    let width = name_width(entries.iter().map(|e| e.name.as_str()));
    let header = format!(
        "{:>3}  {:<width$}  {:>6}  {:>4}  {:>5}  {:>5}  {:>5}",
        "#",
        "Player",
        "Rounds",
        "Best",
        "Avg",
        "Total",
        "Net",
        width = width
    );

    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    lines.extend(entries.iter().enumerate().map(|(idx, e)| {
        format!(
            "{:>2}.  {:<width$}  {:>6}  {:>4}  {:>5.1}  {:>5}  {:>5}",
            idx + 1,
            e.name,
            e.rounds,
            e.best_points,
            e.average_points(),
            e.total_points,
            e.best_net,
            width = width
        )
    }));

    lines.join("\n")
}

/// Course catalogue: id, name, location, par, rating/slope
pub fn format_courses(courses: &[Course], use_colors: bool) -> String {
    if courses.is_empty() {
        return "No courses configured.".to_string();
    }

    let id_width = courses.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);
    let term_width = get_terminal_width();

    courses
        .iter()
        .map(|c| {
            let stats = format!(
                "{} holes  par {}  CR {:.1}  slope {}",
                c.holes.len(),
                c.par(),
                c.rating,
                c.slope
            );
            let location = match (&c.city, &c.province) {
                (Some(city), Some(province)) => format!("{}, {}", city, province),
                (Some(city), None) => city.clone(),
                (None, Some(province)) => province.clone(),
                (None, None) => String::new(),
            };
            let name = match term_width {
                Some(w) if w > id_width + stats.len() + location.len() + 20 => c.name.clone(),
                Some(_) => truncate(&c.name, 24),
                None => c.name.clone(),
            };
            let id = format!("{:<width$}", c.id, width = id_width);

            if use_colors {
                format!("{}  {}  {}  {}", id.bold(), name, location.cyan(), stats.dimmed())
            } else {
                format!("{}  {}  {}  {}", id, name, location, stats)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
