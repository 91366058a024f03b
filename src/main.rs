use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use fairway::config::Config;
use fairway::round::Round;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_STORAGE: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Live leaderboard for a round file
    Score {
        /// Path to the round YAML file
        round: PathBuf,
        /// Also list every played hole per player
        #[arg(long)]
        holes: bool,
    },
    /// Hole-by-hole scorecard for a round file
    Card {
        /// Path to the round YAML file
        round: PathBuf,
    },
    /// Finish a round: rank the results and record them in history
    Finish {
        /// Path to the round YAML file
        round: PathBuf,
        /// Print the results without recording them
        #[arg(long)]
        no_save: bool,
    },
    /// List finished rounds, or show one round's results
    History {
        /// Round id to show in full
        #[arg(short, long)]
        round: Option<String>,
    },
    /// Cumulative leaderboard across all recorded rounds
    Leaderboard,
    /// List courses in the catalogue
    Courses,
    /// Show the playing handicap for a handicap index
    Handicap {
        /// Handicap index
        index: f64,
        /// Also show the slope/rating course handicap for this course
        #[arg(long)]
        course: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "fairway")]
#[command(about = "Golf round scoring: Stableford, stroke play and handicaps", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fairway/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    fairway::logging::init_logging(cli.verbose);
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let config = match fairway::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = fairway::config::validate_config(&config) {
        eprintln!("Course catalogue errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = fairway::output::should_use_colors();

    let code = match cli.command {
        Commands::Score { round, holes } => {
            let round = load_valid_round(&round, &config);
            println!("{}", fairway::output::format_leaderboard(&round, use_colors));
            if holes {
                let course = round.playing_course();
                for player in &round.players {
                    println!();
                    println!("{}", player.name);
                    println!("{}", fairway::output::format_player_holes(player, &course));
                }
            }
            EXIT_SUCCESS
        }
        Commands::Card { round } => {
            let round = load_valid_round(&round, &config);
            println!("{}", fairway::output::format_scorecard(&round, use_colors));
            EXIT_SUCCESS
        }
        Commands::Finish { round, no_save } => finish_round(&round, &config, no_save, use_colors),
        Commands::History { round } => {
            let state = load_history_or_exit(&config);
            match round {
                Some(id) => match state.find_round(&id) {
                    Some(r) => {
                        println!("{}", fairway::output::format_results(r, use_colors));
                        EXIT_SUCCESS
                    }
                    None => {
                        eprintln!("No round '{}' in history", id);
                        EXIT_INPUT
                    }
                },
                None => {
                    let rounds = state.recent_rounds();
                    println!("{}", fairway::output::format_history(&rounds, use_colors));
                    EXIT_SUCCESS
                }
            }
        }
        Commands::Leaderboard => {
            let state = load_history_or_exit(&config);
            println!(
                "{}",
                fairway::output::format_standings(&state.leaderboard, use_colors)
            );
            EXIT_SUCCESS
        }
        Commands::Courses => {
            println!("{}", fairway::output::format_courses(&config.courses, use_colors));
            EXIT_SUCCESS
        }
        Commands::Handicap { index, course } => show_handicap(index, course.as_deref(), &config),
    };

    tracing::debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(code);
}

/// Load a round file and validate it, exiting on any problem.
fn load_valid_round(path: &Path, config: &Config) -> Round {
    let round = match fairway::round::load_round(path, &config.courses, config.scoring_type()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Round error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if let Err(errors) = fairway::scoring::validate_round(&round) {
        eprintln!("Round '{}' is invalid:", round.id);
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    round
}

fn history_path(config: &Config) -> PathBuf {
    match &config.history_path {
        Some(p) => p.clone(),
        None => match fairway::history::get_history_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("History error: {:#}", e);
                std::process::exit(EXIT_STORAGE);
            }
        },
    }
}

fn load_history_or_exit(config: &Config) -> fairway::history::HistoryState {
    match fairway::history::load_history(&history_path(config)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("History error: {:#}", e);
            std::process::exit(EXIT_STORAGE);
        }
    }
}

fn finish_round(path: &Path, config: &Config, no_save: bool, use_colors: bool) -> i32 {
    let mut round = load_valid_round(path, config);

    if let Err(e) = round.finish() {
        eprintln!("Round error: {:#}", e);
        return EXIT_INPUT;
    }
    println!("{}", fairway::output::format_results(&round, use_colors));

    if no_save {
        return EXIT_SUCCESS;
    }

    let history_file = history_path(config);
    let mut state = load_history_or_exit(config);
    if let Err(e) = state.record_round(round) {
        eprintln!("History error: {:#}", e);
        return EXIT_INPUT;
    }
    if let Err(e) = fairway::history::save_history(&history_file, &state) {
        eprintln!("History error: {:#}", e);
        return EXIT_STORAGE;
    }

    eprintln!("Saved to {}", history_file.display());
    EXIT_SUCCESS
}

fn show_handicap(index: f64, course_id: Option<&str>, config: &Config) -> i32 {
    let playing = fairway::scoring::playing_handicap(index);
    println!("Handicap index:   {:.1}", index);
    println!("Playing handicap: {} (95%)", playing);

    let Some(id) = course_id else {
        return EXIT_SUCCESS;
    };
    let Some(course) = config.find_course(id) else {
        eprintln!("Unknown course '{}'. Run `fairway courses` to list the catalogue", id);
        return EXIT_INPUT;
    };

    let course_hcp =
        fairway::scoring::course_handicap(index, course.slope, course.rating, course.par());
    println!(
        "Course handicap:  {} ({}, slope {}, CR {:.1}, par {})",
        course_hcp,
        course.name,
        course.slope,
        course.rating,
        course.par()
    );
    println!("Strokes are allocated from the playing handicap.");
    EXIT_SUCCESS
}
