use super::types::{HistoryState, HISTORY_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default history file path (~/.config/fairway/history.json)
pub fn get_history_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("history.json"))
}

/// Load round history from a JSON file
///
/// If the file doesn't exist, returns a new empty history.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_history(path: &Path) -> Result<HistoryState> {
    if !path.exists() {
        return Ok(HistoryState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    let state: HistoryState = serde_json::from_reader(file).context("Failed to load round history")?;

    if state.version != HISTORY_VERSION {
        anyhow::bail!("Unsupported history version: {}", state.version);
    }

    tracing::debug!(
        path = %path.display(),
        rounds = state.rounds.len(),
        players = state.leaderboard.len(),
        "loaded history"
    );
    Ok(state)
}

/// Save round history to a JSON file atomically
///
/// The file is never left half-written. Creates the parent directory if needed.
pub fn save_history(path: &Path, state: &HistoryState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize round history")?;

    file.commit().context("Failed to save round history")?;

    Ok(())
}
