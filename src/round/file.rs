use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::types::{Course, Player, Round, ScoringType};

/// Round as written by hand in a YAML file.
///
/// Example:
/// ```yaml
/// course: royal-cape
/// scoring: stableford
/// holes: 18
/// players:
///   - { name: Thandi, handicap: 12.4, scores: [4, 5, 3] }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoundFile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub course: CourseRef,
    #[serde(default)]
    pub scoring: Option<ScoringType>,
    #[serde(default)]
    pub holes: Option<u32>,
    pub players: Vec<Player>,
}

/// Either a catalogue id or a full course definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CourseRef {
    Id(String),
    Inline(Course),
}

impl RoundFile {
    /// Resolve the course against the catalogue and build a [`Round`].
    ///
    /// When the file has no `id`, the round is named `<fallback_id>-<date>`
    /// so a file reused week after week yields a new round each time.
    pub fn into_round(
        self,
        catalogue: &[Course],
        default_scoring: ScoringType,
        fallback_id: &str,
    ) -> Result<Round> {
        let course = match self.course {
            CourseRef::Inline(course) => course,
            CourseRef::Id(id) => catalogue
                .iter()
                .find(|c| c.id.eq_ignore_ascii_case(&id))
                .cloned()
                .with_context(|| format!("Unknown course '{}'. Run `fairway courses` to list the catalogue", id))?,
        };

        let mut round = Round::new(
            self.id.unwrap_or_default(),
            course,
            self.scoring.unwrap_or(default_scoring),
        );
        if let Some(holes) = self.holes {
            round.holes = holes;
        }
        if let Some(date) = self.date {
            round.date = date;
        }
        if round.id.is_empty() {
            round.id = format!("{}-{}", fallback_id, round.date.format("%Y-%m-%d"));
        }
        round.players = self.players;
        Ok(round)
    }
}

/// Read a round file and resolve it into a [`Round`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or
/// names a course that is not in the catalogue.
pub fn load_round(path: &Path, catalogue: &[Course], default_scoring: ScoringType) -> Result<Round> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read round file at {}", path.display()))?;

    let file: RoundFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse round: invalid YAML in {}", path.display()))?;

    let fallback_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "round".to_string());

    let round = file.into_round(catalogue, default_scoring, &fallback_id)?;
    tracing::debug!(
        round = %round.id,
        course = %round.course.id,
        players = round.players.len(),
        "loaded round file"
    );
    Ok(round)
}
