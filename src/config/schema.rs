use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::round::{Course, ScoringType};

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// default_scoring: stableford
/// courses:
///   - id: royal-cape
///     name: Royal Cape
///     city: Cape Town
///     rating: 72.0
///     slope: 113
///     holes:
///       - { number: 1, par: 4, stroke_index: 7 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Used when a round file does not set `scoring`
    #[serde(default)]
    pub default_scoring: Option<ScoringType>,

    /// Overrides ~/.config/fairway/history.json
    #[serde(default)]
    pub history_path: Option<PathBuf>,

    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Config {
    pub fn scoring_type(&self) -> ScoringType {
        self.default_scoring.unwrap_or_default()
    }

    /// Look up a catalogue course by id (case-insensitive)
    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }
}
