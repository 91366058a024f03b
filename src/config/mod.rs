mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::scoring::validate_course;

/// Get the config directory path (~/.config/fairway/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("fairway"))
}

/// Get the default config file path (~/.config/fairway/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to an empty config when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let p = get_config_path()?;
            if !p.exists() {
                tracing::debug!(path = %p.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            p
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(
        path = %config_path.display(),
        courses = config.courses.len(),
        "loaded config"
    );
    Ok(config)
}

/// Validate the course catalogue at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (i, course) in config.courses.iter().enumerate() {
        if course.id.trim().is_empty() {
            errors.push(format!("courses[{}].id: must not be empty", i));
        } else if !ids.insert(course.id.to_lowercase()) {
            errors.push(format!("courses[{}].id: duplicate id '{}'", i, course.id));
        }
        if let Err(course_errors) = validate_course(course) {
            errors.extend(course_errors.into_iter().map(|e| format!("courses[{}]: {}", i, e)));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::ScoringType;
    use std::io::Write;

    const CATALOGUE: &str = r#"
default_scoring: strokeplay
courses:
  - id: short
    name: Short Nine
    city: Durban
    province: KwaZulu-Natal
    rating: 34.5
    slope: 110
    holes:
      - { number: 1, par: 4, stroke_index: 1 }
      - { number: 2, par: 3, stroke_index: 3 }
      - { number: 3, par: 5, stroke_index: 5 }
      - { number: 4, par: 4, stroke_index: 7 }
      - { number: 5, par: 4, stroke_index: 9 }
      - { number: 6, par: 3, stroke_index: 11 }
      - { number: 7, par: 4, stroke_index: 13 }
      - { number: 8, par: 5, stroke_index: 15 }
      - { number: 9, par: 4, stroke_index: 17 }
"#;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_catalogue() {
        let (_dir, path) = write_config(CATALOGUE);
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.scoring_type(), ScoringType::StrokePlay);
        assert_eq!(config.courses.len(), 1);

        let course = config.find_course("SHORT").unwrap();
        assert_eq!(course.par(), 36);
        assert_eq!(course.slope, 110);
        assert_eq!(course.province.as_deref(), Some("KwaZulu-Natal"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let (_dir, path) = write_config("queries: []\n");
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.courses.is_empty());
        assert!(config.history_path.is_none());
        assert_eq!(config.scoring_type(), ScoringType::Stableford);
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let (_dir, path) = write_config(CATALOGUE);
        let mut config = load_config(Some(path)).unwrap();
        config.courses.push(config.courses[0].clone());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("courses[1].id: duplicate id 'short'"));
    }

    #[test]
    fn test_validate_prefixes_course_errors() {
        let (_dir, path) = write_config(CATALOGUE);
        let mut config = load_config(Some(path)).unwrap();
        config.courses[0].holes[1].par = 2;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].starts_with("courses[0]: course 'short'.holes[1].par"));
    }
}
