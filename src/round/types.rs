use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::result::PlayerResult;

/// A single hole on a course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Hole {
    pub number: u32,
    pub par: i32,
    /// 1 = hardest hole on the course
    pub stroke_index: i32,
}

/// A course from the catalogue (or inlined in a round file).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    /// Course rating, only used by the slope/rating course handicap
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default = "default_slope")]
    pub slope: u32,
    pub holes: Vec<Hole>,
}

fn default_rating() -> f64 {
    72.0
}

fn default_slope() -> u32 {
    113
}

impl Course {
    /// Sum of hole pars
    pub fn par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// Copy of this course limited to its first `count` holes.
    pub fn first_holes(&self, count: usize) -> Course {
        Course {
            holes: self.holes.iter().take(count).cloned().collect(),
            ..self.clone()
        }
    }

    /// "Name (City)" when a city is known
    pub fn display_name(&self) -> String {
        match &self.city {
            Some(city) => format!("{} ({})", self.name, city),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Player {
    pub name: String,
    pub handicap: f64,
    /// Gross strokes per hole; 0 means not yet played
    #[serde(default)]
    pub scores: Vec<i32>,
}

impl Player {
    /// Number of holes with a recorded (non-zero) score
    pub fn holes_played(&self) -> usize {
        self.scores.iter().filter(|&&s| s > 0).count()
    }
}

/// Selects the ranking policy. Stableford points are always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringType {
    #[default]
    Stableford,
    #[serde(alias = "stroke")]
    StrokePlay,
}

impl fmt::Display for ScoringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringType::Stableford => write!(f, "Stableford"),
            ScoringType::StrokePlay => write!(f, "Stroke Play"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Round {
    pub id: String,
    pub date: DateTime<Utc>,
    pub course: Course,
    pub players: Vec<Player>,
    #[serde(default)]
    pub player_results: Vec<PlayerResult>,
    pub scoring_type: ScoringType,
    /// 9 or 18
    pub holes: u32,
    #[serde(default)]
    pub complete: bool,
}

impl Round {
    pub fn new(id: impl Into<String>, course: Course, scoring_type: ScoringType) -> Self {
        let holes = if course.holes.len() == 9 { 9 } else { 18 };
        Self {
            id: id.into(),
            date: Utc::now(),
            course,
            players: Vec::new(),
            player_results: Vec::new(),
            scoring_type,
            holes,
            complete: false,
        }
    }

    /// The holes actually in play: a 9-hole round plays the front nine.
    pub fn playing_course(&self) -> Course {
        self.course.first_holes(self.holes as usize)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn course_from(pars: &[i32], stroke_indexes: &[i32]) -> Course {
        Course {
            id: "test".to_string(),
            name: "Test Course".to_string(),
            city: None,
            province: None,
            rating: 72.0,
            slope: 113,
            holes: pars
                .iter()
                .zip(stroke_indexes)
                .enumerate()
                .map(|(i, (&par, &si))| Hole {
                    number: i as u32 + 1,
                    par,
                    stroke_index: si,
                })
                .collect(),
        }
    }

    /// Par 4 on every hole, SI 1..18 in hole order
    pub fn par4x18() -> Course {
        let sis: Vec<i32> = (1..=18).collect();
        course_from(&[4; 18], &sis)
    }

    pub fn player(name: &str, handicap: f64, scores: Vec<i32>) -> Player {
        Player {
            name: name.to_string(),
            handicap,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_course_par_sums_holes() {
        assert_eq!(par4x18().par(), 72);
    }

    #[test]
    fn test_first_holes_truncates() {
        let nine = par4x18().first_holes(9);
        assert_eq!(nine.holes.len(), 9);
        assert_eq!(nine.par(), 36);
        assert_eq!(nine.holes[8].number, 9);
    }

    #[test]
    fn test_nine_hole_round_plays_front_nine() {
        let mut round = Round::new("r1", par4x18(), ScoringType::Stableford);
        assert_eq!(round.holes, 18);
        round.holes = 9;
        assert_eq!(round.playing_course().holes.len(), 9);
    }

    #[test]
    fn test_holes_played_ignores_zero() {
        let p = player("A", 0.0, vec![4, 0, 5, 0]);
        assert_eq!(p.holes_played(), 2);
    }

    #[test]
    fn test_scoring_type_yaml() {
        let t: ScoringType = serde_saphyr::from_str("strokeplay").unwrap();
        assert_eq!(t, ScoringType::StrokePlay);
        let t: ScoringType = serde_saphyr::from_str("stroke").unwrap();
        assert_eq!(t, ScoringType::StrokePlay);
        assert_eq!(ScoringType::default(), ScoringType::Stableford);
        assert_eq!(ScoringType::StrokePlay.to_string(), "Stroke Play");
    }

    #[test]
    fn test_course_defaults_rating_and_slope() {
        let yaml = r#"
id: club
name: Club
holes:
  - { number: 1, par: 4, stroke_index: 1 }
"#;
        let course: Course = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(course.rating, 72.0);
        assert_eq!(course.slope, 113);
        assert!(course.city.is_none());
    }
}
