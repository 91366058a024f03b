use serde::{Deserialize, Serialize};
use std::fmt;

/// Stableford points indexed by net diff to par, clamped to -3..=2.
const STABLEFORD_POINTS: [u32; 6] = [5, 4, 3, 2, 1, 0];
const POINTS_MIN_DIFF: i32 = -3;
const POINTS_MAX_DIFF: i32 = 2;

/// Named results indexed by gross diff to par, -3..=3.
/// Anything worse than a triple is shown as "+N".
const SCORE_LABELS: [&str; 7] = ["Albatross", "Eagle", "Birdie", "Par", "Bogey", "Double", "Triple"];
const LABEL_MIN_DIFF: i32 = -3;
const LABEL_MAX_DIFF: i32 = 3;

/// Style tiers indexed by gross diff to par, clamped to -2..=3.
const SCORE_CLASSES: [ScoreClass; 6] = [
    ScoreClass::Eagle,
    ScoreClass::Birdie,
    ScoreClass::Par,
    ScoreClass::Bogey,
    ScoreClass::Double,
    ScoreClass::Worse,
];
const CLASS_MIN_DIFF: i32 = -2;
const CLASS_MAX_DIFF: i32 = 3;

fn table_index(diff: i32, min: i32, max: i32) -> usize {
    (diff.clamp(min, max) - min) as usize
}

/// Stableford points for one hole.
///
/// Returns `None` when the hole has not been played (`gross <= 0`).
/// Points are keyed by the net score against par, so a handicap stroke
/// turns a gross bogey into a net par.
pub fn stableford_points(gross: i32, par: i32, handicap_strokes: i32) -> Option<u32> {
    if gross <= 0 {
        return None;
    }
    let net = gross.saturating_sub(handicap_strokes);
    let diff = net.saturating_sub(par);
    Some(STABLEFORD_POINTS[table_index(diff, POINTS_MIN_DIFF, POINTS_MAX_DIFF)])
}

/// Name of a gross score relative to par ("Birdie", "Bogey", "+4").
pub fn score_label(gross: i32, par: i32) -> String {
    let diff = gross.saturating_sub(par);
    if diff > LABEL_MAX_DIFF {
        return format!("+{}", diff);
    }
    SCORE_LABELS[table_index(diff, LABEL_MIN_DIFF, LABEL_MAX_DIFF)].to_string()
}

/// Coarse style tier of a gross score. Albatross and eagle share a tier.
pub fn score_class(gross: i32, par: i32) -> ScoreClass {
    let diff = gross.saturating_sub(par);
    SCORE_CLASSES[table_index(diff, CLASS_MIN_DIFF, CLASS_MAX_DIFF)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    Eagle,
    Birdie,
    Par,
    Bogey,
    Double,
    Worse,
}

impl ScoreClass {
    /// Style tag used by renderers, e.g. "score-birdie"
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreClass::Eagle => "score-eagle",
            ScoreClass::Birdie => "score-birdie",
            ScoreClass::Par => "score-par",
            ScoreClass::Bogey => "score-bogey",
            ScoreClass::Double => "score-double",
            ScoreClass::Worse => "score-worse",
        }
    }
}

impl fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
