/// Allowance applied to a raw handicap for social play.
pub const PLAYING_ALLOWANCE: f64 = 0.95;

/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Integer handicap used for stroke allocation: 95% of the raw handicap,
/// rounded half away from zero.
pub fn playing_handicap(raw: f64) -> i32 {
    (raw * PLAYING_ALLOWANCE).round() as i32
}

/// Course handicap from slope and rating.
///
/// This is the alternate handicap model and is NOT used for stroke
/// allocation; [`playing_handicap`] is. It is exposed for comparison only.
pub fn course_handicap(index: f64, slope: u32, rating: f64, par: i32) -> i32 {
    (index * slope as f64 / STANDARD_SLOPE + (rating - par as f64)).round() as i32
}

/// Handicap strokes received on a hole with the given stroke index.
///
/// Every hole gets `playing / 18` strokes; holes with SI <= the remainder
/// get one more. Non-positive handicaps receive nothing.
pub fn handicap_strokes_on_hole(playing: i32, stroke_index: i32) -> i32 {
    if playing <= 0 {
        return 0;
    }
    let full = playing / 18;
    let remainder = playing % 18;
    full + i32::from(stroke_index <= remainder)
}
