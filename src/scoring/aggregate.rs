use super::engine::stableford_points;
use super::handicap::{handicap_strokes_on_hole, playing_handicap};
use crate::round::{Course, Hole, Player};

/// Pair each recorded score with its hole. Scores past the last hole of the
/// course are dropped.
fn scored_holes<'a>(player: &'a Player, course: &'a Course) -> impl Iterator<Item = (i32, &'a Hole)> {
    player.scores.iter().copied().zip(course.holes.iter())
}

/// Sum that clamps at the i32 bounds instead of overflowing.
fn saturating_sum(values: impl Iterator<Item = i32>) -> i32 {
    values.fold(0, i32::saturating_add)
}

/// Sum of every recorded gross score (unplayed holes count 0).
pub fn total_gross(player: &Player) -> i32 {
    saturating_sum(player.scores.iter().copied())
}

pub fn total_stableford(player: &Player, course: &Course) -> u32 {
    let playing = playing_handicap(player.handicap);
    scored_holes(player, course)
        .filter_map(|(gross, hole)| {
            let strokes = handicap_strokes_on_hole(playing, hole.stroke_index);
            stableford_points(gross, hole.par, strokes)
        })
        .sum()
}

/// Gross against the par of the holes covered by the score sequence.
/// `None` until the player has any scores.
pub fn to_par(player: &Player, course: &Course) -> Option<i32> {
    if player.scores.is_empty() {
        return None;
    }
    let par = saturating_sum(scored_holes(player, course).map(|(_, hole)| hole.par));
    Some(total_gross(player).saturating_sub(par))
}

/// Gross minus the handicap strokes allocated to each in-range hole.
pub fn net_score(player: &Player, course: &Course) -> i32 {
    let playing = playing_handicap(player.handicap);
    saturating_sum(scored_holes(player, course).map(|(gross, hole)| {
        gross.saturating_sub(handicap_strokes_on_hole(playing, hole.stroke_index))
    }))
}

/// Gross over holes 1-9
pub fn front_nine(player: &Player) -> i32 {
    saturating_sum(player.scores.iter().copied().take(9))
}

/// Gross over holes 10-18
pub fn back_nine(player: &Player) -> i32 {
    saturating_sum(player.scores.iter().copied().skip(9).take(9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::fixtures::{course_from, par4x18, player};

    #[test]
    fn test_scratch_all_pars() {
        let p = player("Test", 0.0, vec![4; 18]);
        let course = par4x18();
        assert_eq!(total_stableford(&p, &course), 36);
        assert_eq!(to_par(&p, &course), Some(0));
        assert_eq!(net_score(&p, &course), 72);
    }

    #[test]
    fn test_total_gross_sums_scores() {
        let p = player("Test", 0.0, vec![4, 5, 3]);
        assert_eq!(total_gross(&p), 12);
    }

    #[test]
    fn test_to_par_all_bogeys() {
        let p = player("Test", 0.0, vec![5; 18]);
        assert_eq!(to_par(&p, &par4x18()), Some(18));
    }

    #[test]
    fn test_to_par_empty_is_none() {
        let p = player("Test", 0.0, vec![]);
        assert_eq!(to_par(&p, &par4x18()), None);
    }

    #[test]
    fn test_to_par_partial_round_uses_covered_holes() {
        let p = player("Test", 0.0, vec![5, 4, 3]);
        assert_eq!(to_par(&p, &par4x18()), Some(0));
    }

    #[test]
    fn test_to_par_counts_unplayed_hole_par() {
        // par is taken over the index range, not over holes with gross > 0
        let p = player("Test", 0.0, vec![4, 0]);
        assert_eq!(to_par(&p, &par4x18()), Some(-4));
    }

    #[test]
    fn test_net_score_eighteen_handicap() {
        // playing handicap round(17.1) = 17, so every hole but SI 18 gets a stroke
        let p = player("Test", 18.0, vec![5; 18]);
        let course = par4x18();
        assert_eq!(total_gross(&p), 90);
        assert_eq!(net_score(&p, &course), 90 - 17);
    }

    #[test]
    fn test_stableford_eighteen_handicap() {
        // net par on 17 holes (2 pts), bogey on SI 18 (1 pt)
        let p = player("Test", 18.0, vec![5; 18]);
        assert_eq!(total_stableford(&p, &par4x18()), 17 * 2 + 1);
    }

    #[test]
    fn test_unplayed_holes_score_no_points() {
        let p = player("Test", 0.0, vec![4, 0, 4]);
        assert_eq!(total_stableford(&p, &par4x18()), 4);
    }

    #[test]
    fn test_scores_past_course_are_ignored() {
        let course = course_from(&[4, 3, 5], &[1, 2, 3]);
        let p = player("Test", 0.0, vec![4, 3, 5, 4, 4]);
        assert_eq!(total_stableford(&p, &course), 6);
        assert_eq!(net_score(&p, &course), 12);
        // total gross is not truncated
        assert_eq!(total_gross(&p), 20);
        assert_eq!(to_par(&p, &course), Some(8));
    }

    #[test]
    fn test_nine_hole_net_uses_allocated_strokes() {
        // SI 1,3,5..17 on the front nine; playing handicap 10 strokes SI 1..10
        let sis = [1, 3, 5, 7, 9, 11, 13, 15, 17];
        let course = course_from(&[4; 9], &sis);
        let p = player("Test", 10.5, vec![5; 9]); // 9.975 -> 10
        assert_eq!(net_score(&p, &course), 45 - 5);
    }

    #[test]
    fn test_nine_subtotals() {
        let mut scores = vec![4; 9];
        scores.extend(vec![5; 9]);
        let p = player("Test", 0.0, scores);
        assert_eq!(front_nine(&p), 36);
        assert_eq!(back_nine(&p), 45);
    }

    #[test]
    fn test_nine_subtotals_partial() {
        let p = player("Test", 0.0, vec![4, 4, 4]);
        assert_eq!(front_nine(&p), 12);
        assert_eq!(back_nine(&p), 0);
    }

    #[test]
    fn test_extreme_scores_saturate() {
        let course = par4x18();
        let high = player("Test", 0.0, vec![i32::MAX, 1]);
        assert_eq!(total_gross(&high), i32::MAX);
        assert_eq!(to_par(&high, &course), Some(i32::MAX - 8));
        assert_eq!(net_score(&high, &course), i32::MAX);
        assert_eq!(front_nine(&high), i32::MAX);

        let low = player("Test", 36.0, vec![i32::MIN]);
        assert_eq!(total_gross(&low), i32::MIN);
        assert_eq!(net_score(&low, &course), i32::MIN);
        assert_eq!(to_par(&low, &course), Some(i32::MIN));
        assert_eq!(total_stableford(&low, &course), 0);
    }

    #[test]
    fn test_aggregates_are_idempotent() {
        let p = player("Test", 14.2, vec![5, 4, 6, 3, 4, 5, 4, 4, 7]);
        let course = par4x18();
        assert_eq!(total_stableford(&p, &course), total_stableford(&p, &course));
        assert_eq!(net_score(&p, &course), net_score(&p, &course));
        assert_eq!(to_par(&p, &course), to_par(&p, &course));
    }
}
