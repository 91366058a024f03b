use fairway::round::{Course, Hole, Player, ScoringType};
use fairway::scoring::{
    handicap_strokes_on_hole, net_score, rank_players, stableford_points, to_par, total_gross,
    total_stableford,
};
use proptest::prelude::*;

fn par4x18() -> Course {
    Course {
        id: "prop".to_string(),
        name: "Property Course".to_string(),
        city: None,
        province: None,
        rating: 72.0,
        slope: 113,
        holes: (1..=18)
            .map(|n| Hole {
                number: n as u32,
                par: 4,
                stroke_index: n,
            })
            .collect(),
    }
}

fn arb_player() -> impl Strategy<Value = Player> {
    (
        "[A-Z][a-z]{1,8}",
        0.0f64..=36.0,
        prop::collection::vec(0i32..=15, 0..=18),
    )
        .prop_map(|(name, handicap, scores)| Player {
            name,
            handicap,
            scores,
        })
}

proptest! {
    #[test]
    fn strokes_sum_to_playing_handicap(playing in 0i32..=54) {
        let total: i32 = (1..=18).map(|si| handicap_strokes_on_hole(playing, si)).sum();
        prop_assert_eq!(total, playing);
    }

    #[test]
    fn harder_holes_never_get_fewer_strokes(playing in 0i32..=54, si in 1i32..18) {
        prop_assert!(handicap_strokes_on_hole(playing, si) >= handicap_strokes_on_hole(playing, si + 1));
    }

    #[test]
    fn points_bounded_and_monotonic(gross in 1i32..=15, par in 3i32..=5, strokes in 0i32..=3) {
        let points = stableford_points(gross, par, strokes).unwrap();
        prop_assert!(points <= 5);
        let worse = stableford_points(gross + 1, par, strokes).unwrap();
        prop_assert!(worse <= points);
    }

    #[test]
    fn unplayed_is_none(gross in -5i32..=0, par in 3i32..=5, strokes in 0i32..=3) {
        prop_assert_eq!(stableford_points(gross, par, strokes), None);
    }

    #[test]
    fn net_never_exceeds_gross(player in arb_player()) {
        let course = par4x18();
        prop_assert!(net_score(&player, &course) <= total_gross(&player));
    }

    #[test]
    fn to_par_only_none_when_empty(player in arb_player()) {
        let course = par4x18();
        prop_assert_eq!(to_par(&player, &course).is_none(), player.scores.is_empty());
    }

    #[test]
    fn aggregates_are_pure(player in arb_player()) {
        let course = par4x18();
        prop_assert_eq!(total_stableford(&player, &course), total_stableford(&player, &course));
        prop_assert_eq!(net_score(&player, &course), net_score(&player, &course));
    }

    #[test]
    fn ranking_is_a_sorted_permutation(players in prop::collection::vec(arb_player(), 0..6)) {
        let course = par4x18();

        let ranked = rank_players(&players, &course, ScoringType::Stableford);
        prop_assert_eq!(ranked.len(), players.len());
        for pair in ranked.windows(2) {
            prop_assert!(total_stableford(pair[0], &course) >= total_stableford(pair[1], &course));
        }

        let ranked = rank_players(&players, &course, ScoringType::StrokePlay);
        prop_assert_eq!(ranked.len(), players.len());
        for pair in ranked.windows(2) {
            prop_assert!(net_score(pair[0], &course) <= net_score(pair[1], &course));
        }
        for p in &players {
            prop_assert!(ranked.iter().any(|r| std::ptr::eq(*r, p)));
        }
    }
}
