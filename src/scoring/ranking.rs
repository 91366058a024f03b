use super::aggregate::{net_score, total_stableford};
use crate::round::{Course, Player, PlayerResult, ScoringType};

/// Sort key where lower ranks first: Stableford points descending,
/// stroke play net ascending.
fn rank_key(scoring_type: ScoringType, points: u32, net: i32) -> i64 {
    match scoring_type {
        ScoringType::Stableford => -i64::from(points),
        ScoringType::StrokePlay => i64::from(net),
    }
}

/// Order players for a leaderboard without touching the input.
///
/// Ties are broken by name, then by input order.
pub fn rank_players<'a>(
    players: &'a [Player],
    course: &Course,
    scoring_type: ScoringType,
) -> Vec<&'a Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by_cached_key(|p| {
        let key = rank_key(scoring_type, total_stableford(p, course), net_score(p, course));
        (key, p.name.clone())
    });
    ranked
}

/// Same ordering as [`rank_players`], over finished results.
pub fn rank_results(mut results: Vec<PlayerResult>, scoring_type: ScoringType) -> Vec<PlayerResult> {
    results.sort_by_cached_key(|r| (rank_key(scoring_type, r.stableford, r.net), r.name.clone()));
    results
}
