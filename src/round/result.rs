use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::types::{Course, Player, Round};
use crate::scoring::{
    back_nine, front_nine, net_score, rank_results, to_par, total_gross, total_stableford,
};

/// Snapshot of one player's finished round. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerResult {
    pub name: String,
    pub handicap: f64,
    pub stableford: u32,
    pub gross: i32,
    pub net: i32,
    /// 0 when the player recorded no scores
    pub to_par: i32,
    pub front_nine: i32,
    pub back_nine: i32,
    pub scores: Vec<i32>,
}

impl PlayerResult {
    pub fn from_player(player: &Player, course: &Course) -> Self {
        Self {
            name: player.name.clone(),
            handicap: player.handicap,
            stableford: total_stableford(player, course),
            gross: total_gross(player),
            net: net_score(player, course),
            to_par: to_par(player, course).unwrap_or(0),
            front_nine: front_nine(player),
            back_nine: back_nine(player),
            scores: player.scores.clone(),
        }
    }
}

impl Round {
    /// Build ranked results for every player and mark the round complete.
    pub fn finish(&mut self) -> Result<&[PlayerResult]> {
        if self.complete {
            bail!("Round '{}' is already complete", self.id);
        }

        let course = self.playing_course();
        let results = self
            .players
            .iter()
            .map(|p| PlayerResult::from_player(p, &course))
            .collect();

        self.player_results = rank_results(results, self.scoring_type);
        self.complete = true;

        tracing::info!(
            round = %self.id,
            players = self.player_results.len(),
            winner = self.winner().map(|w| w.name.as_str()).unwrap_or(""),
            "round finished"
        );

        Ok(self.player_results.as_slice())
    }

    /// First-placed result of a finished round
    pub fn winner(&self) -> Option<&PlayerResult> {
        self.player_results.first()
    }
}
