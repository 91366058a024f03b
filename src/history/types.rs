use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::round::{PlayerResult, Round};

pub const HISTORY_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryState {
    pub version: u32,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Cumulative record for one player across all finished rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub rounds: u32,
    pub total_points: u32,
    pub best_points: u32,
    pub best_net: i32,
    /// Handicap at the most recent round
    pub handicap: f64,
    pub updated_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    fn first(result: &PlayerResult, at: DateTime<Utc>) -> Self {
        Self {
            name: result.name.clone(),
            rounds: 1,
            total_points: result.stableford,
            best_points: result.stableford,
            best_net: result.net,
            handicap: result.handicap,
            updated_at: at,
        }
    }

    fn record(&mut self, result: &PlayerResult, at: DateTime<Utc>) {
        self.rounds += 1;
        self.total_points += result.stableford;
        self.best_points = self.best_points.max(result.stableford);
        self.best_net = self.best_net.min(result.net);
        self.handicap = result.handicap;
        self.updated_at = at;
    }

    /// Mean Stableford points per round
    pub fn average_points(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_points as f64 / self.rounds as f64
        }
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    /// Create a new empty history with the current version
    pub fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            rounds: Vec::new(),
            leaderboard: Vec::new(),
        }
    }

    /// Append a finished round and fold its results into the leaderboard.
    pub fn record_round(&mut self, round: Round) -> Result<()> {
        if !round.complete {
            bail!("Round '{}' is not finished", round.id);
        }
        if self.rounds.iter().any(|r| r.id == round.id) {
            bail!("Round '{}' is already in history", round.id);
        }

        let now = Utc::now();
        for result in &round.player_results {
            match self
                .leaderboard
                .iter_mut()
                .find(|e| e.name.eq_ignore_ascii_case(&result.name))
            {
                Some(entry) => entry.record(result, now),
                None => self.leaderboard.push(LeaderboardEntry::first(result, now)),
            }
        }
        self.leaderboard.sort_by(|a, b| {
            b.best_points
                .cmp(&a.best_points)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::info!(
            round = %round.id,
            results = round.player_results.len(),
            "recorded round in history"
        );
        self.rounds.push(round);
        Ok(())
    }

    /// Finished rounds, most recent first
    pub fn recent_rounds(&self) -> Vec<&Round> {
        let mut rounds: Vec<&Round> = self.rounds.iter().collect();
        rounds.sort_by(|a, b| b.date.cmp(&a.date));
        rounds
    }

    pub fn find_round(&self, id: &str) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }
}
