//! Win resolution.
//!
//! Runs once, after the game loop halts, over the players still in the game:
//! 1. Most money wins if unique
//! 2. Otherwise most ownership value among the richest wins if unique
//! 3. Otherwise the game is a draw

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// A player's standing when the game halts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub money: i64,
    /// Sum of the prices of owned places.
    pub ownership_value: i64,
    pub bankrupt: bool,
}

/// Decide the winner from final standings.
#[must_use]
pub fn decide_winner(standings: &[Standing]) -> GameResult {
    let solvent: Vec<&Standing> = standings.iter().filter(|s| !s.bankrupt).collect();

    let Some(richest) = solvent.iter().map(|s| s.money).max() else {
        return GameResult::Draw;
    };
    let tied: Vec<&Standing> = solvent.into_iter().filter(|s| s.money == richest).collect();
    if let [only] = tied.as_slice() {
        return GameResult::Winner(only.player);
    }

    let Some(most_owned) = tied.iter().map(|s| s.ownership_value).max() else {
        return GameResult::Draw;
    };
    let tied: Vec<&Standing> = tied.into_iter().filter(|s| s.ownership_value == most_owned).collect();
    match tied.as_slice() {
        [only] => GameResult::Winner(only.player),
        _ => GameResult::Draw,
    }
}
