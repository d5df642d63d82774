//! Game state snapshots.
//!
//! ## GameState
//!
//! Immutable value copy of a game after a turn:
//! - Game id, turn counter, game-over flag
//! - One `PlayerState` per seat
//! - `BoardState`: bank balance and every place with its owner
//!
//! Snapshots share nothing with the live game. External drivers (batch
//! simulation, reporting) only ever read these records.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::{PlayerId, Token};
use crate::board::Color;
use crate::cards::ChanceCard;

/// Snapshot of the bank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankState {
    pub money: i64,
}

/// Snapshot of one place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceState {
    pub name: String,
    pub owner: Option<PlayerId>,
    pub price: i64,
    pub color: Color,
}

/// Snapshot of the board: bank and places in board order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub bank: BankState,
    pub places: Vec<PlaceState>,
}

/// Snapshot of one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub token: Token,
    pub position: usize,
    pub money: i64,
    pub game_over: bool,
    pub in_jail: bool,
    pub held_cards: Vec<ChanceCard>,
}

/// Snapshot of a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Caller-supplied game id, if any.
    pub game_id: Option<u64>,

    /// Individual player turns taken so far.
    pub turn: u32,

    pub game_over: bool,

    /// One entry per seat, in table order.
    pub players: Vec<PlayerState>,

    pub board: BoardState,
}

impl GameState {
    /// Encode the snapshot with bincode.
    ///
    /// Two snapshots are equal exactly when their encodings are equal.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Look up a player's snapshot.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Total money held by the bank and all players.
    #[must_use]
    pub fn total_money(&self) -> i64 {
        self.board.bank.money + self.players.iter().map(|p| p.money).sum::<i64>()
    }
}
