//! Core engine types: players, tokens, RNG, configuration, errors, snapshots.
//!
//! This module contains the building blocks shared by the board, the cards
//! and the game loop. None of it knows about turn flow.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{PlayerId, Token};
pub use rng::{GameRng, GameRngState};
pub use config::RulesConfig;
pub use error::{GameError, Result};
pub use state::{BankState, BoardState, GameState, PlaceState, PlayerState};
