//! # monopoly-junior
//!
//! A deterministic rules engine for a simplified property-trading board game.
//!
//! ## Design Principles
//!
//! 1. **Closed Variants**: Spaces and chance cards are sum types with one
//!    effect arm per variant. Adding a variant is a compile error until every
//!    match handles it.
//!
//! 2. **No Back-Pointers**: `Game` owns the board and the players. Effects
//!    receive a [`Table`](rules::Table) that borrows everything they may touch.
//!
//! 3. **Seeded Randomness**: Every game owns its own [`GameRng`]. The same
//!    seed replays the same game, snapshot for snapshot.
//!
//! ## Modules
//!
//! - `core`: Player ids, tokens, RNG, configuration, errors, snapshots
//! - `board`: Bank, spaces, chance deck, fixed 24-space layout
//! - `cards`: Chance card variants and their effects
//! - `rules`: Effect context and win resolution
//! - `game`: Players, dice, the turn state machine and the game loop

pub mod core;
pub mod board;
pub mod cards;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Token,
    GameRng, GameRngState,
    RulesConfig,
    GameError, Result,
    GameState, PlayerState, BoardState, BankState, PlaceState,
};

pub use crate::board::{Bank, Board, ChanceDeck, Color, Place, Space, BOARD_SIZE, GO_POSITION, JAIL_POSITION};

pub use crate::cards::ChanceCard;

pub use crate::rules::{decide_winner, GameResult, Standing, Table};

pub use crate::game::{Dice, Game, GameBuilder, Player};
