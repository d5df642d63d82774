//! Players, dice and the game loop.
//!
//! `Game` seats 2-4 players in fixed table order and runs rounds until a
//! player goes bankrupt or the round cap is reached. A snapshot is recorded
//! after every individual turn.

mod dice;
mod game;
mod player;

pub use dice::Dice;
pub use game::{Game, GameBuilder};
pub use player::Player;
