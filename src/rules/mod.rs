//! Rules context and win resolution.
//!
//! - `Table`: the borrowed board/players/RNG/config every effect runs on
//! - `decide_winner`: money first, ownership value second, else a draw
//!
//! Space landing lives in `board`, card effects in `cards` and the turn
//! sequence in `game`; all of them are `Table` methods.

pub mod engine;
pub mod table;

pub use engine::{decide_winner, GameResult, Standing};
pub use table::Table;
