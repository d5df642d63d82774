//! Chance cards: definitions, target selection and effects.
//!
//! ## Key Types
//!
//! - `ChanceCard`: Closed set of card variants, one effect arm each
//! - `choose_place`: Shared heuristic for cards that let a player pick a place
//!
//! Effects are resolved through [`Table`](crate::rules::Table) methods:
//! `draw_chance_card`, `resolve_card` and `play_chosen_jump`.

mod chance;
mod choose;
mod effect;

pub use chance::{ChanceCard, FREE_JUMP_TARGET, PAID_JUMP_TARGET};
pub use choose::choose_place;
