//! Target selection for cards that let the player pick a place.
//!
//! Preference order over the candidate places:
//! 1. unowned and affordable
//! 2. already owned by the chooser
//! 3. any candidate
//!
//! Ties inside the chosen tier are broken uniformly at random.

use crate::board::Board;
use crate::core::{GameRng, PlayerId};

/// Pick one of `candidates` (board positions of places) for `chooser`.
///
/// Returns `None` only when `candidates` is empty.
pub fn choose_place(
    board: &Board,
    chooser: PlayerId,
    money: i64,
    candidates: &[usize],
    rng: &mut GameRng,
) -> Option<usize> {
    let affordable: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&position| {
            board
                .place(position)
                .is_some_and(|place| place.owner.is_none() && place.price <= money)
        })
        .collect();
    if !affordable.is_empty() {
        return rng.choose(&affordable).copied();
    }

    let owned: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&position| board.place(position).is_some_and(|place| place.owner == Some(chooser)))
        .collect();
    if !owned.is_empty() {
        return rng.choose(&owned).copied();
    }

    rng.choose(candidates).copied()
}
