//! Player identification and tokens.
//!
//! ## PlayerId
//!
//! Seat index of a player. Table order is ascending id.
//!
//! ## Token
//!
//! The playing piece. Each seated player holds a distinct token, and the
//! chance deck carries one "jump" card addressed to each seated token.

use serde::{Deserialize, Serialize};

/// Player identifier for 2-4 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_junior::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A playing piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    Cat,
    Dog,
    Boat,
    Car,
}

impl Token {
    /// Every token in the box.
    pub const ALL: [Token; 4] = [Token::Cat, Token::Dog, Token::Boat, Token::Car];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Token::Cat => "Cat",
            Token::Dog => "Dog",
            Token::Boat => "Boat",
            Token::Car => "Car",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
