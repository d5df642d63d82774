//! Rules configuration.
//!
//! Every numeric constant of the rules lives in `RulesConfig`. The board
//! layout and the chance card set are fixed; amounts, stakes and the round
//! cap are not.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Fewest players a game seats.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game seats.
pub const MAX_PLAYERS: usize = 4;

/// Numeric rule constants for a game.
///
/// ## Example
///
/// ```
/// use monopoly_junior::core::RulesConfig;
///
/// let config = RulesConfig::default().with_max_rounds(50);
/// assert_eq!(config.stake(2), Some(20));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Money held by the bank before stakes are handed out.
    pub bank_money: i64,

    /// Starting stake indexed by `player_count - 2`.
    pub starting_money: [i64; 3],

    /// Credited when passing Go or drawing "Move to Go".
    pub go_money: i64,

    /// Paid to the drawer by every other player on "Birthday".
    pub birthday_money: i64,

    /// Fee to leave jail without a card.
    pub jail_fee: i64,

    /// Payout of the "Homework" card.
    pub homework_money: i64,

    /// Cost of the "Sweets" card.
    pub sweets_penalty: i64,

    /// Largest distance of the "Move up to X fields" card.
    pub move_up_to: u32,

    /// Six-sided dice rolled per turn.
    pub dice_count: u32,

    /// Rounds played before the game is stopped without a bankruptcy.
    pub max_rounds: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bank_money: 100,
            starting_money: [20, 18, 16],
            go_money: 2,
            birthday_money: 1,
            jail_fee: 1,
            homework_money: 2,
            sweets_penalty: 2,
            move_up_to: 5,
            dice_count: 1,
            max_rounds: 1000,
        }
    }
}

impl RulesConfig {
    /// Starting stake for a game of `player_count` players.
    ///
    /// Returns `None` outside the supported player range.
    #[must_use]
    pub fn stake(&self, player_count: usize) -> Option<i64> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return None;
        }
        Some(self.starting_money[player_count - MIN_PLAYERS])
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the bank supply.
    #[must_use]
    pub fn with_bank_money(mut self, money: i64) -> Self {
        self.bank_money = money;
        self
    }

    /// Set the same starting stake for every player count.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = [money; 3];
        self
    }

    /// Check the configuration for values the rules cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count == 0 {
            return Err(GameError::InvalidConfig("dice_count must be at least 1".into()));
        }
        if self.max_rounds == 0 {
            return Err(GameError::InvalidConfig("max_rounds must be at least 1".into()));
        }

        let amounts = [
            ("bank_money", self.bank_money),
            ("go_money", self.go_money),
            ("birthday_money", self.birthday_money),
            ("jail_fee", self.jail_fee),
            ("homework_money", self.homework_money),
            ("sweets_penalty", self.sweets_penalty),
        ];
        if let Some((name, _)) = amounts.iter().find(|(_, value)| *value < 0) {
            return Err(GameError::InvalidConfig(format!("{name} must not be negative")));
        }
        if self.starting_money.iter().any(|&stake| stake < 0) {
            return Err(GameError::InvalidConfig("starting_money must not be negative".into()));
        }

        Ok(())
    }
}
