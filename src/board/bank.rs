//! The bank: the finite money supply.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::BankState;

/// Holds every unit of money not in a player's hands.
///
/// Withdrawals are clamped to the balance, so the bank never goes negative.
/// A short bank is reported only through the smaller amount returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    money: i64,
}

impl Bank {
    /// Create a bank holding `money`.
    #[must_use]
    pub fn new(money: i64) -> Self {
        Self { money: money.max(0) }
    }

    /// Current balance.
    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Take up to `amount` out of the bank.
    ///
    /// Returns `min(amount, balance)`, the amount actually paid out.
    pub fn withdraw(&mut self, amount: i64) -> i64 {
        let amount = if self.money < amount {
            warn!(requested = amount, available = self.money, "bank is out of money");
            self.money
        } else {
            amount
        };
        self.money -= amount;
        amount
    }

    /// Put `amount` into the bank. Returns `amount` unchanged.
    pub fn deposit(&mut self, amount: i64) -> i64 {
        self.money += amount;
        amount
    }

    /// Snapshot of the bank.
    #[must_use]
    pub fn state(&self) -> BankState {
        BankState { money: self.money }
    }
}
