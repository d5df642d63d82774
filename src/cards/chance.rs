//! Chance card definitions and the standard card set.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::board::Color;
use crate::core::{RulesConfig, Token};

/// Board position of the free jump target (Go-Karts).
pub const FREE_JUMP_TARGET: usize = 10;

/// Board position of the paid jump target (Boardwalk).
pub const PAID_JUMP_TARGET: usize = 23;

/// A chance card.
///
/// Cards are plain values: every card in the standard set is distinct, so
/// equality identifies a card in the deck, the discard pile or a hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChanceCard {
    /// Kept by the drawer until used to leave jail.
    GetOutOfJailFree,
    /// Teleport to Go and collect the Go money.
    MoveToGo,
    /// Collect money from the bank.
    Homework { amount: i64 },
    /// Pay money into the bank.
    Sweets { amount: i64 },
    /// Every other player pays the drawer.
    Birthday,
    /// Teleport to a fixed space and land there.
    Jump { position: usize, free_of_charge: bool },
    /// Teleport to a chosen place of the listed colors, free of charge.
    ChooseColor { colors: SmallVec<[Color; 2]> },
    /// Coin flip: move one space, or draw another card.
    MoveOneOrChance,
    /// Move a random distance in `0..=fields`.
    MoveUpToXFields { fields: u32 },
    /// Handed to the player with `token`, who jumps to a chosen place on
    /// their next turn. The drawer draws again.
    ChooseJump { token: Token },
}

impl ChanceCard {
    /// The full deck for a game seating `tokens`.
    ///
    /// Fifteen fixed cards plus one `ChooseJump` per seated token.
    #[must_use]
    pub fn standard_set(tokens: &[Token], config: &RulesConfig) -> Vec<ChanceCard> {
        use Color::*;

        let mut cards = vec![
            ChanceCard::GetOutOfJailFree,
            ChanceCard::MoveToGo,
            ChanceCard::Homework { amount: config.homework_money },
            ChanceCard::Sweets { amount: config.sweets_penalty },
            ChanceCard::Birthday,
            ChanceCard::Jump { position: FREE_JUMP_TARGET, free_of_charge: true },
            ChanceCard::Jump { position: PAID_JUMP_TARGET, free_of_charge: false },
            ChanceCard::ChooseColor { colors: smallvec![Orange] },
            ChanceCard::ChooseColor { colors: smallvec![LightBlue] },
            ChanceCard::ChooseColor { colors: smallvec![Pink, Blue] },
            ChanceCard::ChooseColor { colors: smallvec![LightBlue, Red] },
            ChanceCard::ChooseColor { colors: smallvec![Brown, Yellow] },
            ChanceCard::ChooseColor { colors: smallvec![Orange, Green] },
            ChanceCard::MoveOneOrChance,
            ChanceCard::MoveUpToXFields { fields: config.move_up_to },
        ];
        cards.extend(tokens.iter().map(|&token| ChanceCard::ChooseJump { token }));
        cards
    }

    /// Does this card stay with a player after being drawn?
    #[must_use]
    pub fn is_held(&self) -> bool {
        matches!(self, ChanceCard::GetOutOfJailFree | ChanceCard::ChooseJump { .. })
    }
}

impl std::fmt::Display for ChanceCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChanceCard::GetOutOfJailFree => f.write_str("Get Out of Jail Free"),
            ChanceCard::MoveToGo => f.write_str("Move to Go"),
            ChanceCard::Homework { .. } => f.write_str("Homework"),
            ChanceCard::Sweets { .. } => f.write_str("Sweets"),
            ChanceCard::Birthday => f.write_str("Birthday"),
            ChanceCard::Jump { position, .. } => write!(f, "Jump to space {position}"),
            ChanceCard::ChooseColor { colors } => {
                f.write_str("Jump to ")?;
                for (i, color) in colors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{color}")?;
                }
                Ok(())
            }
            ChanceCard::MoveOneOrChance => f.write_str("Move one or new Chance"),
            ChanceCard::MoveUpToXFields { fields } => write!(f, "Move up to {fields} fields"),
            ChanceCard::ChooseJump { token } => write!(f, "{token} Jump"),
        }
    }
}
