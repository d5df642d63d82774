//! Players and the per-turn state machine.
//!
//! ## Turn sequence
//!
//! 1. A jailed player leaves jail with a held "Get Out of Jail Free" card,
//!    or by paying the fee. A jailed player who can do neither goes
//!    bankrupt and the turn ends.
//! 2. A held jump card replaces the dice roll for this turn.
//! 3. Otherwise the player rolls and moves.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::dice::Dice;
use crate::board::Board;
use crate::cards::ChanceCard;
use crate::core::{PlayerId, PlayerState, Token};
use crate::rules::Table;

/// Per-seat mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub token: Token,
    /// Always in `0..BOARD_SIZE`.
    pub position: usize,
    pub money: i64,
    pub in_jail: bool,
    /// Bankrupt. A bankrupt player stays seated but takes no more turns.
    pub game_over: bool,
    /// Cards kept instead of discarded, in the order received.
    pub held_cards: SmallVec<[ChanceCard; 2]>,
}

impl Player {
    /// Seat a player on Go with `money`.
    #[must_use]
    pub fn new(id: PlayerId, token: Token, money: i64) -> Self {
        Self {
            id,
            token,
            position: 0,
            money,
            in_jail: false,
            game_over: false,
            held_cards: SmallVec::new(),
        }
    }

    /// Remove and return the first held card matching `pred`.
    pub fn take_held(&mut self, pred: impl Fn(&ChanceCard) -> bool) -> Option<ChanceCard> {
        let idx = self.held_cards.iter().position(pred)?;
        Some(self.held_cards.remove(idx))
    }

    /// Does the player hold a "Get Out of Jail Free" card?
    #[must_use]
    pub fn has_jail_card(&self) -> bool {
        self.held_cards.contains(&ChanceCard::GetOutOfJailFree)
    }

    /// Sum of prices of the places this player owns on `board`.
    #[must_use]
    pub fn ownership_value(&self, board: &Board) -> i64 {
        board.ownership_value(self.id)
    }

    /// Snapshot of the player.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        PlayerState {
            id: self.id,
            token: self.token,
            position: self.position,
            money: self.money,
            game_over: self.game_over,
            in_jail: self.in_jail,
            held_cards: self.held_cards.to_vec(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id.0, self.token)
    }
}

impl Table<'_> {
    /// Play one turn for `player`.
    pub fn take_turn(&mut self, player: PlayerId, dice: &Dice) {
        if self.player(player).in_jail && !self.leave_jail(player) {
            return;
        }

        let jump = self
            .player_mut(player)
            .take_held(|card| matches!(card, ChanceCard::ChooseJump { .. }));
        if let Some(card) = jump {
            self.play_chosen_jump(player, card);
            return;
        }

        let roll = dice.roll(self.rng);
        debug!(%player, roll, "rolled");
        self.move_player(player, roll);
    }

    /// Try to get `player` out of jail. Returns false if they went bankrupt.
    fn leave_jail(&mut self, player: PlayerId) -> bool {
        let fee = self.config.jail_fee;

        if let Some(card) = self
            .player_mut(player)
            .take_held(|card| *card == ChanceCard::GetOutOfJailFree)
        {
            self.board.deck.discard(card);
            info!(%player, "left jail with a card");
        } else if self.player(player).money < fee {
            info!(%player, fee, "cannot pay to leave jail");
            self.declare_bankrupt(player);
            return false;
        } else {
            let paid = self.board.bank.deposit(fee);
            self.player_mut(player).money -= paid;
            info!(%player, fee = paid, "paid to leave jail");
        }

        self.player_mut(player).in_jail = false;
        true
    }

    /// Advance `player` by `steps` and land on the resulting space.
    ///
    /// Reaching or passing the end of the board credits the Go money before
    /// wrapping around.
    pub fn move_player(&mut self, player: PlayerId, steps: usize) {
        let board_len = self.board.len();
        let target = self.player(player).position + steps;

        if target >= board_len {
            let paid = self.board.bank.withdraw(self.config.go_money);
            self.player_mut(player).money += paid;
            info!(%player, amount = paid, "passed Go");
        }

        self.player_mut(player).position = target % board_len;
        self.land(player, false);
    }
}
