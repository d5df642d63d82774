//! Chance card resolution.
//!
//! A drawn card is "in play" until its effect finishes. Most cards then go
//! to the discard pile; `GetOutOfJailFree` and `ChooseJump` move into a
//! player's held cards instead. `ChooseJump` is handed to its holder
//! before the drawer draws again, and `MoveOneOrChance` is discarded only
//! after its extra draw has resolved, so a card can never draw itself.

use tracing::{debug, info, warn};

use super::choose::choose_place;
use super::ChanceCard;
use crate::board::GO_POSITION;
use crate::core::PlayerId;
use crate::rules::Table;

impl Table<'_> {
    /// Draw the top chance card and resolve it for `player`.
    pub fn draw_chance_card(&mut self, player: PlayerId) {
        match self.board.deck.draw(self.rng) {
            Some(card) => self.resolve_card(player, card),
            None => warn!(%player, "no chance card left to draw"),
        }
    }

    /// Apply `card`'s effect to `player`, then file the card away.
    pub fn resolve_card(&mut self, player: PlayerId, card: ChanceCard) {
        info!(%player, card = %card, "drew chance card");

        match card {
            ChanceCard::GetOutOfJailFree => {
                self.player_mut(player).held_cards.push(card);
                return;
            }
            ChanceCard::MoveToGo => {
                let paid = self.board.bank.withdraw(self.config.go_money);
                let p = self.player_mut(player);
                p.position = GO_POSITION;
                p.money += paid;
            }
            ChanceCard::Homework { amount } => {
                let paid = self.board.bank.withdraw(amount);
                self.player_mut(player).money += paid;
            }
            ChanceCard::Sweets { amount } => {
                let paid = self.board.bank.deposit(amount);
                self.player_mut(player).money -= paid;
            }
            ChanceCard::Birthday => {
                let gift = self.config.birthday_money;
                let mut collected = 0;
                for other in self.players.iter_mut().filter(|other| other.id != player) {
                    other.money -= gift;
                    collected += gift;
                }
                self.player_mut(player).money += collected;
            }
            ChanceCard::Jump { position, free_of_charge } => {
                self.player_mut(player).position = position;
                self.land(player, free_of_charge);
            }
            ChanceCard::ChooseColor { ref colors } => {
                let candidates: Vec<usize> = colors
                    .iter()
                    .flat_map(|&color| self.board.color_group(color).iter().copied())
                    .collect();
                self.jump_to_chosen_place(player, &candidates, true);
            }
            ChanceCard::MoveOneOrChance => {
                if self.rng.gen_bool(0.5) {
                    debug!(%player, "chose to move one space");
                    self.move_player(player, 1);
                } else {
                    debug!(%player, "chose a new chance card");
                    self.draw_chance_card(player);
                }
            }
            ChanceCard::MoveUpToXFields { fields } => {
                let steps = self.rng.gen_range(0..=fields) as usize;
                debug!(%player, steps, "chose distance");
                self.move_player(player, steps);
            }
            ChanceCard::ChooseJump { token } => {
                let holder = self.players.iter().find(|p| p.token == token).map(|p| p.id);
                if let Some(holder) = holder {
                    info!(%holder, card = %card, "holds jump card");
                    self.player_mut(holder).held_cards.push(card);
                    self.draw_chance_card(player);
                    return;
                }
                self.draw_chance_card(player);
            }
        }

        self.board.deck.discard(card);
    }

    /// Play a held `ChooseJump` card for its holder.
    ///
    /// The holder picks any place, teleports there and lands paying as usual.
    /// The card is then discarded.
    pub fn play_chosen_jump(&mut self, player: PlayerId, card: ChanceCard) {
        info!(%player, card = %card, "plays held jump card");
        let candidates = self.board.place_positions();
        self.jump_to_chosen_place(player, &candidates, false);
        self.board.deck.discard(card);
    }

    fn jump_to_chosen_place(&mut self, player: PlayerId, candidates: &[usize], free_of_charge: bool) {
        let money = self.player(player).money;
        let Some(target) = choose_place(self.board, player, money, candidates, self.rng) else {
            return;
        };

        debug!(%player, place = self.board.space(target).name(), "chose place");
        self.player_mut(player).position = target;
        self.land(player, free_of_charge);
    }
}
