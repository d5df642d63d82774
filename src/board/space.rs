//! Board spaces and what happens when a player lands on them.
//!
//! ## Landing
//!
//! - `Go`, `FreeParking`, `Jail`: nothing (jail is "just visiting")
//! - `GoToJail`: player is jailed and teleported to the jail space
//! - `Chance`: draw a chance card and resolve it
//! - `Place`: buy if unowned, pay rent if owned by someone else
//!
//! A player who cannot pay for a purchase or the rent goes bankrupt.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{PlaceState, PlayerId};
use crate::rules::Table;

/// Color groups. Owning every place of a color doubles its rent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// All eight groups in board order.
    pub const ALL: [Color; 8] = [
        Color::Brown,
        Color::LightBlue,
        Color::Pink,
        Color::Orange,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
    ];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Brown => "brown",
            Color::LightBlue => "lightblue",
            Color::Pink => "pink",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A property that can be bought and charges rent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Place {
    pub name: &'static str,
    pub price: i64,
    pub color: Color,
    /// At most one owner. Ownership only changes by purchase.
    pub owner: Option<PlayerId>,
}

impl Place {
    /// Create an unowned place.
    #[must_use]
    pub const fn new(name: &'static str, price: i64, color: Color) -> Self {
        Self {
            name,
            price,
            color,
            owner: None,
        }
    }

    /// Snapshot of the place.
    #[must_use]
    pub fn state(&self) -> PlaceState {
        PlaceState {
            name: self.name.to_string(),
            owner: self.owner,
            price: self.price,
            color: self.color,
        }
    }
}

/// One of the 24 board spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    Go,
    Place(Place),
    Chance,
    FreeParking,
    GoToJail { jail_position: usize },
    Jail,
}

impl Space {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Space::Go => "Go",
            Space::Place(place) => place.name,
            Space::Chance => "Chance",
            Space::FreeParking => "Free Parking",
            Space::GoToJail { .. } => "Go To Jail",
            Space::Jail => "Jail",
        }
    }

    /// The place on this space, if it is one.
    #[must_use]
    pub fn as_place(&self) -> Option<&Place> {
        match self {
            Space::Place(place) => Some(place),
            _ => None,
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Table<'_> {
    /// Apply the effect of the space `player` currently stands on.
    ///
    /// `free_of_charge` only matters for unowned places: the player gets the
    /// place without paying.
    pub fn land(&mut self, player: PlayerId, free_of_charge: bool) {
        let position = self.player(player).position;
        let space = *self.board.space(position);
        debug!(%player, space = space.name(), position, "landed");

        match space {
            Space::Go | Space::FreeParking => {}
            Space::Jail => {
                debug!(%player, "visits jail");
            }
            Space::GoToJail { jail_position } => {
                info!(%player, "is going to jail");
                let p = self.player_mut(player);
                p.in_jail = true;
                p.position = jail_position;
            }
            Space::Chance => self.draw_chance_card(player),
            Space::Place(place) => match place.owner {
                None => self.buy_place(player, position, free_of_charge),
                Some(owner) if owner == player => {}
                Some(owner) => self.pay_rent(player, owner, position),
            },
        }
    }

    fn buy_place(&mut self, player: PlayerId, position: usize, free_of_charge: bool) {
        let Some(place) = self.board.place(position).copied() else {
            return;
        };

        if free_of_charge {
            info!(%player, place = place.name, "got place for free");
        } else if self.player(player).money >= place.price {
            let paid = self.board.bank.deposit(place.price);
            self.player_mut(player).money -= paid;
            info!(%player, place = place.name, price = paid, "bought place");
        } else {
            info!(%player, place = place.name, "cannot afford place");
            self.declare_bankrupt(player);
            return;
        }

        if let Some(place) = self.board.place_mut(position) {
            place.owner = Some(player);
        }
    }

    fn pay_rent(&mut self, player: PlayerId, owner: PlayerId, position: usize) {
        let Some(place) = self.board.place(position).copied() else {
            return;
        };

        let rent = if self.board.owns_color_set(owner, place.color) {
            place.price * 2
        } else {
            place.price
        };

        if self.player(player).money >= rent {
            self.player_mut(player).money -= rent;
            self.player_mut(owner).money += rent;
            info!(%player, %owner, place = place.name, rent, "paid rent");
        } else {
            info!(%player, %owner, place = place.name, rent, "cannot pay rent");
            self.declare_bankrupt(player);
        }
    }
}
