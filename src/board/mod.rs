//! The board: 24 fixed spaces, the bank and the chance deck.
//!
//! ## Layout
//!
//! ```text
//!  0 Go            6 Jail           12 Free Parking   18 Go To Jail
//!  1-2 brown       7-8 pink         13-14 red         19-20 green
//!  3 Chance        9 Chance         15 Chance         21 Chance
//!  4-5 lightblue   10-11 orange     16-17 yellow      22-23 blue
//! ```
//!
//! Space indices never change during a game. Cards and players refer to
//! spaces by index.

mod bank;
mod deck;
mod space;

pub use bank::Bank;
pub use deck::ChanceDeck;
pub use space::{Color, Place, Space};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::ChanceCard;
use crate::core::{BoardState, GameRng, PlayerId, RulesConfig, Token};

/// Number of spaces on the board.
pub const BOARD_SIZE: usize = 24;

/// Index of the Go space.
pub const GO_POSITION: usize = 0;

/// Index of the Jail space.
pub const JAIL_POSITION: usize = 6;

/// Board positions of one color group (2-3 places).
pub type ColorGroup = SmallVec<[usize; 3]>;

fn standard_layout() -> Vec<Space> {
    use Color::*;

    vec![
        Space::Go,
        Space::Place(Place::new("Taco Truck", 1, Brown)),
        Space::Place(Place::new("Pizza House", 1, Brown)),
        Space::Chance,
        Space::Place(Place::new("Bakery", 1, LightBlue)),
        Space::Place(Place::new("Ice Cream Parlor", 1, LightBlue)),
        Space::Jail,
        Space::Place(Place::new("Museum", 2, Pink)),
        Space::Place(Place::new("Library", 2, Pink)),
        Space::Chance,
        Space::Place(Place::new("Go-Karts", 2, Orange)),
        Space::Place(Place::new("Swimming Pool", 2, Orange)),
        Space::FreeParking,
        Space::Place(Place::new("Ferris Wheel", 3, Red)),
        Space::Place(Place::new("Roller Coaster", 3, Red)),
        Space::Chance,
        Space::Place(Place::new("Toy Store", 3, Yellow)),
        Space::Place(Place::new("Pet Store", 3, Yellow)),
        Space::GoToJail { jail_position: JAIL_POSITION },
        Space::Place(Place::new("Aquarium", 4, Green)),
        Space::Place(Place::new("The Zoo", 4, Green)),
        Space::Chance,
        Space::Place(Place::new("Park Place", 5, Blue)),
        Space::Place(Place::new("Boardwalk", 5, Blue)),
    ]
}

/// The game board.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    /// Money supply.
    pub bank: Bank,
    /// Chance draw and discard piles.
    pub deck: ChanceDeck,
    color_groups: FxHashMap<Color, ColorGroup>,
}

impl Board {
    /// Build the standard board for the seated `tokens`.
    ///
    /// The deck holds the fixed card set plus one jump card per seated token,
    /// shuffled with `rng`.
    #[must_use]
    pub fn new(tokens: &[Token], config: &RulesConfig, rng: &mut GameRng) -> Self {
        let spaces = standard_layout();

        let mut color_groups: FxHashMap<Color, ColorGroup> = FxHashMap::default();
        for (position, space) in spaces.iter().enumerate() {
            if let Space::Place(place) = space {
                color_groups.entry(place.color).or_default().push(position);
            }
        }

        Self {
            spaces,
            bank: Bank::new(config.bank_money),
            deck: ChanceDeck::new(ChanceCard::standard_set(tokens, config), rng),
            color_groups,
        }
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// A board always has spaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// All spaces in board order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// The space at `position` (taken modulo the board length).
    #[must_use]
    pub fn space(&self, position: usize) -> &Space {
        &self.spaces[position % self.spaces.len()]
    }

    /// The place at `position`, if that space is a place.
    #[must_use]
    pub fn place(&self, position: usize) -> Option<&Place> {
        self.spaces.get(position).and_then(Space::as_place)
    }

    /// Mutable access to the place at `position`.
    pub fn place_mut(&mut self, position: usize) -> Option<&mut Place> {
        match self.spaces.get_mut(position) {
            Some(Space::Place(place)) => Some(place),
            _ => None,
        }
    }

    /// Iterate over `(position, place)` pairs in board order.
    pub fn places(&self) -> impl Iterator<Item = (usize, &Place)> {
        self.spaces
            .iter()
            .enumerate()
            .filter_map(|(position, space)| space.as_place().map(|place| (position, place)))
    }

    /// Positions of every place.
    #[must_use]
    pub fn place_positions(&self) -> Vec<usize> {
        self.places().map(|(position, _)| position).collect()
    }

    /// Positions of the places in `color`.
    #[must_use]
    pub fn color_group(&self, color: Color) -> &[usize] {
        self.color_groups.get(&color).map_or(&[][..], |group| group.as_slice())
    }

    /// Does `owner` hold every place of `color`?
    #[must_use]
    pub fn owns_color_set(&self, owner: PlayerId, color: Color) -> bool {
        let group = self.color_group(color);
        !group.is_empty()
            && group
                .iter()
                .all(|&position| self.place(position).and_then(|place| place.owner) == Some(owner))
    }

    /// Sum of prices of the places `player` owns.
    #[must_use]
    pub fn ownership_value(&self, player: PlayerId) -> i64 {
        self.places()
            .filter(|(_, place)| place.owner == Some(player))
            .map(|(_, place)| place.price)
            .sum()
    }

    /// Snapshot of bank and places.
    #[must_use]
    pub fn state(&self) -> BoardState {
        BoardState {
            bank: self.bank.state(),
            places: self.places().map(|(_, place)| place.state()).collect(),
        }
    }
}
