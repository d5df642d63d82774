//! The mutable context every rule runs against.
//!
//! Spaces and cards never store pointers to the board or to other players.
//! Instead each effect runs as a method on `Table`, which borrows the board,
//! all players, the game's RNG and the rules configuration for the length
//! of one turn.

use tracing::info;

use crate::board::Board;
use crate::core::{GameRng, PlayerId, RulesConfig};
use crate::game::Player;

/// Borrowed view of everything a turn may change.
///
/// ## Usage
///
/// ```
/// use monopoly_junior::{Board, GameRng, Player, PlayerId, RulesConfig, Table, Token};
///
/// let config = RulesConfig::default();
/// let mut rng = GameRng::new(42);
/// let mut board = Board::new(&[Token::Cat, Token::Dog], &config, &mut rng);
/// let mut players = vec![
///     Player::new(PlayerId::new(0), Token::Cat, 20),
///     Player::new(PlayerId::new(1), Token::Dog, 20),
/// ];
///
/// let mut table = Table::new(&mut board, &mut players, &mut rng, &config);
/// table.move_player(PlayerId::new(0), 2);
/// assert_eq!(table.player(PlayerId::new(0)).position, 2);
/// ```
pub struct Table<'a> {
    pub board: &'a mut Board,
    /// Players in seat order: `players[i].id == PlayerId(i)`.
    pub players: &'a mut [Player],
    pub rng: &'a mut GameRng,
    pub config: &'a RulesConfig,
}

impl<'a> Table<'a> {
    /// Borrow a board, its players, an RNG and the rules.
    pub fn new(
        board: &'a mut Board,
        players: &'a mut [Player],
        rng: &'a mut GameRng,
        config: &'a RulesConfig,
    ) -> Self {
        debug_assert!(
            players.iter().enumerate().all(|(i, p)| p.id.index() == i),
            "players must sit in seat order"
        );
        Self {
            board,
            players,
            rng,
            config,
        }
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a player mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Mark `player` bankrupt. Their game is over; the table's game ends
    /// once the turn finishes.
    pub fn declare_bankrupt(&mut self, player: PlayerId) {
        info!(%player, "is bankrupt");
        self.player_mut(player).game_over = true;
    }

    /// Has any player gone bankrupt?
    #[must_use]
    pub fn any_bankrupt(&self) -> bool {
        self.players.iter().any(|p| p.game_over)
    }
}
