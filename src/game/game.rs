//! The game loop.

use im::Vector;
use tracing::{info, warn};

use super::dice::Dice;
use super::player::Player;
use crate::board::Board;
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{GameError, GameRng, GameState, PlayerId, Result, RulesConfig, Token};
use crate::rules::{decide_winner, GameResult, Standing, Table};

/// A single game: the board, the players and the turn loop.
///
/// Each game owns all of its mutable state, including its RNG, so separate
/// games can run on separate threads.
#[derive(Clone, Debug)]
pub struct Game {
    game_id: Option<u64>,
    config: RulesConfig,
    board: Board,
    players: Vec<Player>,
    rng: GameRng,
    dice: Dice,
    turn: u32,
    game_over: bool,
    result: Option<GameResult>,
    history: Vector<GameState>,
}

/// Builder for creating a Game.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    player_count: usize,
    game_id: Option<u64>,
    seed: Option<u64>,
    rng: Option<GameRng>,
    config: RulesConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            ..Self::default()
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn game_id(mut self, game_id: Option<u64>) -> Self {
        self.game_id = game_id;
        self
    }

    /// Seed the game's RNG. Defaults to the game id, else OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use an existing RNG stream, e.g. one forked per game by a batch driver.
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the settings, seat the players and build the board.
    pub fn build(self) -> Result<Game> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        self.config.validate()?;

        let mut rng = match (self.rng, self.seed.or(self.game_id)) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => GameRng::new(seed),
            (None, None) => GameRng::from_entropy(),
        };

        let mut tokens = Token::ALL.to_vec();
        rng.shuffle(&mut tokens);
        tokens.truncate(self.player_count);

        let mut board = Board::new(&tokens, &self.config, &mut rng);
        let stake = self.config.stake(self.player_count).unwrap_or_default();
        let players = tokens
            .iter()
            .zip(PlayerId::all(self.player_count))
            .map(|(&token, id)| Player::new(id, token, board.bank.withdraw(stake)))
            .collect();

        Ok(Game {
            game_id: self.game_id,
            dice: Dice::new(self.config.dice_count),
            config: self.config,
            board,
            players,
            rng,
            turn: 0,
            game_over: false,
            result: None,
            history: Vector::new(),
        })
    }
}

impl Game {
    /// Create a game for `num_players` (2-4) with default rules.
    ///
    /// ```
    /// use monopoly_junior::Game;
    ///
    /// let mut game = Game::new(2, Some(7)).unwrap();
    /// game.play();
    /// assert!(game.is_over());
    /// assert_eq!(game.history().len() as u32, game.turn());
    ///
    /// assert!(Game::new(5, None).is_err());
    /// ```
    pub fn new(num_players: usize, game_id: Option<u64>) -> Result<Self> {
        GameBuilder::new()
            .player_count(num_players)
            .game_id(game_id)
            .build()
    }

    /// Run turns until a player goes bankrupt or the round cap is hit, then
    /// decide the winner. A game already ended through [`Game::take_turn`]
    /// only gets its winner decided. Calling it again once the result is
    /// known does nothing.
    pub fn play(&mut self) {
        if self.result.is_some() {
            return;
        }

        if !self.game_over {
            'rounds: for _ in 0..self.config.max_rounds {
                for seat in PlayerId::all(self.players.len()) {
                    if self.players[seat.index()].game_over {
                        continue;
                    }
                    if self.take_turn(seat) {
                        break 'rounds;
                    }
                }
            }

            if !self.game_over {
                warn!(game_id = ?self.game_id, rounds = self.config.max_rounds, "game over after max rounds");
                self.game_over = true;
            }
        }
        info!(game_id = ?self.game_id, turns = self.turn, "game over");

        let result = decide_winner(&self.standings());
        match result {
            GameResult::Winner(player) => info!(%player, "wins"),
            GameResult::Draw => info!("game is a draw"),
        }
        self.result = Some(result);
    }

    /// Play one turn for `player` and record a snapshot.
    ///
    /// Returns true once the game has ended.
    pub fn take_turn(&mut self, player: PlayerId) -> bool {
        let dice = self.dice;
        let mut table = self.table();
        table.take_turn(player, &dice);
        let ended = table.any_bankrupt();

        self.turn += 1;
        self.game_over = ended;
        let snapshot = self.state();
        self.history.push_back(snapshot);
        ended
    }

    /// Borrow the board, players, RNG and rules as a [`Table`].
    pub fn table(&mut self) -> Table<'_> {
        Table::new(&mut self.board, &mut self.players, &mut self.rng, &self.config)
    }

    /// Final standings of every seat.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                player: p.id,
                money: p.money,
                ownership_value: p.ownership_value(&self.board),
                bankrupt: p.game_over,
            })
            .collect()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState {
            game_id: self.game_id,
            turn: self.turn,
            game_over: self.game_over,
            players: self.players.iter().map(Player::state).collect(),
            board: self.board.state(),
        }
    }

    #[must_use]
    pub fn game_id(&self) -> Option<u64> {
        self.game_id
    }

    /// Individual player turns taken.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Completed rounds (every seated player had a turn, or the game ended
    /// during the round).
    #[must_use]
    pub fn rounds(&self) -> u32 {
        let seats = self.players.len() as u32;
        self.turn.div_ceil(seats)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Outcome, once [`Game::play`] has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The winning player, if the game finished with one.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let id = self.result?.winner()?;
        self.players.get(id.index())
    }

    /// One snapshot per turn taken, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<GameState> {
        &self.history
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to the players, for setting up scenarios.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for setting up scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}
