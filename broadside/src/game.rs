// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Two-player game driver.
//!
//! [`Game`] holds both players' boards, tracks whose turn it is, and applies the rules
//! of the chosen [`FireMode`]. Boards are built either by hand and handed to
//! [`Game::new`], or generated from a [`Configuration`] by [`Game::setup`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::{debug, info};
use thiserror::Error;

use crate::{
    board::{AutoPlaceError, Board, Location, ShotError, ShotOutcome},
    config::Configuration,
    placement::PlacementGenerator,
};

/// Rules for how many shots a player gets and whether the boards are mined.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FireMode {
    /// One shot per turn.
    Normal,
    /// One shot per turn for each of the shooter's own ships still afloat.
    Salvo,
    /// One shot per turn, with mines hidden on both boards.
    HiddenMines,
}

impl FireMode {
    /// Names accepted by [`FireMode::from_str`].
    pub const NAMES: &'static [&'static str] = &["normal", "salvo", "mines"];
}

impl Default for FireMode {
    fn default() -> Self {
        FireMode::Normal
    }
}

impl Display for FireMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FireMode::Normal => "normal",
            FireMode::Salvo => "salvo",
            FireMode::HiddenMines => "mines",
        })
    }
}

/// Error returned when parsing an unknown [`FireMode`] name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown fire mode {0:?}")]
pub struct ParseFireModeError(String);

impl FromStr for FireMode {
    type Err = ParseFireModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(FireMode::Normal),
            "salvo" => Ok(FireMode::Salvo),
            "mines" | "hidden-mines" => Ok(FireMode::HiddenMines),
            _ => Err(ParseFireModeError(s.to_owned())),
        }
    }
}

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Player::One => "player one",
            Player::Two => "player two",
        })
    }
}

/// Error from setting up a game from a configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The configured board has a zero dimension.
    #[error("cannot build a {width}x{height} board")]
    InvalidBoard { width: usize, height: usize },
    /// A player's fleet could not be placed.
    #[error("could not place the fleet of {player}: {source}")]
    Placement {
        player: Player,
        source: AutoPlaceError,
    },
}

/// Error from firing a shot in a game.
#[derive(Debug, Error)]
pub enum FireError {
    /// A player has already won.
    #[error("the game is over")]
    GameOver,
    /// The opponent's board rejected the shot. The shot is not used up.
    #[error(transparent)]
    Shot(#[from] ShotError),
}

/// A game in progress between two players.
#[derive(Debug, Clone)]
pub struct Game {
    mode: FireMode,
    /// Boards indexed by [`Player::index`]. Each player shoots at the other's board.
    boards: [Board; 2],
    current: Player,
    /// Number of turns started so far, counting the current one.
    turn: usize,
    /// Shots the current player may still fire this turn.
    shots_left: usize,
}

impl Game {
    /// Start a game on prepared boards. Player one moves first.
    pub fn new(mode: FireMode, first: Board, second: Board) -> Self {
        let mut game = Self {
            mode,
            boards: [first, second],
            current: Player::One,
            turn: 1,
            shots_left: 0,
        };
        game.shots_left = game.shots_this_turn();
        game
    }

    /// Build both boards from a configuration and auto-place each player's fleet. In
    /// [`FireMode::HiddenMines`] each board is mined before its ships are placed.
    pub fn setup<G: PlacementGenerator + ?Sized>(
        config: &Configuration,
        mode: FireMode,
        generator: &mut G,
    ) -> Result<Self, SetupError> {
        let first = Self::setup_board(config, mode, Player::One, generator)?;
        let second = Self::setup_board(config, mode, Player::Two, generator)?;
        Ok(Self::new(mode, first, second))
    }

    fn setup_board<G: PlacementGenerator + ?Sized>(
        config: &Configuration,
        mode: FireMode,
        player: Player,
        generator: &mut G,
    ) -> Result<Board, SetupError> {
        let mut board = config.board().ok_or(SetupError::InvalidBoard {
            width: config.board_width,
            height: config.board_height,
        })?;
        if mode == FireMode::HiddenMines {
            let mines = board.add_random_mines(generator);
            debug!("laid {} mines for {}", mines, player);
        }
        board
            .auto_place(&config.ship_types, generator)
            .map_err(|source| SetupError::Placement { player, source })?;
        Ok(board)
    }

    /// The rules in play.
    pub fn mode(&self) -> FireMode {
        self.mode
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Number of turns started so far, counting the current one.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The given player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// The board the current player is shooting at.
    pub fn target_board(&self) -> &Board {
        self.board(self.current.opponent())
    }

    /// Number of shots the current player gets this turn. In [`FireMode::Salvo`] this
    /// is the number of the shooter's ships still afloat, but never less than one.
    pub fn shots_this_turn(&self) -> usize {
        match self.mode {
            FireMode::Normal | FireMode::HiddenMines => 1,
            FireMode::Salvo => self.board(self.current).remaining_ships().len().max(1),
        }
    }

    /// Shots the current player may still fire this turn.
    pub fn shots_left(&self) -> usize {
        self.shots_left
    }

    /// Fire one of the current player's shots at the opponent's board.
    ///
    /// Rejected shots leave the game unchanged. When the player runs out of shots and
    /// nobody has won, the turn passes to the opponent.
    pub fn fire(&mut self, loc: Location) -> Result<ShotOutcome, FireError> {
        if self.winner().is_some() {
            return Err(FireError::GameOver);
        }
        let target = self.current.opponent().index();
        let outcome = self.boards[target].shoot(loc)?;
        self.shots_left = self.shots_left.saturating_sub(1);
        if let Some(winner) = self.winner() {
            info!("{} wins on turn {}", winner, self.turn);
        } else if self.shots_left == 0 {
            self.current = self.current.opponent();
            self.turn += 1;
            self.shots_left = self.shots_this_turn();
        }
        Ok(outcome)
    }

    /// The player who has sunk every ship of an opponent that placed at least one ship.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two].iter().copied().find(|player| {
            let target = self.board(player.opponent());
            target.placed_ship_count() > 0 && target.are_all_ships_sunk()
        })
    }

    /// Whether a player has won.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}
