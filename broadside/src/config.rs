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
//! Game configuration: board size and the fleet each player places.
//!
//! Configuration text is forgiving. It is scanned for a `board: WxH` entry and any
//! number of `boat: Name, size` entries, ignoring anything around them. Problems are
//! collected rather than stopping the parse, so callers get a best-effort
//! configuration along with everything that was wrong with the text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{board::Board, ships::ShipType};

/// Smallest accepted board width or height.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest accepted board width or height.
pub const MAX_BOARD_SIZE: usize = 80;
/// Width and height used when the configuration does not give a board size.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Board size and fleet for a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Configuration {
    /// Width of each player's board.
    pub board_width: usize,
    /// Height of each player's board.
    pub board_height: usize,
    /// Ships each player places, in placement order.
    pub ship_types: Vec<ShipType>,
}

impl Configuration {
    /// Create an empty board with the configured size. Returns `None` if either
    /// dimension is 0.
    pub fn board(&self) -> Option<Board> {
        Board::try_new(self.board_width, self.board_height)
    }
}

impl Default for Configuration {
    /// The classic 10x10 game with five ships.
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_SIZE,
            board_height: DEFAULT_BOARD_SIZE,
            ship_types: vec![
                ShipType::new("Carrier", 5),
                ShipType::new("Battleship", 4),
                ShipType::new("Destroyer", 3),
                ShipType::new("Submarine", 3),
                ShipType::new("Patrol Boat", 2),
            ],
        }
    }
}

/// A problem found in configuration text.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigurationError {
    /// A ship's name starts with the same letter as an earlier ship's. The later ship
    /// is skipped.
    #[error("ship {0:?} starts with the same letter as another ship")]
    MultipleShipsWithSameStartingLetter(String),
    /// No board size was given; the default is used.
    #[error("no board size specified")]
    BoardSizeNotSpecified,
    /// The board is wider or taller than the supported maximum.
    #[error("board size {width}x{height} is too big")]
    BoardSizeTooBig { width: usize, height: usize },
    /// The board is narrower or shorter than the supported minimum.
    #[error("board size {width}x{height} is too small")]
    BoardSizeTooSmall { width: usize, height: usize },
    /// A ship has size 0. The ship is skipped.
    #[error("ship {0:?} is too small")]
    ShipTooSmall(String),
    /// A ship is longer than the board's width or height. The ship is skipped.
    #[error("ship {0:?} is too big for the board")]
    ShipTooBig(String),
    /// No usable ships were given.
    #[error("no ships specified")]
    NoShips,
}

/// Every problem found in a configuration.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid configuration: {}", list(.errors))]
pub struct ConfigErrors {
    errors: Vec<ConfigurationError>,
}

impl ConfigErrors {
    /// The problems that were found.
    pub fn errors(&self) -> &[ConfigurationError] {
        &self.errors
    }
}

fn list(errors: &[ConfigurationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of parsing configuration text: the configuration that could be recovered and
/// the problems found along the way.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParsedConfiguration {
    configuration: Configuration,
    errors: Vec<ConfigurationError>,
}

impl ParsedConfiguration {
    /// The configuration recovered from the text.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Problems found in the text.
    pub fn errors(&self) -> &[ConfigurationError] {
        &self.errors
    }

    /// The configuration if the text had no problems, otherwise all of the problems.
    pub fn into_result(self) -> Result<Configuration, ConfigErrors> {
        if self.errors.is_empty() {
            Ok(self.configuration)
        } else {
            Err(ConfigErrors {
                errors: self.errors,
            })
        }
    }
}

/// Parse configuration text.
pub fn parse(text: &str) -> ParsedConfiguration {
    let mut errors = Vec::new();
    let (board_width, board_height) = parse_board(text, &mut errors);
    let ship_types = parse_ships(text, board_width, board_height, &mut errors);
    ParsedConfiguration {
        configuration: Configuration {
            board_width,
            board_height,
            ship_types,
        },
        errors,
    }
}

/// Find the first board entry. Out-of-range sizes are reported but kept.
fn parse_board(text: &str, errors: &mut Vec<ConfigurationError>) -> (usize, usize) {
    static BOARD: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)board: ?(\d{1,9})x(\d{1,9})").unwrap());

    let size = BOARD.captures(text).and_then(|captures| {
        let width = captures[1].parse().ok()?;
        let height = captures[2].parse().ok()?;
        Some((width, height))
    });
    match size {
        Some((width, height)) => {
            if width > MAX_BOARD_SIZE || height > MAX_BOARD_SIZE {
                errors.push(ConfigurationError::BoardSizeTooBig { width, height });
            } else if width < MIN_BOARD_SIZE || height < MIN_BOARD_SIZE {
                errors.push(ConfigurationError::BoardSizeTooSmall { width, height });
            }
            (width, height)
        }
        None => {
            errors.push(ConfigurationError::BoardSizeNotSpecified);
            (DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE)
        }
    }
}

/// Collect every usable ship entry, in the order they appear.
fn parse_ships(
    text: &str,
    width: usize,
    height: usize,
    errors: &mut Vec<ConfigurationError>,
) -> Vec<ShipType> {
    static BOAT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)boat: ?([a-z ]+), ?(\d{1,9})").unwrap());

    let mut initials = HashSet::new();
    let mut ships = Vec::new();
    for captures in BOAT.captures_iter(text) {
        let name = captures[1].trim();
        let initial = match name.chars().next() {
            Some(initial) => initial,
            None => continue,
        };
        let size: usize = match captures[2].parse() {
            Ok(size) => size,
            Err(_) => continue,
        };
        if initials.contains(&initial) {
            errors.push(ConfigurationError::MultipleShipsWithSameStartingLetter(
                name.to_owned(),
            ));
        } else if size < 1 {
            errors.push(ConfigurationError::ShipTooSmall(name.to_owned()));
        } else if size > width || size > height {
            errors.push(ConfigurationError::ShipTooBig(name.to_owned()));
        } else {
            initials.insert(initial);
            ships.push(ShipType::new(name, size));
        }
    }
    if ships.is_empty() {
        errors.push(ConfigurationError::NoShips);
    }
    ships
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_fleet() {
        let config = Configuration::default();
        assert_eq!((config.board_width, config.board_height), (10, 10));
        let sizes: Vec<_> = config.ship_types.iter().map(ShipType::size).collect();
        assert_eq!(sizes, [5, 4, 3, 3, 2]);
        assert_eq!(config.board().map(|b| b.width()), Some(10));
    }

    #[test]
    fn first_board_wins() {
        let parsed = parse("Board: 40x35\nBoard: 10x10\nBoat: Carrier, 5\n");
        assert_eq!(parsed.configuration().board_width, 40);
        assert_eq!(parsed.configuration().board_height, 35);
        assert!(parsed.errors().is_empty());
    }

    #[test]
    fn board_size_limits() {
        let parsed = parse("Board: 81x10\nBoat: Carrier, 5\n");
        assert_eq!(
            parsed.errors(),
            &[ConfigurationError::BoardSizeTooBig {
                width: 81,
                height: 10
            }]
        );
        assert_eq!(parsed.configuration().board_width, 81);

        let parsed = parse("Board: 4x10\nBoat: Sub, 2\n");
        assert_eq!(
            parsed.errors(),
            &[ConfigurationError::BoardSizeTooSmall {
                width: 4,
                height: 10
            }]
        );
    }

    #[test]
    fn zero_size_ship_rejected() {
        let parsed = parse("Board: 10x10\nBoat: Carrier, 0\nBoat: Sub, 2\n");
        assert_eq!(
            parsed.errors(),
            &[ConfigurationError::ShipTooSmall("Carrier".to_owned())]
        );
        assert_eq!(parsed.configuration().ship_types, [ShipType::new("Sub", 2)]);
    }

    #[test]
    fn into_result_reports_everything() {
        let err = parse("nothing here").into_result().unwrap_err();
        assert_eq!(
            err.errors(),
            &[
                ConfigurationError::BoardSizeNotSpecified,
                ConfigurationError::NoShips
            ]
        );
        assert_eq!(
            err.to_string(),
            "invalid configuration: no board size specified; no ships specified"
        );
    }
}
