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
//! Errors used by the [`Board`][crate::board::Board] and its helpers.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Location, ships::ShipType};

/// Error returned when coordinate text cannot be turned into a [`Location`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CoordinateError {
    /// No column letters were given.
    #[error("column letters are empty")]
    Empty,
    /// More than two column letters were given.
    #[error("column letters {0:?} are longer than two characters")]
    TooLong(String),
    /// A column letter was not in `'A'..='Z'`.
    #[error("column letter {0:?} is outside of A-Z")]
    OutOfRange(char),
    /// The column letters encode a column past the largest supported board.
    #[error("column {0} is larger than the supported maximum")]
    TooLarge(usize),
    /// The text was not a column-row pair such as `B7` or `7B`.
    #[error("{0:?} is not a column-row coordinate")]
    Malformed(String),
}

/// Reason why a ship could not be placed with a given anchor and orientation.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// A ship with the same name is already on the board.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// The ship was never placed, so it cannot be moved.
    #[error("ship has not been placed")]
    NotPlaced,
    /// One or more of the cells would fall outside the board.
    #[error("the requested position does not fit on the board")]
    OutOfBounds,
    /// One or more of the cells was already occupied.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place {ship} at {anchor}: {reason}")]
pub struct PlaceError {
    reason: CannotPlaceReason,
    ship: ShipType,
    anchor: Location,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, ship, and anchor.
    pub(super) fn new(reason: CannotPlaceReason, ship: &ShipType, anchor: Location) -> Self {
        Self {
            reason,
            ship: ship.clone(),
            anchor,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship that was being placed.
    pub fn ship(&self) -> &ShipType {
        &self.ship
    }

    /// Get the anchor where placement was attempted.
    pub fn anchor(&self) -> Location {
        self.anchor
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target cell is out of bounds")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("the target cell was already shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {location}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The location of the cell.
    location: Location,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, location: Location) -> Self {
        Self { reason, location }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the location of the shot cell.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Error returned when the auto-placer runs out of trials before fitting every ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not fit all ships after {trials} trials")]
pub struct AutoPlaceError {
    trials: usize,
}

impl AutoPlaceError {
    pub(super) fn new(trials: usize) -> Self {
        Self { trials }
    }

    /// Number of trials that were attempted.
    pub fn trials(&self) -> usize {
        self.trials
    }
}
