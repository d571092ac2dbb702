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
//! Randomized setup of a board's fleet.
use log::{debug, trace};

use crate::{
    board::{AutoPlaceError, Board},
    placement::PlacementGenerator,
    ships::ShipType,
};

/// Number of trials [`AutoPlacer::auto_place`] makes before giving up. Also bounds the
/// number of suggestions [`Board::add_random_mines`] will consider.
pub const MAX_TRIALS: usize = 10_000;

/// Places a whole fleet on a board using locations and orientations from a
/// [`PlacementGenerator`].
pub struct AutoPlacer<'a, G: ?Sized> {
    /// Board the fleet is placed onto.
    board: &'a mut Board,

    /// Source of candidate anchors and orientations.
    generator: &'a mut G,
}

impl<'a, G: PlacementGenerator + ?Sized> AutoPlacer<'a, G> {
    /// Create an [`AutoPlacer`] that places ships onto `board`.
    pub fn new(board: &'a mut Board, generator: &'a mut G) -> Self {
        Self { board, generator }
    }

    /// Try to place every ship in `ships`, in order, at generated positions.
    ///
    /// Each trial starts from a copy of the board as it was when this was called and
    /// asks the generator for one location and one orientation per ship. The first
    /// placement that fails abandons the trial, and the copy is reset for the next one.
    /// When a trial places every ship, that copy becomes the board.
    ///
    /// After [`MAX_TRIALS`] failed trials the board is left as the last trial left it,
    /// which is the freshly reset copy, and an error is returned.
    pub fn auto_place(&mut self, ships: &[ShipType]) -> Result<(), AutoPlaceError> {
        let mut trial = self.board.clone();
        for attempt in 1..=MAX_TRIALS {
            let mut placed_all = true;
            for ship in ships {
                let anchor = self
                    .generator
                    .generate_location(trial.width(), trial.height());
                let orientation = self.generator.generate_orientation();
                if let Err(err) = trial.add_ship(ship, anchor, orientation) {
                    trace!("trial {} abandoned: {}", attempt, err);
                    trial = self.board.clone();
                    placed_all = false;
                    break;
                }
            }
            if placed_all {
                debug!("placed {} ships after {} trials", ships.len(), attempt);
                *self.board = trial;
                return Ok(());
            }
        }
        debug!("gave up placing {} ships", ships.len());
        *self.board = trial;
        Err(AutoPlaceError::new(MAX_TRIALS))
    }
}

impl Board {
    /// Shorthand for [`AutoPlacer::auto_place`] on this board.
    pub fn auto_place<G: PlacementGenerator + ?Sized>(
        &mut self,
        ships: &[ShipType],
        generator: &mut G,
    ) -> Result<(), AutoPlaceError> {
        AutoPlacer::new(self, generator).auto_place(ships)
    }
}
