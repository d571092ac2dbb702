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
//! Computer opponent that decides where to shoot next.
//!
//! [`TargetingAi`] is a hunt/target state machine. While it knows of no promising
//! cells it hunts, letting a [`PlacementGenerator`] pick any cell that has not been shot.
//! As soon as one of its shots hits a ship or sets off a mine it switches to targeting,
//! queueing up the neighbors of what it found and working through them until the queue
//! runs dry.
//!
//! The AI only looks at what an opponent is allowed to see: which cells were shot,
//! which of those were hits, and which of those were mines. It never shoots the board
//! itself; the caller applies every returned location with [`Board::shoot`].

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::{
    board::{Adjacency, Board, Location},
    placement::PlacementGenerator,
};

/// What the AI is currently doing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// No candidates are queued; shots are picked from every unshot cell.
    Hunt,
    /// Shots come from the queue of cells next to earlier hits.
    Target,
}

/// Hunt/target search over a single opponent board.
///
/// The AI keeps state between shots, so one instance should follow one board for a
/// whole game. Call [`TargetingAi::reset`] before pointing it at a different board.
#[derive(Debug, Clone)]
pub struct TargetingAi {
    /// Current mode, as of the last chosen shot.
    mode: Mode,

    /// The location returned by the last call to `choose_next_shot`.
    last_shot: Option<Location>,

    /// Candidate cells. The most recently queued candidate is tried first.
    targets: Vec<Location>,

    /// Every location ever queued or chosen, so nothing is queued twice.
    targeted: HashSet<Location>,
}

impl TargetingAi {
    /// Create an AI that has not fired yet.
    pub fn new() -> Self {
        Self {
            mode: Mode::Hunt,
            last_shot: None,
            targets: Vec::new(),
            targeted: HashSet::new(),
        }
    }

    /// Forget everything, as if newly created.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Mode the AI was in when it chose its last shot.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The last location this AI chose.
    pub fn last_shot(&self) -> Option<Location> {
        self.last_shot
    }

    /// Queued candidates, in the order they were queued. The last one is tried next.
    pub fn pending_targets(&self) -> &[Location] {
        &self.targets
    }

    /// Choose the next location to shoot on `board`.
    ///
    /// If the previous shot hit a ship or set off a mine, its neighborhood is queued
    /// first. Candidates that have been shot in the meantime, for example by a mine
    /// chain, are skipped. With nothing queued, the generator picks among the unshot
    /// cells. Returns `None` once every cell has been shot.
    pub fn choose_next_shot<G: PlacementGenerator + ?Sized>(
        &mut self,
        board: &Board,
        generator: &mut G,
    ) -> Option<Location> {
        if let Some(last) = self.last_shot {
            if board.is_hit(last) || revealed_mine(board, last) {
                self.expand(board, last);
            }
        }

        let next = loop {
            let candidate = match self.targets.pop() {
                Some(candidate) => {
                    self.set_mode(Mode::Target);
                    candidate
                }
                None => {
                    self.set_mode(Mode::Hunt);
                    hunt(board, generator)?
                }
            };
            if board.has_shot(candidate) {
                trace!("skipping {}, already shot", candidate);
                continue;
            }
            break candidate;
        };

        self.targeted.insert(next);
        self.last_shot = Some(next);
        Some(next)
    }

    /// Queue the unexplored neighborhood of `origin`.
    ///
    /// A hit queues its four orthogonal neighbors, pushed top, bottom, left, right so
    /// that the right one is tried first. A mine looks at all eight surrounding cells
    /// instead: hits and mines among them are explored the same way, anything else is
    /// queued directly.
    fn expand(&mut self, board: &Board, origin: Location) {
        let dim = *board.dimensions();
        let mut explored = HashSet::new();
        let mut pending = vec![origin];
        while let Some(loc) = pending.pop() {
            if !explored.insert(loc) {
                continue;
            }
            if revealed_mine(board, loc) {
                for neighbor in dim.neighbors(loc, Adjacency::Surrounding) {
                    if board.is_hit(neighbor) || revealed_mine(board, neighbor) {
                        pending.push(neighbor);
                    } else {
                        self.add_target(board, neighbor);
                    }
                }
            }
            if board.is_hit(loc) {
                for neighbor in dim.neighbors(loc, Adjacency::Orthogonal) {
                    self.add_target(board, neighbor);
                }
            }
        }
    }

    /// Queue `loc` unless it was already shot or queued before.
    fn add_target(&mut self, board: &Board, loc: Location) {
        if !board.has_shot(loc) && self.targeted.insert(loc) {
            trace!("queued {}", loc);
            self.targets.push(loc);
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("switching to {:?} mode", mode);
            self.mode = mode;
        }
    }
}

impl Default for TargetingAi {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `loc` is a mine that has gone off.
fn revealed_mine(board: &Board, loc: Location) -> bool {
    board.has_shot(loc) && board.is_mine(loc)
}

/// Let the generator pick an unshot cell. A pick that isn't one of the choices is
/// replaced with the first choice.
fn hunt<G: PlacementGenerator + ?Sized>(board: &Board, generator: &mut G) -> Option<Location> {
    let choices = board.not_fired_locations();
    let first = *choices.first()?;
    let choice = generator.choose_location(&choices);
    if board.dimensions().contains(choice) && !board.has_shot(choice) {
        Some(choice)
    } else {
        warn!("generator chose unavailable location {}, using {}", choice, first);
        Some(first)
    }
}
