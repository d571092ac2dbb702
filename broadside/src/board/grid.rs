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
//! Defines the types that make up the grid: per-cell storage shared by every
//! [`Board`][crate::board::Board] operation.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use enumflags2::BitFlags;

use crate::{
    board::{Dimensions, Location},
    ships::Boat,
};

/// Markers that can be set on a cell independent of ship occupancy.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub(super) enum CellFlag {
    /// The cell has been shot.
    Shot = 0b01,
    /// The cell holds a mine.
    Mine = 0b10,
}

/// A single cell in the player's grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct GridCell {
    /// The boat that occupies this cell, if any.
    pub(super) ship: Option<Boat>,

    /// Shot and mine markers for this cell.
    pub(super) flags: BitFlags<CellFlag>,
}

impl GridCell {
    /// Whether this cell has been shot.
    pub(super) fn shot(&self) -> bool {
        self.flags.contains(CellFlag::Shot)
    }

    /// Whether this cell holds a mine.
    pub(super) fn mine(&self) -> bool {
        self.flags.contains(CellFlag::Mine)
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            ship: None,
            flags: BitFlags::empty(),
        }
    }
}

/// Dense storage for every cell of a board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Location`].
    pub(super) fn get<B: Borrow<Location>>(&self, loc: B) -> Option<&GridCell> {
        self.dim
            .try_linearize(loc.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Location`].
    pub(super) fn get_mut<B: Borrow<Location>>(&mut self, loc: B) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(loc.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate over every cell paired with its location.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Location, &GridCell)> {
        let width = self.dim.width();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Location::new(i % width + 1, i / width + 1), cell))
    }
}

impl<B: Borrow<Location>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, loc: B) -> &Self::Output {
        self.get(loc).expect("location out of bounds")
    }
}

impl<B: Borrow<Location>> IndexMut<B> for Grid {
    fn index_mut(&mut self, loc: B) -> &mut Self::Output {
        self.get_mut(loc).expect("location out of bounds")
    }
}
