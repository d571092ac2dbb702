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
use std::borrow::Borrow;

use crate::board::Location;

/// Which cells count as neighbors of a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Adjacency {
    /// The four cells sharing an edge: top, bottom, left, right.
    Orthogonal,
    /// All eight cells sharing an edge or a corner.
    Surrounding,
}

/// Width and height of a board. Cells run from `(1, 1)` to `(width, height)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Location`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Location`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width.checked_mul(height).map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the total number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the location is on the board.
    pub fn contains<B: Borrow<Location>>(&self, loc: B) -> bool {
        self.check_bounds(loc).is_some()
    }

    /// Convert a location to a linear index within these dimensions.
    /// Returns `None` if the location is out of bounds.
    pub(super) fn try_linearize(&self, loc: &Location) -> Option<usize> {
        self.check_bounds(loc)
            .map(|loc| (loc.y - 1) * self.width + (loc.x - 1))
    }

    /// Iterate every location on the board, column by column.
    pub fn iter_locations(&self) -> impl Iterator<Item = Location> {
        let height = self.height;
        (1..=self.width).flat_map(move |x| (1..=height).map(move |y| Location::new(x, y)))
    }

    /// Iterate the in-bounds neighbors of the given location. Orthogonal neighbors come
    /// first in the order top, bottom, left, right, followed by the diagonals top-left,
    /// top-right, bottom-left, bottom-right when `adjacency` includes them. An
    /// out-of-bounds location has no neighbors.
    pub fn neighbors(&self, loc: Location, adjacency: Adjacency) -> Neighbors {
        Neighbors {
            dim: *self,
            center: loc,
            adjacency,
            // If the location is out of bounds, skip directly to the End state so we
            // don't have to check it on every step.
            step: self
                .check_bounds(loc)
                .map_or(NeighborStep::End, |_| NeighborStep::Top),
        }
    }

    /// Check if the given [`Location`] is in bounds for these [`Dimensions`]. If so,
    /// return it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Location>>(&self, loc: B) -> Option<B> {
        let l = loc.borrow();
        if (1..=self.width).contains(&l.x) && (1..=self.height).contains(&l.y) {
            Some(loc)
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

/// Iterator over the neighbors of a location.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dim: Dimensions,
    center: Location,
    adjacency: Adjacency,
    step: NeighborStep,
}

#[derive(Debug, Copy, Clone)]
enum NeighborStep {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    End,
}

impl Iterator for Neighbors {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let Location { x, y } = self.center;
        loop {
            // Offsets are applied to the 1-indexed center, so 0 is already out of bounds
            // and never needs a checked subtraction.
            let candidate = match self.step {
                NeighborStep::Top => {
                    self.step = NeighborStep::Bottom;
                    Location::new(x, y - 1)
                }
                NeighborStep::Bottom => {
                    self.step = NeighborStep::Left;
                    Location::new(x, y + 1)
                }
                NeighborStep::Left => {
                    self.step = NeighborStep::Right;
                    Location::new(x - 1, y)
                }
                NeighborStep::Right => {
                    self.step = match self.adjacency {
                        Adjacency::Orthogonal => NeighborStep::End,
                        Adjacency::Surrounding => NeighborStep::TopLeft,
                    };
                    Location::new(x + 1, y)
                }
                NeighborStep::TopLeft => {
                    self.step = NeighborStep::TopRight;
                    Location::new(x - 1, y - 1)
                }
                NeighborStep::TopRight => {
                    self.step = NeighborStep::BottomLeft;
                    Location::new(x + 1, y - 1)
                }
                NeighborStep::BottomLeft => {
                    self.step = NeighborStep::BottomRight;
                    Location::new(x - 1, y + 1)
                }
                NeighborStep::BottomRight => {
                    self.step = NeighborStep::End;
                    Location::new(x + 1, y + 1)
                }
                NeighborStep::End => return None,
            };
            if self.dim.contains(candidate) {
                return Some(candidate);
            }
        }
    }
}
