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
//! Types used for defining ships and how they sit on the board.
use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use crate::board::Location;

pub use self::linear::project;

mod linear;

/// A kind of ship: its name and how many cells it covers.
///
/// The name is the identifying key of the ship on a board. Within a single
/// configuration the first letter of every name is unique, and is used as the ship's
/// display identity (see [`ShipType::initial`]).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ShipType {
    name: String,
    size: usize,
}

impl ShipType {
    /// Construct a ship type with the given name and size. Panics if size is 0.
    pub fn new<N: Into<String>>(name: N, size: usize) -> Self {
        assert!(size > 0, "ship size must be nonzero");
        Self {
            name: name.into(),
            size,
        }
    }

    /// Get the name of this ship type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of cells this ship type covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The first letter of the ship's name, if it has one.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Ord for ShipType {
    /// Ship types order by size, then by name.
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ShipType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.name)
    }
}

/// Direction a ship extends from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends along `+x`.
    Horizontal,
    /// The ship extends along `+y`.
    Vertical,
}

/// A ship type as it was placed on the board: what it is and which way it points.
///
/// Every cell covered by a placed ship holds a copy of its [`Boat`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Boat {
    ship_type: ShipType,
    orientation: Orientation,
}

impl Boat {
    /// Construct a [`Boat`] for the given ship type and orientation.
    pub fn new(ship_type: ShipType, orientation: Orientation) -> Self {
        Self {
            ship_type,
            orientation,
        }
    }

    /// The type of ship.
    pub fn ship_type(&self) -> &ShipType {
        &self.ship_type
    }

    /// Name of the ship.
    pub fn name(&self) -> &str {
        self.ship_type.name()
    }

    /// Number of cells the ship covers.
    pub fn size(&self) -> usize {
        self.ship_type.size()
    }

    /// Orientation the ship was placed in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get every cell this boat covers when anchored at `anchor`.
    pub fn cells(&self, anchor: Location) -> Vec<Location> {
        project(&self.ship_type, anchor, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_types_order_by_size_then_name() {
        let mut ships = vec![
            ShipType::new("Submarine", 3),
            ShipType::new("Carrier", 5),
            ShipType::new("Destroyer", 3),
            ShipType::new("Patrol Boat", 2),
        ];
        ships.sort();
        let names: Vec<_> = ships.iter().map(ShipType::name).collect();
        assert_eq!(names, ["Patrol Boat", "Destroyer", "Submarine", "Carrier"]);
    }

    #[test]
    fn initial_is_first_letter() {
        assert_eq!(ShipType::new("Battleship", 4).initial(), Some('B'));
    }

    #[test]
    #[should_panic]
    fn zero_size_rejected() {
        ShipType::new("Nothing", 0);
    }

    #[test]
    fn boats_compare_type_and_orientation() {
        let cruiser = ShipType::new("Cruiser", 3);
        assert_eq!(
            Boat::new(cruiser.clone(), Orientation::Vertical),
            Boat::new(cruiser.clone(), Orientation::Vertical)
        );
        assert_ne!(
            Boat::new(cruiser.clone(), Orientation::Vertical),
            Boat::new(cruiser, Orientation::Horizontal)
        );
    }
}
