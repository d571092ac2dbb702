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
//! Types that make up the game board.

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};

use crate::{
    placement::PlacementGenerator,
    ships::{project, Boat, Orientation, ShipType},
};

use self::grid::{CellFlag, Grid};
pub use self::{
    dimensions::{Adjacency, Dimensions, Neighbors},
    errors::{
        AutoPlaceError, CannotPlaceReason, CannotShootReason, CoordinateError, PlaceError,
        ShotError,
    },
    location::{column_index, column_letter, Location, MAX_COLUMNS},
    setup::{AutoPlacer, MAX_TRIALS},
};

mod dimensions;
mod errors;
mod grid;
mod location;
pub mod setup;

/// Number of mines [`Board::add_random_mines`] lays.
pub const MINE_COUNT: usize = 5;

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Location of this cell.
    location: Location,

    /// The boat that occupies this cell if any.
    ship: Option<&'a Boat>,

    /// Whether this cell was shot.
    shot: bool,

    /// Whether this cell holds a mine.
    mine: bool,
}

impl<'a> CellRef<'a> {
    /// The location of this cell.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The boat that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Boat> {
        self.ship
    }

    /// Whether this cell has been shot previously.
    pub fn shot(&self) -> bool {
        self.shot
    }

    /// Whether this cell was shot and a ship occupies it.
    pub fn hit(&self) -> bool {
        self.shot && self.ship.is_some()
    }

    /// Whether this cell holds a mine, whether or not it has gone off.
    pub fn mine(&self) -> bool {
        self.mine
    }
}

/// Result of a shot on a single player's board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, but did not sink it.
    Hit(ShipType),
    /// The shot hit the given ship and every one of its cells is now hit.
    Sunk(ShipType),
    /// The shot set off a mine. Lists every cell shot by the chain, starting with the
    /// mine itself.
    Mine { detonated: Vec<Location> },
}

impl ShotOutcome {
    /// Get the ship that was hit directly by the shot, if any.
    pub fn ship(&self) -> Option<&ShipType> {
        match self {
            ShotOutcome::Hit(ref ship) | ShotOutcome::Sunk(ref ship) => Some(ship),
            ShotOutcome::Miss | ShotOutcome::Mine { .. } => None,
        }
    }
}

/// Represents a single player's board: the ships placed on it, the shots fired at it,
/// and the mines hidden in it.
///
/// Every occupied cell holds the [`Boat`] covering it, and every placed ship has its
/// anchor recorded under its name. The two are kept consistent by every operation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Per-cell ship occupancy, shot and mine markers.
    grid: Grid,

    /// Anchor of every placed ship, by ship name.
    anchors: HashMap<String, Location>,
}

impl Board {
    /// Construct an empty board with the given width and height.
    /// Panics if `width` or `height` is 0. See [`Dimensions::new`].
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_dimensions(Dimensions::new(width, height))
    }

    /// Construct an empty board with the given width and height. Returns `None` if the
    /// dimensions are invalid.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        Dimensions::try_new(width, height).map(Self::with_dimensions)
    }

    /// Construct an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            anchors: HashMap::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Width of the board.
    pub fn width(&self) -> usize {
        self.grid.dim.width()
    }

    /// Height of the board.
    pub fn height(&self) -> usize {
        self.grid.dim.height()
    }

    /// Place `ship` starting at `anchor` and extending along `orientation`.
    ///
    /// If any covered cell is out of bounds or already occupied, or a ship with the same
    /// name is already on the board, the board is left untouched.
    pub fn add_ship(
        &mut self,
        ship: &ShipType,
        anchor: Location,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        if self.anchors.contains_key(ship.name()) {
            return Err(PlaceError::new(CannotPlaceReason::AlreadyPlaced, ship, anchor));
        }
        let cells = project(ship, anchor, orientation);
        for loc in cells.iter() {
            match self.grid.get(loc) {
                None => {
                    return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship, anchor));
                }
                Some(cell) if cell.ship.is_some() => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::AlreadyOccupied,
                        ship,
                        anchor,
                    ));
                }
                _ => {}
            }
        }
        // Already ensured that every cell is valid and not occupied.
        let boat = Boat::new(ship.clone(), orientation);
        for loc in cells.iter() {
            self.grid[loc].ship = Some(boat.clone());
        }
        self.anchors.insert(ship.name().to_owned(), anchor);
        Ok(())
    }

    /// Move an already placed ship to a new anchor and orientation.
    ///
    /// Fails without touching the board if the ship was never placed or the new
    /// position does not fit on the board. Otherwise the ship is lifted off the board
    /// before being placed again, and if that placement fails (because it would overlap
    /// another ship) the ship stays removed. Callers decide how to recover.
    pub fn move_ship(
        &mut self,
        ship: &ShipType,
        anchor: Location,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        if !self.anchors.contains_key(ship.name()) {
            return Err(PlaceError::new(CannotPlaceReason::NotPlaced, ship, anchor));
        }
        let dim = self.grid.dim;
        if !project(ship, anchor, orientation)
            .iter()
            .all(|loc| dim.contains(loc))
        {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship, anchor));
        }
        self.remove_ship(ship.name());
        let result = self.add_ship(ship, anchor, orientation);
        if let Err(ref err) = result {
            debug!("{} was removed and could not be replaced: {}", ship, err);
        }
        result
    }

    /// Lift the named ship off the board. Returns its previous anchor and placement, or
    /// `None` if no such ship was placed.
    pub fn remove_ship(&mut self, name: &str) -> Option<(Location, Boat)> {
        let anchor = *self.anchors.get(name)?;
        let boat = self.grid.get(anchor).and_then(|cell| cell.ship.clone())?;
        for loc in boat.cells(anchor) {
            if let Some(cell) = self.grid.get_mut(loc) {
                cell.ship = None;
            }
        }
        self.anchors.remove(name);
        Some((anchor, boat))
    }

    /// Clear every ship placement. Shots and mines are kept.
    pub fn reset(&mut self) {
        for cell in self.grid.cells.iter_mut() {
            cell.ship = None;
        }
        self.anchors.clear();
    }

    /// Get the boat occupying the given location, if any.
    pub fn boat_at(&self, loc: Location) -> Option<&Boat> {
        self.grid.get(loc).and_then(|cell| cell.ship.as_ref())
    }

    /// Get the anchor of the named ship, if it is placed.
    pub fn anchor(&self, name: &str) -> Option<Location> {
        self.anchors.get(name).copied()
    }

    /// Number of ships currently placed.
    pub fn placed_ship_count(&self) -> usize {
        self.anchors.len()
    }

    /// Get an iterator over every placed ship and its anchor.
    pub fn ships(&self) -> impl Iterator<Item = (&Boat, Location)> {
        let grid = &self.grid;
        self.anchors
            .values()
            .filter_map(move |&anchor| grid.get(anchor)?.ship.as_ref().map(|b| (b, anchor)))
    }

    /// Get a reference to the cell at the given location. Returns `None` if the
    /// location is out of bounds.
    pub fn cell(&self, loc: Location) -> Option<CellRef> {
        self.grid.get(loc).map(|cell| CellRef {
            location: loc,
            ship: cell.ship.as_ref(),
            shot: cell.shot(),
            mine: cell.mine(),
        })
    }

    /// Get an iterator over every cell of the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> {
        self.grid.iter().map(|(location, cell)| CellRef {
            location,
            ship: cell.ship.as_ref(),
            shot: cell.shot(),
            mine: cell.mine(),
        })
    }

    /// Fire a shot at the given location.
    ///
    /// Fails without changing anything if the location is out of bounds or was already
    /// shot. If the location holds a mine, every surrounding cell is shot too, and any
    /// mine among them goes off in turn. Cells are only ever shot once, which is what
    /// ends the chain.
    pub fn shoot(&mut self, loc: Location) -> Result<ShotOutcome, ShotError> {
        match self.grid.get(loc) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, loc)),
            Some(cell) if cell.shot() => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, loc))
            }
            Some(_) => {}
        }
        let detonated = self.fire(loc);
        let cell = &self.grid[loc];
        Ok(if cell.mine() {
            debug!("mine at {} shot {} cells", loc, detonated.len());
            ShotOutcome::Mine { detonated }
        } else {
            match cell.ship.as_ref().map(|boat| boat.ship_type().clone()) {
                None => ShotOutcome::Miss,
                Some(ship) if self.is_sunk(&ship) => ShotOutcome::Sunk(ship),
                Some(ship) => ShotOutcome::Hit(ship),
            }
        })
    }

    /// Mark `start` shot, following mine chains. Returns every cell that was shot in
    /// the order they were shot.
    fn fire(&mut self, start: Location) -> Vec<Location> {
        let dim = self.grid.dim;
        let mut fired = Vec::new();
        let mut pending = vec![start];
        while let Some(loc) = pending.pop() {
            let cell = match self.grid.get_mut(loc) {
                Some(cell) if !cell.shot() => cell,
                _ => continue,
            };
            cell.flags.insert(CellFlag::Shot);
            fired.push(loc);
            if cell.mine() {
                trace!("mine at {} went off", loc);
                // Pushed in reverse so they pop top, bottom, left, right, then diagonals.
                let neighbors: Vec<_> = dim.neighbors(loc, Adjacency::Surrounding).collect();
                pending.extend(neighbors.into_iter().rev());
            }
        }
        fired
    }

    /// Whether the location has been shot.
    pub fn has_shot(&self, loc: Location) -> bool {
        self.grid.get(loc).map_or(false, |cell| cell.shot())
    }

    /// Whether the location has been shot and a ship occupies it.
    pub fn is_hit(&self, loc: Location) -> bool {
        self.grid
            .get(loc)
            .map_or(false, |cell| cell.shot() && cell.ship.is_some())
    }

    /// Whether the location holds a mine. This reveals mines that have not gone off
    /// yet; opponents should only rely on it for cells that were shot.
    pub fn is_mine(&self, loc: Location) -> bool {
        self.grid.get(loc).map_or(false, |cell| cell.mine())
    }

    /// Lay a mine at the given location. Returns false if the location is out of
    /// bounds or already holds a mine.
    pub fn add_mine(&mut self, loc: Location) -> bool {
        match self.grid.get_mut(loc) {
            Some(cell) if !cell.mine() => {
                cell.flags.insert(CellFlag::Mine);
                true
            }
            _ => false,
        }
    }

    /// Lay [`MINE_COUNT`] mines at distinct locations suggested by the generator.
    /// Suggestions that are out of bounds or already mined are discarded. Gives up
    /// after [`MAX_TRIALS`] suggestions or once every cell is mined. Returns the number
    /// of mines laid.
    pub fn add_random_mines<G: PlacementGenerator + ?Sized>(&mut self, generator: &mut G) -> usize {
        let free = self.grid.cells.iter().filter(|cell| !cell.mine()).count();
        let wanted = MINE_COUNT.min(free);
        let mut laid = 0;
        for _ in 0..MAX_TRIALS {
            if laid == wanted {
                break;
            }
            let loc = generator.generate_location(self.width(), self.height());
            if self.add_mine(loc) {
                laid += 1;
            } else {
                trace!("discarded mine location {}", loc);
            }
        }
        debug!("laid {} of {} mines", laid, wanted);
        laid
    }

    /// Returns true if every cell occupied by a ship has been shot. This is vacuously
    /// true when no ships are placed, so check [`Board::placed_ship_count`] before
    /// treating it as a win.
    pub fn are_all_ships_sunk(&self) -> bool {
        self.grid
            .cells
            .iter()
            .all(|cell| cell.ship.is_none() || cell.shot())
    }

    /// Returns true if the given ship is placed and every one of its cells is hit.
    pub fn is_sunk(&self, ship: &ShipType) -> bool {
        let anchor = match self.anchors.get(ship.name()) {
            Some(&anchor) => anchor,
            None => return false,
        };
        let orientation = match self.boat_at(anchor) {
            Some(boat) => boat.orientation(),
            None => return false,
        };
        project(ship, anchor, orientation)
            .into_iter()
            .all(|loc| self.is_hit(loc))
    }

    /// Get the ship types on the board that have not been sunk yet, ordered by size and
    /// then by name.
    pub fn remaining_ships(&self) -> Vec<ShipType> {
        let present: BTreeSet<&ShipType> = self
            .grid
            .cells
            .iter()
            .filter_map(|cell| cell.ship.as_ref().map(Boat::ship_type))
            .collect();
        present
            .into_iter()
            .filter(|ship| !self.is_sunk(ship))
            .cloned()
            .collect()
    }

    /// Get every location that has not been shot, column by column.
    pub fn not_fired_locations(&self) -> Vec<Location> {
        self.grid
            .dim
            .iter_locations()
            .filter(|&loc| !self.has_shot(loc))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn anchors_and_cells_stay_consistent() {
        let mut board = Board::new(10, 10);
        let ship = ShipType::new("Cruiser", 3);
        board
            .add_ship(&ship, loc("B2"), Orientation::Horizontal)
            .unwrap();
        for (boat, anchor) in board.ships() {
            for cell in boat.cells(anchor) {
                assert_eq!(board.boat_at(cell), Some(boat));
            }
        }
        let occupied = board.cells().filter(|cell| cell.ship().is_some()).count();
        assert_eq!(occupied, 3);
    }

    #[test]
    fn same_name_cannot_be_added_twice() {
        let mut board = Board::new(10, 10);
        let ship = ShipType::new("Cruiser", 3);
        board
            .add_ship(&ship, loc("A1"), Orientation::Vertical)
            .unwrap();
        let err = board
            .add_ship(&ship, loc("E5"), Orientation::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);
        assert_eq!(board.boat_at(loc("E5")), None);
    }

    #[test]
    fn remove_ship_clears_cells_and_anchor() {
        let mut board = Board::new(10, 10);
        let ship = ShipType::new("Cruiser", 3);
        board
            .add_ship(&ship, loc("C3"), Orientation::Vertical)
            .unwrap();
        let (anchor, boat) = board.remove_ship("Cruiser").unwrap();
        assert_eq!(anchor, loc("C3"));
        assert_eq!(boat.orientation(), Orientation::Vertical);
        assert_eq!(board.placed_ship_count(), 0);
        assert!(board.cells().all(|cell| cell.ship().is_none()));
        assert!(board.remove_ship("Cruiser").is_none());
    }

    #[test]
    fn reset_keeps_shots_and_mines() {
        let mut board = Board::new(5, 5);
        board
            .add_ship(&ShipType::new("Cruiser", 3), loc("A1"), Orientation::Vertical)
            .unwrap();
        board.add_mine(loc("E5"));
        board.shoot(loc("A1")).unwrap();
        board.reset();
        assert_eq!(board.placed_ship_count(), 0);
        assert_eq!(board.boat_at(loc("A2")), None);
        assert!(board.has_shot(loc("A1")));
        assert!(!board.is_hit(loc("A1")));
        assert!(board.is_mine(loc("E5")));
    }

    #[test]
    fn shot_outcomes() {
        let mut board = Board::new(5, 5);
        let patrol = ShipType::new("Patrol Boat", 2);
        board
            .add_ship(&patrol, loc("A1"), Orientation::Horizontal)
            .unwrap();
        assert_eq!(board.shoot(loc("C3")), Ok(ShotOutcome::Miss));
        assert_eq!(board.shoot(loc("A1")), Ok(ShotOutcome::Hit(patrol.clone())));
        assert_eq!(board.shoot(loc("B1")), Ok(ShotOutcome::Sunk(patrol)));
    }

    #[test]
    fn mine_outcome_lists_chain_in_order() {
        let mut board = Board::new(5, 5);
        board.add_mine(loc("A1"));
        let outcome = board.shoot(loc("A1")).unwrap();
        assert_eq!(
            outcome,
            ShotOutcome::Mine {
                detonated: vec![loc("A1"), loc("A2"), loc("B1"), loc("B2")]
            }
        );
        assert_eq!(outcome.ship(), None);
    }

    #[test]
    fn mines_rejected_out_of_bounds_or_twice() {
        let mut board = Board::new(5, 5);
        assert!(board.add_mine(loc("C3")));
        assert!(!board.add_mine(loc("C3")));
        assert!(!board.add_mine(loc("F1")));
        assert!(!board.add_mine(Location::new(0, 0)));
    }

    #[test]
    fn cell_refs_report_flags() {
        let mut board = Board::new(5, 5);
        let ship = ShipType::new("Destroyer", 3);
        board
            .add_ship(&ship, loc("B2"), Orientation::Vertical)
            .unwrap();
        board.add_mine(loc("D4"));
        board.shoot(loc("B3")).unwrap();

        let hit = board.cell(loc("B3")).unwrap();
        assert!(hit.shot() && hit.hit() && !hit.mine());
        assert_eq!(hit.ship().map(Boat::name), Some("Destroyer"));

        let hidden = board.cell(loc("D4")).unwrap();
        assert!(hidden.mine() && !hidden.shot());
        assert!(board.cell(loc("F6")).is_none());

        let locations: Vec<_> = board.cells().map(|cell| cell.location()).take(2).collect();
        assert_eq!(locations, [loc("A1"), loc("B1")]);
    }

    #[test]
    fn not_fired_locations_shrink() {
        let mut board = Board::new(5, 5);
        assert_eq!(board.not_fired_locations().len(), 25);
        board.shoot(loc("A1")).unwrap();
        let remaining = board.not_fired_locations();
        assert_eq!(remaining.len(), 24);
        assert_eq!(remaining[0], loc("A2"));
        assert!(!remaining.contains(&loc("A1")));
    }

    #[test]
    fn sunk_is_per_ship() {
        let mut board = Board::new(10, 10);
        let cruiser = ShipType::new("Cruiser", 3);
        let patrol = ShipType::new("Patrol Boat", 2);
        board
            .add_ship(&cruiser, loc("A1"), Orientation::Vertical)
            .unwrap();
        board
            .add_ship(&patrol, loc("C1"), Orientation::Horizontal)
            .unwrap();
        board.shoot(loc("C1")).unwrap();
        board.shoot(loc("D1")).unwrap();
        assert!(board.is_sunk(&patrol));
        assert!(!board.is_sunk(&cruiser));
        assert!(!board.is_sunk(&ShipType::new("Carrier", 5)));
        assert_eq!(board.remaining_ships(), vec![cruiser]);
    }
}
