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
use crate::{
    board::Location,
    ships::{Orientation, ShipType},
};

/// Project a straight ship onto the board, returning every cell it covers starting at
/// `anchor` and extending along the orientation. Does not in any way account for the
/// bounds of the board or whether cells are already occupied.
pub fn project(ship: &ShipType, anchor: Location, orientation: Orientation) -> Vec<Location> {
    (0..ship.size())
        .map(|offset| step(anchor, orientation, offset))
        .collect()
}

/// Move `offset` cells away from `start` along the given orientation. Saturates rather
/// than overflowing, which can only happen for coordinates far outside any board.
fn step(start: Location, orientation: Orientation, offset: usize) -> Location {
    match orientation {
        Orientation::Horizontal => Location::new(start.x.saturating_add(offset), start.y),
        Orientation::Vertical => Location::new(start.x, start.y.saturating_add(offset)),
    }
}
