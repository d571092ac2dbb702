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
//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use broadside::{board::Location, placement::PlacementGenerator, ships::Orientation};

/// Parse a coordinate such as `F6`.
pub fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

/// [`PlacementGenerator`] replaying scripted values. Each script cycles: once every value
/// has been handed out, it starts again from the first. Calls are counted.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    orientations: VecDeque<Orientation>,
    locations: VecDeque<Location>,
    choices: VecDeque<Location>,
    board_size: Option<(usize, usize)>,
    pub orientation_calls: usize,
    pub location_calls: usize,
    pub choice_calls: usize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientations(mut self, orientations: &[Orientation]) -> Self {
        self.orientations.extend(orientations.iter().copied());
        self
    }

    pub fn locations(mut self, locations: &[&str]) -> Self {
        self.locations.extend(locations.iter().map(|s| loc(s)));
        self
    }

    pub fn choices(mut self, choices: &[&str]) -> Self {
        self.choices.extend(choices.iter().map(|s| loc(s)));
        self
    }

    /// Panic if a location is requested for a board of any other size.
    pub fn expect_board(mut self, width: usize, height: usize) -> Self {
        self.board_size = Some((width, height));
        self
    }
}

fn cycle<T: Copy>(script: &mut VecDeque<T>, what: &str) -> T {
    let value = script
        .pop_front()
        .unwrap_or_else(|| panic!("no {} scripted", what));
    script.push_back(value);
    value
}

impl PlacementGenerator for ScriptedGenerator {
    fn generate_orientation(&mut self) -> Orientation {
        self.orientation_calls += 1;
        cycle(&mut self.orientations, "orientations")
    }

    fn generate_location(&mut self, width: usize, height: usize) -> Location {
        if let Some(expected) = self.board_size {
            assert_eq!((width, height), expected, "unexpected board size");
        }
        self.location_calls += 1;
        cycle(&mut self.locations, "locations")
    }

    fn choose_location(&mut self, choices: &[Location]) -> Location {
        assert!(!choices.is_empty(), "asked to choose from nothing");
        self.choice_calls += 1;
        cycle(&mut self.choices, "choices")
    }
}
