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
//! Sources of randomness for setup and targeting.
//!
//! Everything that needs to pick a location or orientation goes through a
//! [`PlacementGenerator`], so games can be played with real randomness or replayed from
//! a script. Values produced by a generator are never trusted: boards check them like
//! any other input.

use crate::{board::Location, ships::Orientation};

#[cfg(feature = "rng_gen")]
pub use self::random::RandomPlacementGenerator;

/// Supplies orientations and locations for placing ships and choosing shots.
pub trait PlacementGenerator {
    /// Pick an orientation for a ship.
    fn generate_orientation(&mut self) -> Orientation;

    /// Pick a location on a board of the given size.
    fn generate_location(&mut self, width: usize, height: usize) -> Location;

    /// Pick one of `choices`. Callers always pass at least one choice.
    fn choose_location(&mut self, choices: &[Location]) -> Location;
}

impl<G: PlacementGenerator + ?Sized> PlacementGenerator for &mut G {
    fn generate_orientation(&mut self) -> Orientation {
        (**self).generate_orientation()
    }

    fn generate_location(&mut self, width: usize, height: usize) -> Location {
        (**self).generate_location(width, height)
    }

    fn choose_location(&mut self, choices: &[Location]) -> Location {
        (**self).choose_location(choices)
    }
}

#[cfg(feature = "rng_gen")]
mod random {
    use rand::{
        distributions::{Distribution, Standard},
        rngs::StdRng,
        seq::SliceRandom,
        Rng, SeedableRng,
    };

    use super::PlacementGenerator;
    use crate::{board::Location, ships::Orientation};

    impl Distribution<Orientation> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
            if rng.gen() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            }
        }
    }

    /// [`PlacementGenerator`] drawing uniformly from a random number generator.
    #[derive(Debug, Clone)]
    pub struct RandomPlacementGenerator<R = StdRng> {
        rng: R,
    }

    impl<R: Rng> RandomPlacementGenerator<R> {
        /// Create a generator drawing from `rng`.
        pub fn new(rng: R) -> Self {
            Self { rng }
        }
    }

    impl RandomPlacementGenerator<StdRng> {
        /// Create a generator with a fixed seed, for reproducible games.
        pub fn seeded(seed: u64) -> Self {
            Self::new(StdRng::seed_from_u64(seed))
        }
    }

    impl Default for RandomPlacementGenerator<StdRng> {
        /// Create a generator seeded from system entropy.
        fn default() -> Self {
            Self::new(StdRng::from_entropy())
        }
    }

    impl<R: Rng> PlacementGenerator for RandomPlacementGenerator<R> {
        fn generate_orientation(&mut self) -> Orientation {
            self.rng.gen()
        }

        /// Uniform over every cell of the board. An empty axis yields 0 on that axis,
        /// which no board accepts.
        fn generate_location(&mut self, width: usize, height: usize) -> Location {
            let x = if width == 0 { 0 } else { self.rng.gen_range(1, width + 1) };
            let y = if height == 0 { 0 } else { self.rng.gen_range(1, height + 1) };
            Location::new(x, y)
        }

        /// Uniform over `choices`. Falls back to `(0, 0)`, which no board accepts, if
        /// `choices` is empty.
        fn choose_location(&mut self, choices: &[Location]) -> Location {
            choices.choose(&mut self.rng).copied().unwrap_or_default()
        }
    }

}
