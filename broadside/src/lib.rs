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
//! Rules engine for Battleship.
//!
//! A [`Board`](board::Board) holds one player's fleet along with the shots fired at it
//! and any hidden mines. Fleets are placed by hand or by the
//! [`AutoPlacer`](board::setup::AutoPlacer), which draws positions from a
//! [`PlacementGenerator`](placement::PlacementGenerator). The
//! [`TargetingAi`](ai::TargetingAi) picks shots against an opponent's board, and
//! [`Game`](game::Game) runs a two-player match under one of several
//! [`FireMode`](game::FireMode)s. Game settings can be read from text with
//! [`config::parse`].
//!
//! The library reports diagnostics through the `log` facade and never installs a
//! logger itself.

pub mod ai;
pub mod board;
pub mod config;
pub mod game;
pub mod placement;
pub mod ships;
