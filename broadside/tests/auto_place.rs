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
mod common;

use broadside::board::{setup::MAX_TRIALS, Board};
use broadside::ships::{Orientation::*, ShipType};

use common::{loc, ScriptedGenerator};

fn fleet() -> Vec<ShipType> {
    vec![
        ShipType::new("Carrier", 5),
        ShipType::new("Battleship", 4),
        ShipType::new("Destroyer", 3),
        ShipType::new("Submarine", 3),
        ShipType::new("Patrol Boat", 2),
    ]
}

#[test]
fn places_every_ship_from_the_script() {
    let mut board = Board::new(10, 10);
    let mut generator = ScriptedGenerator::new()
        .orientations(&[Vertical, Horizontal, Vertical, Horizontal, Vertical])
        .locations(&["A1", "D1", "B1", "D2", "C1"])
        .expect_board(10, 10);
    board.auto_place(&fleet(), &mut generator).unwrap();

    assert_eq!(generator.location_calls, 5);
    assert_eq!(generator.orientation_calls, 5);
    assert_eq!(board.placed_ship_count(), 5);
    let expected = [
        ("Carrier", "A1", Vertical),
        ("Battleship", "D1", Horizontal),
        ("Destroyer", "B1", Vertical),
        ("Submarine", "D2", Horizontal),
        ("Patrol Boat", "C1", Vertical),
    ];
    for &(name, anchor, orientation) in &expected {
        assert_eq!(board.anchor(name), Some(loc(anchor)), "{}", name);
        assert_eq!(board.boat_at(loc(anchor)).unwrap().orientation(), orientation);
    }
    assert_eq!(board.boat_at(loc("A5")).unwrap().name(), "Carrier");
    assert_eq!(board.boat_at(loc("G1")).unwrap().name(), "Battleship");
    assert_eq!(board.boat_at(loc("C2")).unwrap().name(), "Patrol Boat");
    assert!(board.boat_at(loc("A6")).is_none());
}

#[test]
fn retries_after_an_overlap() {
    let mut board = Board::new(5, 5);
    let ships = [ShipType::new("Sub", 3), ShipType::new("Tug", 2)];
    // The first trial puts both ships on row 1 where they overlap.
    let mut generator = ScriptedGenerator::new()
        .orientations(&[Horizontal])
        .locations(&["A1", "B1", "A1", "A2"]);
    board.auto_place(&ships, &mut generator).unwrap();
    assert_eq!(generator.location_calls, 4);
    assert_eq!(board.anchor("Sub"), Some(loc("A1")));
    assert_eq!(board.anchor("Tug"), Some(loc("A2")));
}

#[test]
fn keeps_ships_already_on_the_board() {
    let mut board = Board::new(5, 5);
    board
        .add_ship(&ShipType::new("Raft", 1), loc("E5"), Horizontal)
        .unwrap();
    let mut generator = ScriptedGenerator::new()
        .orientations(&[Vertical])
        .locations(&["A1"]);
    board
        .auto_place(&[ShipType::new("Sub", 3)], &mut generator)
        .unwrap();
    assert_eq!(board.placed_ship_count(), 2);
    assert_eq!(board.anchor("Raft"), Some(loc("E5")));
}

#[test]
fn gives_up_after_max_trials() {
    let mut board = Board::new(5, 1);
    let original = board.clone();
    let ships = [ShipType::new("Battleship", 5), ShipType::new("Carrier", 5)];
    let mut generator = ScriptedGenerator::new()
        .orientations(&[Horizontal])
        .locations(&["A1"])
        .expect_board(5, 1);

    let err = board.auto_place(&ships, &mut generator).unwrap_err();
    assert_eq!(err.trials(), MAX_TRIALS);
    assert_eq!(generator.location_calls, MAX_TRIALS * ships.len());
    assert_eq!(generator.orientation_calls, MAX_TRIALS * ships.len());
    assert_eq!(board.placed_ship_count(), 0);
    assert_eq!(board, original);
}

#[test]
fn out_of_bounds_suggestions_are_rejected() {
    let mut board = Board::new(5, 5);
    let mut generator = ScriptedGenerator::new()
        .orientations(&[Horizontal])
        .locations(&["Z9", "D1", "A1"]);
    board
        .auto_place(&[ShipType::new("Sub", 3)], &mut generator)
        .unwrap();
    assert_eq!(generator.location_calls, 3);
    assert_eq!(board.anchor("Sub"), Some(loc("A1")));
}
