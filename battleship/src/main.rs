//! Headless computer-vs-computer Battleship.
//!
//! Both fleets are auto-placed and each side is played by a targeting AI until one
//! sinks the other's fleet or the turn limit runs out.

use std::{error::Error, fs, process};

use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, error, info, warn};

use broadside::{
    ai::TargetingAi,
    board::ShotOutcome,
    config::{self, Configuration},
    game::{FireMode, Game, Player},
    placement::RandomPlacementGenerator,
};

mod logging;

fn main() {
    logging::init();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Plays a game of battleship between two computer players.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("read board size and ships from a configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .value_name("MODE")
                .help("rules for firing")
                .takes_value(true)
                .possible_values(FireMode::NAMES)
                .case_insensitive(true)
                .default_value("normal"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the random generator for a repeatable game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max_turns")
                .long("max-turns")
                .value_name("TURNS")
                .help("stop after this many turns without a winner")
                .takes_value(true)
                .default_value("10000"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = match matches.value_of("config") {
        Some(path) => load_config(path)?,
        None => Configuration::default(),
    };
    let mode = value_t!(matches, "mode", FireMode)?;
    let max_turns = value_t!(matches, "max_turns", usize)?;
    let mut generator = match matches.value_of("seed") {
        Some(_) => RandomPlacementGenerator::seeded(value_t!(matches, "seed", u64)?),
        None => RandomPlacementGenerator::default(),
    };

    let mut game = Game::setup(&config, mode, &mut generator)?;
    info!(
        "{} game on a {}x{} board with {} ships each",
        mode,
        config.board_width,
        config.board_height,
        config.ship_types.len()
    );

    let mut players = [Stats::default(), Stats::default()];
    while !game.is_over() && game.turn() <= max_turns {
        let player = game.current_player();
        let stats = &mut players[index(player)];
        let target = match stats.ai.choose_next_shot(game.target_board(), &mut generator) {
            Some(target) => target,
            None => {
                warn!("{} has nothing left to shoot at", player);
                break;
            }
        };
        let outcome = game.fire(target)?;
        debug!("{} fires at {}: {:?}", player, target, outcome);
        stats.record(&outcome);
    }

    match game.winner() {
        Some(winner) => println!("{} wins on turn {}", winner, game.turn()),
        None => println!("no winner after {} turns", game.turn()),
    }
    for &player in &[Player::One, Player::Two] {
        let stats = &players[index(player)];
        let afloat: Vec<_> = game
            .board(player)
            .remaining_ships()
            .iter()
            .map(|ship| ship.name().to_owned())
            .collect();
        println!(
            "{}: {} shots, {} hits, {} mines, ships afloat: {}",
            player,
            stats.shots,
            stats.hits,
            stats.mines,
            if afloat.is_empty() {
                "none".to_owned()
            } else {
                afloat.join(", ")
            }
        );
    }
    Ok(())
}

/// Read and validate a configuration file. Every problem in the file is logged.
fn load_config(path: &str) -> Result<Configuration, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let parsed = config::parse(&text);
    for problem in parsed.errors() {
        error!("{}: {}", path, problem);
    }
    Ok(parsed.into_result()?)
}

fn index(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

/// Per-player shooting record.
#[derive(Default)]
struct Stats {
    ai: TargetingAi,
    shots: usize,
    hits: usize,
    mines: usize,
}

impl Stats {
    fn record(&mut self, outcome: &ShotOutcome) {
        self.shots += 1;
        match outcome {
            ShotOutcome::Hit(_) | ShotOutcome::Sunk(_) => self.hits += 1,
            ShotOutcome::Mine { .. } => self.mines += 1,
            ShotOutcome::Miss => {}
        }
    }
}
