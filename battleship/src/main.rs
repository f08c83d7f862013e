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
use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{value_t, App, Arg, ArgMatches};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    actor::{Actor, InputReader, RandomShooter},
    config::{GameConfig, MAX_DIMENSION},
    game::TurnError,
    setup::FleetPlacer,
    Side, TurnResolver,
};

mod logging;

/// Line printed between sections of the game output.
const SEPARATOR: &str = "--------------------";

fn main() -> anyhow::Result<()> {
    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line Sea Battle against the computer.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("number of cells along each side of the boards")
                .takes_value(true)
                .default_value("6")
                .validator(validate_size),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for fleet placement and computer shots, for repeatable games")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("first")
                .short("f")
                .long("first")
                .value_name("FIRST")
                .help("pre-specify which side shoots first")
                .takes_value(true)
                .possible_values(&["player", "human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("autoplay")
                .long("autoplay")
                .help("let the computer play the human's side as well"),
        )
        .get_matches();

    logging::init(LevelFilter::Warn);

    let config = config_from_args(&matches);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let first = choose_first(&matches, &mut rng);
    info!("starting {0}x{0} game, {1} shoots first", config.dimension, first);

    let placer = FleetPlacer::from_config(&config).context("invalid game settings")?;
    let mut player_grid = placer
        .place(Side::Player, &mut rng)
        .context("could not place the player's fleet")?;
    let mut computer_grid = placer
        .place(Side::Computer, &mut rng)
        .context("could not place the computer's fleet")?;

    let dim = player_grid.dimensions();
    let stdin = io::stdin();
    let mut player = if matches.is_present("autoplay") {
        Actor::Automated(RandomShooter::new(
            Side::Player,
            dim,
            StdRng::from_rng(&mut rng)?,
        ))
    } else {
        Actor::Human(InputReader::new(stdin.lock(), io::stdout()))
    };
    let mut computer = Actor::Automated(RandomShooter::new(
        Side::Computer,
        dim,
        StdRng::from_rng(&mut rng)?,
    ));

    greeting();

    let mut turns = TurnResolver::new(&mut player_grid, &mut computer_grid, first);
    let winner = match play(&mut turns, &mut player, &mut computer) {
        Ok(winner) => winner,
        Err(err) if is_end_of_input(&err) => return Ok(()),
        Err(err) => return Err(err),
    };

    println!("{}", SEPARATOR);
    println!("{} won!", winner);
    show_boards(&turns, true);
    info!("game finished after {} shots", turns.shots_fired());
    Ok(())
}

/// Check that the board size is a number the text interface can draw.
fn validate_size(size: String) -> Result<(), String> {
    match size.parse::<usize>() {
        Ok(n) if (1..=MAX_DIMENSION).contains(&n) => Ok(()),
        Ok(n) => Err(format!("size must be in range [1,{}], got {}", MAX_DIMENSION, n)),
        Err(_) => Err(format!("invalid size: {}", size)),
    }
}

/// Build the game settings from the command line.
fn config_from_args(matches: &ArgMatches) -> GameConfig {
    let mut config = GameConfig::default();
    config.dimension = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    if matches.is_present("seed") {
        config.seed = Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()));
    }
    config
}

/// Choose which [`Side`] shoots first. The human goes first unless told otherwise.
fn choose_first(matches: &ArgMatches, rng: &mut StdRng) -> Side {
    use rand::Rng;

    match matches.value_of("first").map(str::to_ascii_lowercase).as_deref() {
        Some("computer") | Some("bot") => Side::Computer,
        Some("random") | Some("rand") => rng.gen(),
        _ => Side::Player,
    }
}

fn greeting() {
    println!("{}", SEPARATOR);
    println!("       Welcome      ");
    println!("    to Sea Battle   ");
    println!("        Game        ");
    println!("{}", SEPARATOR);
    println!("  Shoot by typing:  ");
    println!("      row col       ");
}

/// Run turns until one side has no vessels left, returning the winner.
fn play<B: BufRead, W: Write>(
    turns: &mut TurnResolver,
    player: &mut Actor<B, W>,
    computer: &mut Actor<B, W>,
) -> anyhow::Result<Side> {
    loop {
        show_boards(turns, false);
        let side = turns.current();
        println!("{}", SEPARATOR);
        println!("{} turn", side);
        let actor = match side {
            Side::Player => &mut *player,
            Side::Computer => &mut *computer,
        };

        let report = loop {
            let coord = actor.request()?;
            if !actor.is_human() {
                println!("{} turn: {} {}", side, coord.y + 1, coord.x + 1);
            }
            match turns.execute_turn(side, coord) {
                Ok(report) => break report,
                Err(TurnError::Shot(err)) => println!("{}", err.reason()),
                Err(err) => return Err(err.into()),
            }
        };
        println!("{}", report.outcome);
        if let Some(winner) = report.winner {
            return Ok(winner);
        }
    }
}

/// Print both boards. The computer's vessels are only drawn when `reveal_all` is set.
fn show_boards(turns: &TurnResolver, reveal_all: bool) {
    println!("{}", SEPARATOR);
    println!("Player board:");
    println!("{}", turns.grid(Side::Player).view(true));
    println!("{}", SEPARATOR);
    println!("Computer board:");
    println!("{}", turns.grid(Side::Computer).view(reveal_all));
}

/// Whether the error was caused by the player closing the input.
fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map_or(false, |err| err.kind() == io::ErrorKind::UnexpectedEof)
}
