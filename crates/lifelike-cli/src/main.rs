//! Command-line simulator for life-like cellular automata.
//!
//! Runs a rule over a board for a number of generations and prints each one.
//!
//! # Usage
//!
//! Simulate a random 10x10 board under Conway's Game of Life:
//!
//! ```sh
//! lifelike
//! ```
//!
//! Use a preset or a custom rule string:
//!
//! ```sh
//! lifelike --rule replicator
//! lifelike --rule B36S23
//! ```
//!
//! Read the initial board from a file of `0`/`1` rows (`-` reads stdin):
//!
//! ```sh
//! lifelike --board glider.txt --generations 20 --animate
//! ```
//!
//! Reproduce a random board:
//!
//! ```sh
//! lifelike --size 20x40 --density 0.3 --seed 1234
//! ```
//!
//! Set `RUST_LOG=info` to see the seed of a random board.

use std::{path::PathBuf, process::ExitCode, thread, time::Duration};

use clap::Parser;
use lifelike_core::{Preset, Simulator};

use self::{error::CliError, render::Renderer, size::BoardSize};

mod error;
mod render;
mod size;
mod source;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Preset name (life, replicator) or rule string such as B36S23.
    #[arg(short, long, value_name = "RULE", default_value = Preset::Life.name())]
    rule: String,

    /// File to read the initial board from; `-` reads stdin.
    #[arg(short, long, value_name = "PATH")]
    board: Option<PathBuf>,

    /// Size of the random board.
    #[arg(
        long,
        value_name = "ROWSxCOLS",
        default_value_t,
        conflicts_with = "board"
    )]
    size: BoardSize,

    /// Probability of each cell of the random board being alive.
    #[arg(
        long,
        value_name = "P",
        default_value_t = 0.5,
        conflicts_with = "board"
    )]
    density: f64,

    /// Seed for the random board.
    #[arg(long, value_name = "SEED", conflicts_with = "board")]
    seed: Option<u64>,

    /// Number of generations to simulate.
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    generations: usize,

    /// Pause between generations in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 250)]
    delay_ms: u64,

    /// Redraw each generation in place.
    #[arg(long)]
    animate: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let rule = source::resolve_rule(&args.rule)?;
    let board = if let Some(path) = &args.board {
        source::read_board(path)?
    } else {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!(
            "generating {} board with density {} and seed {seed}",
            args.size,
            args.density
        );
        source::random_board(args.size, args.density, seed)?
    };
    log::debug!("simulating {rule:?} on {} live cells", board.live_count());

    let delay = Duration::from_millis(args.delay_ms);
    let mut renderer = Renderer::new(std::io::stdout().lock(), args.animate);
    renderer.header(&rule, args.generations, args.delay_ms)?;
    renderer.frame(0, &board)?;

    let simulator = Simulator::new(rule);
    let generations = simulator.generations(&board).take(args.generations);
    for (generation, board) in (1..).zip(generations) {
        thread::sleep(delay);
        renderer.frame(generation, &board)?;
    }
    Ok(())
}
