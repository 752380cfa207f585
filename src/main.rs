use log::info;
use std::env;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use caro::config::Config;
use caro::game::Game;
use caro::types::{Coord, GameMode};

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment
    // variable is set, we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let mode = match env::args().nth(1).as_deref() {
        Some("hvh") => GameMode::HumanVsHuman,
        Some("hvm") => GameMode::HumanVsMachine,
        Some("mvm") | None => GameMode::MachineVsMachine,
        Some(other) => {
            eprintln!("Unknown mode '{}'. Usage: caro [hvh|hvm|mvm]", other);
            std::process::exit(1);
        }
    };

    info!("Starting Caro ({:?})", mode);

    // Load configuration once at startup
    let config = Config::load_or_default();
    let delay = Duration::from_millis(config.pacing.machine_delay_ms);
    let mut game = Game::new(mode, config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", game.board());
        println!("{}", game.status_text());

        if game.status().is_over() {
            break;
        }

        if game.is_machine_turn() {
            // Cosmetic pacing so machine matches are watchable
            thread::sleep(delay);
            game.step_machine();
            continue;
        }

        print!("{} move (row col): ", game.current_mark().as_str());
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break, // stdin closed
        };

        match parse_move(&line) {
            Some(coord) => {
                if !game.play(coord) {
                    println!("Cell ({}, {}) is not playable", coord.row, coord.col);
                }
            }
            None => println!("Enter a move as: row col"),
        }
    }
}

/// Parses "row col" into a coordinate
fn parse_move(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row, col))
}
