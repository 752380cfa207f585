// Standalone replay tool for analyzing recorded Caro games
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --compare <seat>:<engine>  Re-run an engine on one seat's recorded
//                              positions (e.g. x:minimax, o:priority)
//   --config <path>            Path to Caro.toml (default: Caro.toml)

use std::env;
use std::process;

use caro::config::Config;
use caro::replay::ReplayEngine;
use caro::types::{EngineKind, Mark};

fn print_usage() {
    eprintln!("Caro Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --compare <seat>:<engine>  Re-run an engine over one seat's moves");
    eprintln!("                             (seat: x|o, engine: minimax|priority)");
    eprintln!("  --config <path>            Path to Caro.toml (default: Caro.toml)");
    eprintln!("  --help                     Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Verify a recorded game move by move");
    eprintln!("  replay caro_games.jsonl");
    eprintln!();
    eprintln!("  # Check how often minimax reproduces X's recorded moves");
    eprintln!("  replay caro_games.jsonl --compare x:minimax");
}

fn parse_compare(s: &str) -> Result<(Mark, EngineKind), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid format '{}'. Expected 'seat:engine'", s));
    }
    let mark = match parts[0].to_lowercase().as_str() {
        "x" => Mark::X,
        "o" => Mark::O,
        other => return Err(format!("Invalid seat: {}", other)),
    };
    let kind = match parts[1].to_lowercase().as_str() {
        "minimax" => EngineKind::Minimax,
        "priority" => EngineKind::Priority,
        other => return Err(format!("Invalid engine: {}", other)),
    };
    Ok((mark, kind))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(if args.contains(&"--help".to_string()) {
            0
        } else {
            1
        });
    }

    let log_file = &args[1];
    let mut compare: Option<(Mark, EngineKind)> = None;
    let mut config_path = "Caro.toml".to_string();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--compare" => {
                i += 1;
                let spec = match args.get(i) {
                    Some(spec) => spec,
                    None => {
                        eprintln!("--compare requires an argument");
                        process::exit(1);
                    }
                };
                match parse_compare(spec) {
                    Ok(parsed) => compare = Some(parsed),
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = path.clone(),
                    None => {
                        eprintln!("--config requires an argument");
                        process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match Config::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {} - using hardcoded defaults", e);
            Config::default_hardcoded()
        }
    };

    let engine = ReplayEngine::new(config);
    let records = match engine.load_log_file(log_file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to load {}: {}", log_file, e);
            process::exit(1);
        }
    };
    println!("Loaded {} move records from {}", records.len(), log_file);

    match engine.verify(&records) {
        Ok(status) => println!("Game verifies; final status: {:?}", status),
        Err(e) => {
            eprintln!("Verification failed: {}", e);
            process::exit(1);
        }
    }

    if let Some((mark, kind)) = compare {
        match engine.compare_engine(&records, mark, kind) {
            Ok(stats) => {
                println!(
                    "{} on seat {}: {}/{} moves reproduced ({:.1}%)",
                    kind.as_str(),
                    mark.as_str(),
                    stats.matches,
                    stats.total_moves,
                    stats.match_rate
                );
            }
            Err(e) => {
                eprintln!("Comparison failed: {}", e);
                process::exit(1);
            }
        }
    }
}
