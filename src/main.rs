//! Siliconopoly -- a two-player console board game.
//!
//! Runs an interactive game on the terminal, or a batch of random
//! self-play games with `--simulate`.
//!
//! Usage:
//!   siliconopoly [OPTIONS]
//!
//! Options:
//!   --config FILE   Load game settings from a JSON file
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --simulate N    Play N random games and print a summary
//!   --help          Show this help

use std::env;
use std::io::{self, Write};
use std::path::Path;

use siliconopoly::config::GameConfig;
use siliconopoly::game::Game;
use siliconopoly::input::StdInput;
use siliconopoly::sim::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = GameConfig::default();
    let mut seed_override: Option<u64> = None;
    let mut simulate: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--config requires a file path");
                    std::process::exit(1);
                }
                config = match GameConfig::load(Path::new(&args[i])) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                };
            }
            "--seed" => {
                i += 1;
                seed_override = match args.get(i).map(|v| v.parse::<u64>()) {
                    Some(Ok(v)) => Some(v),
                    _ => {
                        eprintln!("--seed requires an integer value");
                        std::process::exit(1);
                    }
                };
            }
            "--simulate" => {
                i += 1;
                simulate = match args.get(i).map(|v| v.parse::<usize>()) {
                    Some(Ok(v)) => Some(v),
                    _ => {
                        eprintln!("--simulate requires a game count");
                        std::process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(seed) = seed_override {
        config.seed = seed;
    }

    if let Some(games) = simulate {
        let sim_config = SimConfig {
            games,
            seed: config.seed,
            ..SimConfig::default()
        };
        let report = run_simulation(&sim_config);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report
            .print_summary(&mut out)
            .expect("failed to write to stdout");
        return;
    }

    let mut game = Game::new(&config);
    let mut input = StdInput::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = game.play(&mut input, &mut out) {
        let _ = out.flush();
        eprintln!("display error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: siliconopoly [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE   Load game settings from a JSON file");
    eprintln!("  --seed N        Random seed, 0 for entropy (default: 0)");
    eprintln!("  --simulate N    Play N random games and print a summary");
    eprintln!("  --help          Show this help");
}
