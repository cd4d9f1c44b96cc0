mod config;
mod console;
mod results;

use std::{env, process::ExitCode};

use hanami_core::error::GameError;
use log::{debug, warn};

use crate::console::ConsoleInterface;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: ./hanami <config file>");
        return ExitCode::from(1);
    }

    let setup = match config::parse(&args[1]) {
        Ok(setup) => setup,
        Err(error) => {
            println!("{}", error);
            return ExitCode::from(error.exit_code());
        }
    };
    debug!(
        "parsed {} cards for {} players from {}",
        setup.deck.len(),
        setup.player_count,
        setup.path.display()
    );

    println!(
        "Welcome to Hanami ({} players are playing)!",
        setup.player_count
    );

    match hanami_core::run_game(setup.player_count, &setup.deck, ConsoleInterface::new()) {
        Ok(Some(scoreboard)) => {
            if let Err(error) = results::append(&setup.path, &scoreboard) {
                warn!("cannot append results to {}: {}", setup.path.display(), error);
                println!("Warning: Results not written to file!");
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(GameError::Setup(error)) => {
            println!("Error: {}", error);
            ExitCode::from(2)
        }
        Err(GameError::Fatal(error)) => {
            println!("Error: {}", error);
            ExitCode::from(4)
        }
    }
}
