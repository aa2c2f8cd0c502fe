//! Tateti - keypad tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tateti::{Cli, Command, logging, simulate, tui};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play);

    match &command {
        Command::Play => {
            let path = cli.game.log_file.as_deref().unwrap_or(Path::new("tateti.log"));
            logging::init_file(path)?;
        }
        Command::Simulate { .. } => match cli.game.log_file.as_deref() {
            Some(path) => logging::init_file(path)?,
            None => logging::init_stderr(),
        },
    }

    let config = cli.game.resolve()?;
    info!(?command, "Starting tateti");

    match command {
        Command::Play => tui::run(config),
        Command::Simulate { games, opponent } => {
            let report = simulate(config, games, opponent)?;
            println!("{report}");
            Ok(())
        }
    }
}
