//! Tateti host: command line, terminal UI and headless simulation around
//! [`tateti_core::MatchController`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod keypad;
pub mod logging;
pub mod simulate;
pub mod tui;

pub use cli::{Cli, Command, GameArgs};
pub use simulate::{MAX_MATCHES_PER_GAME, SimulationReport, simulate};
