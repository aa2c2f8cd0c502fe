//! Terminal host loop.
//!
//! Reads key presses, maps them onto the keypad, and hands the classified
//! action to the controller. Drawing happens from the [`TerminalView`] the
//! controller pushes into.

mod ui;
mod view;

pub use view::TerminalView;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tateti_core::{GameConfig, MatchController, Palette, classify};
use tracing::{debug, error, info, instrument};

use crate::keypad::key_for_char;

/// Runs the interactive game until the player quits.
pub fn run(config: GameConfig) -> Result<()> {
    info!("Starting tateti TUI");

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, config);
    ratatui::restore();

    if let Err(err) = &result {
        error!(error = ?err, "Game loop error");
    }
    result
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut DefaultTerminal, config: GameConfig) -> Result<()> {
    let mut controller = MatchController::new(config, TerminalView::new(), Palette::new());
    controller.refresh();

    loop {
        terminal.draw(|frame| ui::draw(frame, controller.renderer(), controller.colors()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => {
                info!("User quit");
                return Ok(());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("User interrupted");
                return Ok(());
            }
            KeyCode::Char(c) => match key_for_char(c) {
                Some(pad) => {
                    debug!(%pad, "Keypad press");
                    controller.dispatch(classify(pad));
                }
                None => debug!(%c, "Unmapped key"),
            },
            _ => {}
        }
    }
}
