//! Player colour selection.
//!
//! The controller only forwards colour actions here; colours never feed back
//! into match logic.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An RGB triple as sent to the LED strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colour collaborator driven by the colour keys.
pub trait ColorSelector {
    /// Advances player one to the next colour.
    fn cycle_player1(&mut self);
    /// Advances player two to the next colour.
    fn cycle_player2(&mut self);
    /// Player one's current colour.
    fn player1_color(&self) -> Rgb;
    /// Player two's current colour.
    fn player2_color(&self) -> Rgb;
}

/// Colours the palette cycles through, dimmed for direct LED use.
pub const PALETTE: [(&str, Rgb); 7] = [
    ("red", Rgb::new(50, 0, 0)),
    ("green", Rgb::new(0, 50, 0)),
    ("blue", Rgb::new(0, 0, 50)),
    ("yellow", Rgb::new(50, 50, 0)),
    ("cyan", Rgb::new(0, 50, 50)),
    ("magenta", Rgb::new(50, 0, 50)),
    ("white", Rgb::new(30, 30, 30)),
];

/// Fixed-palette selector. Player one starts on red, player two on blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    player1: usize,
    player2: usize,
}

impl Palette {
    /// Creates the palette with default colours.
    pub fn new() -> Self {
        Self {
            player1: 0,
            player2: 2,
        }
    }

    /// Name of player one's colour.
    pub fn player1_name(&self) -> &'static str {
        PALETTE[self.player1].0
    }

    /// Name of player two's colour.
    pub fn player2_name(&self) -> &'static str {
        PALETTE[self.player2].0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSelector for Palette {
    #[instrument(skip(self))]
    fn cycle_player1(&mut self) {
        self.player1 = (self.player1 + 1) % PALETTE.len();
        debug!(color = self.player1_name(), "Player one colour changed");
    }

    #[instrument(skip(self))]
    fn cycle_player2(&mut self) {
        self.player2 = (self.player2 + 1) % PALETTE.len();
        debug!(color = self.player2_name(), "Player two colour changed");
    }

    fn player1_color(&self) -> Rgb {
        PALETTE[self.player1].1
    }

    fn player2_color(&self) -> Rgb {
        PALETTE[self.player2].1
    }
}
