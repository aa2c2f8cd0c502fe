//! Tiered move selection.
//!
//! Every tier works on an immutable copy of the board; the engine never
//! retains a board between calls.

mod heuristic;
mod minimax;

pub use heuristic::{easy_move, medium_move, winning_move};
pub use minimax::{hard_move, minimax};

use crate::position::Position;
use crate::settings::Difficulty;
use crate::types::{Board, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Computes moves for the AI side.
#[derive(Debug, Clone)]
pub struct AiEngine {
    rng: StdRng,
}

impl AiEngine {
    /// Creates an engine seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an engine with a reproducible random sequence.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a move for `me` at the given tier.
    ///
    /// The returned position is always empty on `board`. Returns `None` only
    /// when the board is full.
    #[instrument(skip(self, board), fields(filled = board.filled()))]
    pub fn calculate_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        me: Player,
    ) -> Option<Position> {
        let choice = match difficulty {
            Difficulty::Easy => easy_move(board, &mut self.rng),
            Difficulty::Medium => medium_move(board, me),
            Difficulty::Hard => hard_move(board, me),
        };
        debug!(?choice, %difficulty, %me, "AI chose position");
        choice
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
