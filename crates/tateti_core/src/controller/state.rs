//! Mutable match state owned by the controller.

use crate::action::Move;
use crate::settings::StartRule;
use crate::types::{Board, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use tracing::{debug, instrument, warn};

/// Match wins per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchScore {
    /// Player one's match wins.
    pub p1: u8,
    /// Player two's match wins.
    pub p2: u8,
}

impl MatchScore {
    /// Score of `player`.
    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        }
    }

    /// Adds one match win for `player`.
    pub fn increment(&mut self, player: Player) {
        match player {
            Player::P1 => self.p1 = self.p1.saturating_add(1),
            Player::P2 => self.p2 = self.p2.saturating_add(1),
        }
    }

    /// The player whose score has reached `threshold`, if any.
    pub fn reached(&self, threshold: NonZeroU8) -> Option<Player> {
        let threshold = threshold.get();
        if self.p1 >= threshold {
            Some(Player::P1)
        } else if self.p2 >= threshold {
            Some(Player::P2)
        } else {
            None
        }
    }

    /// Player with the higher score, `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.p1.cmp(&self.p2) {
            std::cmp::Ordering::Greater => Some(Player::P1),
            std::cmp::Ordering::Less => Some(Player::P2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Board, score and turn bookkeeping for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchState {
    /// The board of the current match.
    board: Board,
    /// Match wins so far.
    score: MatchScore,
    /// Player to move.
    current_player: Player,
    /// Player who opened the current match.
    starter: Player,
    /// Moves of the current match.
    history: Vec<Move>,
}

impl MatchState {
    /// Fresh state: empty board, zero score, player one to open.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            score: MatchScore::default(),
            current_player: Player::P1,
            starter: Player::P1,
            history: Vec::new(),
        }
    }

    /// Places `mov` on the board and passes the turn.
    ///
    /// Returns false, leaving everything untouched, if the cell is taken.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mov: Move) -> bool {
        if !self
            .board
            .make_move(mov.position.to_index(), Cell::Occupied(mov.player))
        {
            return false;
        }
        self.history.push(mov);
        self.current_player = mov.player.opponent();
        debug_assert!(self.history_consistent(), "History diverged from board");
        true
    }

    /// Adds a match win.
    pub fn record_win(&mut self, winner: Player) {
        self.score.increment(winner);
    }

    /// Clears the board for the next match, keeping the score.
    #[instrument(skip(self))]
    pub fn next_match(&mut self, rule: StartRule) {
        self.board.reset();
        self.history.clear();
        self.starter = match rule {
            StartRule::Alternate => self.starter.opponent(),
            StartRule::Fixed => Player::P1,
        };
        self.current_player = self.starter;
        debug!(starter = %self.starter, "Next match prepared");
    }

    /// Back to a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Every marked cell has exactly one history entry and vice versa.
    pub fn history_consistent(&self) -> bool {
        let consistent = self.board.filled() == self.history.len()
            && self.history.iter().all(|mov| {
                self.board.cell(mov.position) == Cell::Occupied(mov.player)
            });
        if !consistent {
            warn!(
                filled = self.board.filled(),
                history_len = self.history.len(),
                "History consistency violated"
            );
        }
        consistent
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
