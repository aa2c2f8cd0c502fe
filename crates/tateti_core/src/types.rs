//! Core domain types for the tateti board.

use crate::position::Position;
use crate::rules::{self, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player one (starts the first match).
    P1,
    /// Player two (the AI side by default).
    P2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if nobody has marked this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board, cells in row-major order (0-8).
///
/// A marked cell never reverts to [`Cell::Empty`] except through [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at the given index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a named position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// True iff `index` is on the board and its cell is empty.
    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Marks `index` with `mark`.
    ///
    /// Out-of-range indices, occupied cells and an [`Cell::Empty`] mark are
    /// rejected silently: the board is left untouched. The return value only
    /// reports whether the mark was placed.
    pub fn make_move(&mut self, index: usize, mark: Cell) -> bool {
        if mark.is_empty() || !self.is_valid_move(index) {
            debug!(index, ?mark, "Move rejected");
            return false;
        }
        self.cells[index] = mark;
        true
    }

    /// Returns the first completed line in priority order.
    pub fn check_win(&self) -> Option<WinLine> {
        rules::check_win(&self.cells)
    }

    /// Returns the first completed line and who completed it.
    pub fn winner(&self) -> Option<(WinLine, Player)> {
        rules::winning_line(&self.cells)
    }

    /// True iff the board is full and nobody has a line.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(&self.cells)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Immutable copy of the nine cells.
    pub fn snapshot(&self) -> [Cell; 9] {
        self.cells
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => pos.to_string(),
                    Cell::Occupied(Player::P1) => "X".to_string(),
                    Cell::Occupied(Player::P2) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_marks_cell() {
        let mut board = Board::new();
        assert!(board.make_move(4, Cell::Occupied(Player::P1)));
        assert_eq!(board.cell(Position::Center), Cell::Occupied(Player::P1));
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_make_move_rejects_occupied() {
        let mut board = Board::new();
        board.make_move(4, Cell::Occupied(Player::P1));
        assert!(!board.make_move(4, Cell::Occupied(Player::P2)));
        assert_eq!(board.cell(Position::Center), Cell::Occupied(Player::P1));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        for i in 0..9 {
            board.make_move(i, Cell::Occupied(Player::P2));
        }
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.make_move(0, Cell::Occupied(Player::P1));
        board.make_move(8, Cell::Occupied(Player::P2));
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|O");
    }
}
