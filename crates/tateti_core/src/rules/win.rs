//! Win detection.

use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// One of the eight winning lines.
///
/// Variants are declared in scan priority order: when a single move completes
/// several lines, the earliest one here is reported.
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
pub enum WinLine {
    /// Cells 0, 1, 2.
    Row0,
    /// Cells 3, 4, 5.
    Row1,
    /// Cells 6, 7, 8.
    Row2,
    /// Cells 0, 3, 6.
    Col0,
    /// Cells 1, 4, 7.
    Col1,
    /// Cells 2, 5, 8.
    Col2,
    /// Cells 0, 4, 8.
    DiagMain,
    /// Cells 2, 4, 6.
    DiagAnti,
}

impl WinLine {
    /// All lines in priority order.
    pub const ALL: [WinLine; 8] = [
        WinLine::Row0,
        WinLine::Row1,
        WinLine::Row2,
        WinLine::Col0,
        WinLine::Col1,
        WinLine::Col2,
        WinLine::DiagMain,
        WinLine::DiagAnti,
    ];

    /// The three cell indices forming this line.
    pub fn cells(self) -> [usize; 3] {
        match self {
            WinLine::Row0 => [0, 1, 2],
            WinLine::Row1 => [3, 4, 5],
            WinLine::Row2 => [6, 7, 8],
            WinLine::Col0 => [0, 3, 6],
            WinLine::Col1 => [1, 4, 7],
            WinLine::Col2 => [2, 5, 8],
            WinLine::DiagMain => [0, 4, 8],
            WinLine::DiagAnti => [2, 4, 6],
        }
    }

    /// True if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.cells().contains(&index)
    }
}

/// Returns the first completed line in priority order, with its owner.
pub fn winning_line(cells: &[Cell; 9]) -> Option<(WinLine, Player)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let player = cells[a].player()?;
        (cells[a] == cells[b] && cells[b] == cells[c]).then_some((line, player))
    })
}

/// Returns the first completed line in priority order.
pub fn check_win(cells: &[Cell; 9]) -> Option<WinLine> {
    winning_line(cells).map(|(line, _)| line)
}
