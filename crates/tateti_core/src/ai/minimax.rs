//! Hard tier: exhaustive minimax.
//!
//! Terminal scores are +10 for an AI line and -10 for an opponent line,
//! pulled toward zero by search depth so quicker wins and slower losses rank
//! higher. Children are explored in ascending index order and only a strictly
//! better score replaces the incumbent, so ties go to the lowest index.

use crate::position::Position;
use crate::rules::{is_full, winning_line};
use crate::types::{Board, Cell, Player};
use tracing::trace;

const WIN_SCORE: i32 = 10;

/// Best move for `me`, or `None` on a full board.
pub fn hard_move(board: &Board, me: Player) -> Option<Position> {
    let mut cells = board.snapshot();
    let mut best: Option<(i32, usize)> = None;
    for i in 0..cells.len() {
        if !cells[i].is_empty() {
            continue;
        }
        cells[i] = Cell::Occupied(me);
        let score = minimax(&mut cells, 0, false, me);
        cells[i] = Cell::Empty;
        trace!(index = i, score, "Root child scored");
        if best.is_none_or(|(incumbent, _)| score > incumbent) {
            best = Some((score, i));
        }
    }
    best.and_then(|(_, i)| Position::from_index(i))
}

/// Scores `cells` from `me`'s point of view.
///
/// `maximizing` is true when `me` is to move. Cells are restored before
/// returning.
pub fn minimax(cells: &mut [Cell; 9], depth: i32, maximizing: bool, me: Player) -> i32 {
    if let Some((_, owner)) = winning_line(cells) {
        let score = if owner == me { WIN_SCORE } else { -WIN_SCORE };
        return score - depth * score.signum();
    }
    if is_full(cells) {
        return 0;
    }

    let mover = if maximizing { me } else { me.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for i in 0..cells.len() {
        if !cells[i].is_empty() {
            continue;
        }
        cells[i] = Cell::Occupied(mover);
        let value = minimax(cells, depth + 1, !maximizing, me);
        cells[i] = Cell::Empty;
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}
