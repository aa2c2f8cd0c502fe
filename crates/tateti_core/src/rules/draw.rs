//! Draw detection.

use super::win::check_win;
use crate::types::Cell;

/// Checks if every cell is occupied.
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

/// A full board with no winning line.
pub fn is_draw(cells: &[Cell; 9]) -> bool {
    check_win(cells).is_none() && is_full(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    const X: Cell = Cell::Occupied(Player::P1);
    const O: Cell = Cell::Occupied(Player::P2);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&[E, E, E, E, X, E, E, E, E]));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&[X, O, X, O, X, X, O, X, O]));
    }

    #[test]
    fn test_not_draw_if_winner_on_full_board() {
        // X X X / O O X / O X O
        let cells = [X, X, X, O, O, X, O, X, O];
        assert!(is_full(&cells));
        assert!(!is_draw(&cells));
    }
}
