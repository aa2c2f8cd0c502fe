//! Easy and medium tiers.

use crate::position::Position;
use crate::rules::winning_line;
use crate::types::{Board, Cell, Player};
use rand::Rng;

/// Uniform random choice among the empty cells.
pub fn easy_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    let free = Position::valid_moves(board);
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

/// First empty cell (ascending index) that would complete a line for `player`.
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    let mut cells = board.snapshot();
    Position::ALL.into_iter().find(|pos| {
        let i = pos.to_index();
        if !cells[i].is_empty() {
            return false;
        }
        cells[i] = Cell::Occupied(player);
        let wins = winning_line(&cells).is_some_and(|(_, owner)| owner == player);
        cells[i] = Cell::Empty;
        wins
    })
}

/// Greedy tier: win, block, center, corner, then the first free cell.
pub fn medium_move(board: &Board, me: Player) -> Option<Position> {
    winning_move(board, me)
        .or_else(|| winning_move(board, me.opponent()))
        .or_else(|| board.cell(Position::Center).is_empty().then_some(Position::Center))
        .or_else(|| {
            Position::CORNERS
                .into_iter()
                .find(|pos| board.cell(*pos).is_empty())
        })
        .or_else(|| Position::valid_moves(board).first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for (i, p) in marks {
            board.make_move(*i, Cell::Occupied(*p));
        }
        board
    }

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let board = board_from(&[(0, Player::P1), (4, Player::P2), (8, Player::P1)]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let pos = easy_move(&board, &mut rng).expect("board has room");
            assert!(board.is_valid_move(pos.to_index()));
        }
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        // P2 can win on 5, P1 threatens 2.
        let board = board_from(&[
            (0, Player::P1),
            (3, Player::P2),
            (1, Player::P1),
            (4, Player::P2),
        ]);
        assert_eq!(medium_move(&board, Player::P2), Some(Position::MiddleRight));
    }

    #[test]
    fn test_medium_blocks() {
        let board = board_from(&[(0, Player::P1), (4, Player::P2), (1, Player::P1)]);
        assert_eq!(medium_move(&board, Player::P2), Some(Position::TopRight));
    }

    #[test]
    fn test_medium_takes_center_then_corner() {
        assert_eq!(medium_move(&Board::new(), Player::P2), Some(Position::Center));
        let board = board_from(&[(4, Player::P1)]);
        assert_eq!(medium_move(&board, Player::P2), Some(Position::TopLeft));
    }

    #[test]
    fn test_medium_falls_back_to_first_free() {
        // X X O / O O X / X _ O : no threats, center and corners taken.
        let board = board_from(&[
            (0, Player::P1),
            (1, Player::P1),
            (2, Player::P2),
            (3, Player::P2),
            (4, Player::P2),
            (5, Player::P1),
            (6, Player::P1),
            (8, Player::P2),
        ]);
        assert_eq!(medium_move(&board, Player::P1), Some(Position::BottomCenter));
    }
}
