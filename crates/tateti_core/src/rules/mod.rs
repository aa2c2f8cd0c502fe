//! Board rules.
//!
//! Pure functions over the nine cells, kept apart from board storage so the
//! AI search can run them on scratch copies.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, check_win, winning_line};
