//! Maps a QWERTY block onto the 4x4 keypad.
//!
//! ```text
//! 1 2 3 4      P0  P1  P2  P3
//! q w e r  ->  P4  P5  P6  P7
//! a s d f      P8  P9  P10 P11
//! z x c v      P12 P13 P14 P15
//! ```

use tateti_core::Key;

const LAYOUT: [[char; 4]; 4] = [
    ['1', '2', '3', '4'],
    ['q', 'w', 'e', 'r'],
    ['a', 's', 'd', 'f'],
    ['z', 'x', 'c', 'v'],
];

/// Keypad key bound to a terminal character, ignoring case.
pub fn key_for_char(c: char) -> Option<Key> {
    let c = c.to_ascii_lowercase();
    LAYOUT.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|k| *k == c)
            .and_then(|col| Key::at(row, col))
    })
}

/// Terminal character bound to a keypad key.
pub fn char_for_key(key: Key) -> char {
    let index = usize::from(key.code() - 1);
    LAYOUT[index / 4][index % 4]
}
