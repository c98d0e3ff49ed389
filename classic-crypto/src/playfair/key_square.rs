//! The 5×5 Playfair key square.

use crate::preset::alphabet::{SQUARE_ALPHABET, letter_value};

use itertools::Itertools;
use serde::Serialize;

use std::fmt;

pub const SQUARE_SIZE: usize = 5;

/// I and J share one cell of the square.
pub fn merge_j(ch: char) -> char {
    if ch == 'J' { 'I' } else { ch }
}

/// A permutation of A-Z without J laid out row-major in a 5×5 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeySquare {
    grid: [[char; SQUARE_SIZE]; SQUARE_SIZE],
    /// Row and column of every letter; J points at the cell of I.
    positions: [(usize, usize); 26],
}

impl KeySquare {
    /// Key letters first (deduplicated, in order of first occurrence), then
    /// the rest of the alphabet. Characters that are not ASCII letters are
    /// ignored.
    ///
    /// ```
    /// # use classic_crypto::playfair::KeySquare;
    /// let square = KeySquare::new("playfair example");
    /// assert_eq!(square.row(0), ['P', 'L', 'A', 'Y', 'F']);
    /// assert_eq!(square.locate('J'), square.locate('I'));
    /// ```
    pub fn new(key: &str) -> Self {
        let order: Vec<char> = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| merge_j(ch.to_ascii_uppercase()))
            .chain(SQUARE_ALPHABET.chars())
            .unique()
            .collect();

        let mut grid = [['A'; SQUARE_SIZE]; SQUARE_SIZE];
        let mut positions = [(0usize, 0usize); 26];

        for (i, &ch) in order.iter().enumerate() {
            let (row, col) = (i / SQUARE_SIZE, i % SQUARE_SIZE);
            grid[row][col] = ch;
            positions[slot(ch)] = (row, col);
        }
        positions[slot('J')] = positions[slot('I')];

        log::trace!("key square for {:?}: {}", key, order.iter().collect::<String>());

        Self { grid, positions }
    }

    /// Row and column of a letter, or `None` when `ch` is not an ASCII letter.
    pub fn locate(&self, ch: char) -> Option<(usize, usize)> {
        letter_value(ch).map(|value| self.positions[value as usize])
    }

    /// Letter at the given cell; both coordinates wrap around.
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.grid[row % SQUARE_SIZE][col % SQUARE_SIZE]
    }

    pub fn row(&self, row: usize) -> [char; SQUARE_SIZE] {
        self.grid[row % SQUARE_SIZE]
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flatten().copied()
    }

    /// Position of an uppercase ASCII letter already known to be in range.
    pub(crate) fn position(&self, letter: char) -> (usize, usize) {
        self.positions[slot(letter)]
    }
}

impl Default for KeySquare {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

fn slot(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}
