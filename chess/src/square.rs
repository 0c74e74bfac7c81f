//! A single board cell.

use crate::piece::Piece;
use crate::types::SquareColor;

const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Letter for a zero-based file index. Defined for the whole alphabet, though
/// only `0..8` appear on a standard board.
pub fn file_letter(file_index: usize) -> Option<char> {
    ALPHABET.get(file_index).copied()
}

/// Inverse of [`file_letter`].
pub fn file_index(letter: char) -> Option<usize> {
    ALPHABET.iter().position(|&c| c == letter)
}

/// A board cell with fixed coordinates and an optional occupant.
///
/// `rank_index` counts rows as stored: row 0 is rank 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    file_index: usize,
    rank_index: usize,
    color: SquareColor,
    occupant: Option<Piece>,
}

impl Square {
    pub fn new(file_index: usize, rank_index: usize) -> Self {
        Self {
            file_index,
            rank_index,
            color: SquareColor::at(file_index, rank_index),
            occupant: None,
        }
    }

    pub fn file_index(&self) -> usize {
        self.file_index
    }

    pub fn rank_index(&self) -> usize {
        self.rank_index
    }

    pub fn color(&self) -> SquareColor {
        self.color
    }

    /// File letter, e.g. `'a'` for file index 0.
    pub fn file(&self) -> char {
        file_letter(self.file_index).unwrap_or('?')
    }

    /// Rank number in standard notation (row 0 is rank 8).
    pub fn rank(&self) -> u8 {
        8u8.saturating_sub(self.rank_index as u8)
    }

    /// Algebraic name such as `e4`.
    pub fn name(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub fn piece(&self) -> Option<Piece> {
        self.occupant
    }

    pub fn set_piece(&mut self, piece: Option<Piece>) {
        self.occupant = piece;
    }

    /// Remove and return the occupant.
    pub fn take_piece(&mut self) -> Option<Piece> {
        self.occupant.take()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Color-scheme key: `(piece_color_bit << 1) | square_color_bit`.
    /// Empty squares use piece bit 0.
    pub fn color_key(&self) -> u8 {
        let piece_bit = self.occupant.map_or(0, Piece::color_bit);
        (piece_bit << 1) | self.color.bit()
    }
}
