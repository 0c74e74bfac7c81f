//! Parsing of the piece and destination selectors typed at the prompt.
//!
//! A piece selector is a FEN letter followed by a square, e.g. `pe2` or `Ng1`.
//! A destination is a bare square such as `e4`, or the cancel token `ca`.

use crate::board::Board;
use crate::types::{PieceColor, PieceKind};

pub const CANCEL_TOKEN: &str = "ca";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Nothing selected.")]
    Empty,
    #[error("Not a correct piece selection. Please select from these options: {}", piece_options())]
    InvalidPiece,
    #[error("Not a correct file selection. Please select from these options: {}", join(.0))]
    InvalidFile(Vec<char>),
    #[error("Not a correct rank selection. Please select from these options: {}", join(.0))]
    InvalidRank(Vec<u8>),
    #[error("No {kind} to select on {square}")]
    PieceMismatch { kind: String, square: String },
}

fn piece_options() -> String {
    join(&PieceKind::ALL.map(PieceKind::to_char_lower))
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Algebraic square reference, validated against a board's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRef {
    pub file: char,
    pub rank: u8,
}

impl SquareRef {
    fn parse(
        mut chars: impl Iterator<Item = char>,
        files: &[char],
        ranks: &[u8],
    ) -> Result<Self, SelectorError> {
        let file = chars
            .next()
            .filter(|c| files.contains(c))
            .ok_or_else(|| SelectorError::InvalidFile(files.to_vec()))?;
        let rank = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .filter(|r| ranks.contains(r))
            .ok_or_else(|| SelectorError::InvalidRank(ranks.to_vec()))?;
        Ok(Self { file, rank })
    }

    pub fn locate(&self, board: &Board) -> Result<(usize, usize), crate::board::BoardError> {
        board.locate(self.file, self.rank)
    }
}

impl std::fmt::Display for SquareRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// A piece kind on a square. An uppercase letter restricts the match to White.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSelector {
    pub kind: PieceKind,
    pub color: Option<PieceColor>,
    pub square: SquareRef,
}

impl PieceSelector {
    /// Parse input such as `pe2`. Characters after the square are ignored.
    pub fn parse(input: &str, files: &[char], ranks: &[u8]) -> Result<Self, SelectorError> {
        let mut chars = input.trim().chars();
        let letter = chars.next().ok_or(SelectorError::Empty)?;
        let kind = PieceKind::from_char(letter).ok_or(SelectorError::InvalidPiece)?;
        let color = letter.is_ascii_uppercase().then_some(PieceColor::White);
        let square = SquareRef::parse(chars, files, ranks)?;
        Ok(Self { kind, color, square })
    }

    /// Stored coordinates of the selected square, provided it holds the selected piece.
    pub fn resolve(&self, board: &Board) -> Result<(usize, usize), SelectorError> {
        let mismatch = || SelectorError::PieceMismatch {
            kind: self.kind.to_char_lower().to_string(),
            square: self.square.to_string(),
        };
        let (file, rank) = self.square.locate(board).map_err(|_| mismatch())?;
        let piece = board.get_piece(file, rank).map_err(|_| mismatch())?;
        match piece {
            Some(p) if p.kind == self.kind && self.color.map_or(true, |c| c == p.color) => {
                Ok((file, rank))
            }
            _ => Err(mismatch()),
        }
    }
}

/// Target square, or a request to abandon the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationSelector {
    Square(SquareRef),
    Cancel,
}

impl DestinationSelector {
    pub fn parse(input: &str, files: &[char], ranks: &[u8]) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.starts_with(CANCEL_TOKEN) {
            return Ok(Self::Cancel);
        }
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        SquareRef::parse(input.chars(), files, ranks).map(Self::Square)
    }
}
