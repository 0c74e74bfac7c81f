//! Piece-placement field of Forsyth-Edwards Notation.
//!
//! Only the first FEN field is decoded and encoded here. Callers holding a full
//! six-field FEN can split it with [`placement_field`] and [`active_color`].

use crate::board::{Board, BOARD_SIZE};
use crate::piece::Piece;
use crate::types::PieceColor;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FenError {
    #[error("Malformed FEN: {0}")]
    MalformedFormat(String),
    #[error("Unknown piece symbol: {0}")]
    UnknownPieceSymbol(char),
    #[error("Square index out of range: file {file}, rank {rank}")]
    SquareIndexOutOfRange { file: usize, rank: usize },
}

/// First whitespace-separated field of a FEN string.
pub fn placement_field(fen: &str) -> Result<&str, FenError> {
    fen.split_whitespace()
        .next()
        .ok_or_else(|| FenError::MalformedFormat("empty FEN string".to_string()))
}

/// Side to move from the second FEN field, if present and valid.
pub fn active_color(fen: &str) -> Option<PieceColor> {
    fen.split_whitespace()
        .nth(1)
        .and_then(PieceColor::from_fen_field)
}

/// Populate `board` from a piece-placement string.
///
/// Digits advance the file cursor by their value. Squares not named by the
/// string are left empty. On error `board` is left unchanged.
pub fn decode(placement: &str, board: &mut Board) -> Result<(), FenError> {
    let groups: Vec<&str> = placement.split('/').collect();
    if groups.len() != BOARD_SIZE {
        return Err(FenError::MalformedFormat(format!(
            "expected {} rank groups, found {}",
            BOARD_SIZE,
            groups.len()
        )));
    }

    let mut decoded = Board::new();
    for (rank, group) in groups.iter().enumerate() {
        let mut file = 0usize;
        for c in group.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=BOARD_SIZE as u32).contains(&skip) {
                    return Err(FenError::MalformedFormat(format!(
                        "empty run of {} in rank group {:?}",
                        skip, group
                    )));
                }
                file += skip as usize;
                if file > BOARD_SIZE {
                    return Err(FenError::SquareIndexOutOfRange { file: file - 1, rank });
                }
            } else if c.is_ascii_alphabetic() {
                let piece = Piece::from_fen_char(c).ok_or(FenError::UnknownPieceSymbol(c))?;
                decoded
                    .set_piece(file, rank, Some(piece))
                    .map_err(|_| FenError::SquareIndexOutOfRange { file, rank })?;
                file += 1;
            } else {
                return Err(FenError::MalformedFormat(format!(
                    "unexpected character {:?}",
                    c
                )));
            }
        }
        tracing::trace!(rank, group, "decoded rank group");
    }

    *board = decoded;
    tracing::debug!(placement, "decoded FEN placement");
    Ok(())
}

/// Piece-placement string for `board`, run-length encoding empty squares.
pub fn encode(board: &Board) -> String {
    let groups: Vec<String> = board
        .rows()
        .map(|row| {
            let mut group = String::new();
            let mut empty = 0u32;
            for square in row {
                match square.piece() {
                    Some(piece) => {
                        if empty > 0 {
                            group.push_str(&empty.to_string());
                            empty = 0;
                        }
                        group.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                group.push_str(&empty.to_string());
            }
            group
        })
        .collect();

    let placement = groups.join("/");
    tracing::debug!(placement = %placement, "encoded FEN placement");
    placement
}
