//! The 8x8 board and its oriented views.

use crate::piece::Piece;
use crate::square::{file_index, Square};
use crate::types::PieceColor;

pub const BOARD_SIZE: usize = 8;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square index out of range: file {file}, rank {rank}")]
    SquareIndexOutOfRange { file: usize, rank: usize },
    #[error("No square named {file}{rank}")]
    UnknownSquare { file: char, rank: u8 },
    #[error("No piece on {0}")]
    EmptySquare(String),
}

/// An 8x8 grid indexed `[rank_index][file_index]`; row 0 is rank 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with every square empty.
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(|rank| std::array::from_fn(|file| Square::new(file, rank))),
        }
    }

    /// Build a board from a piece-placement string.
    pub fn from_fen(placement: &str) -> Result<Self, crate::fen::FenError> {
        let mut board = Self::new();
        crate::fen::decode(placement, &mut board)?;
        Ok(board)
    }

    /// File letters in column order.
    pub fn files(&self) -> Vec<char> {
        self.squares[0].iter().map(Square::file).collect()
    }

    /// Rank numbers, ascending.
    pub fn ranks(&self) -> Vec<u8> {
        (1..=BOARD_SIZE as u8).collect()
    }

    pub fn get_square(&self, file: usize, rank: usize) -> Result<&Square, BoardError> {
        self.squares
            .get(rank)
            .and_then(|row| row.get(file))
            .ok_or(BoardError::SquareIndexOutOfRange { file, rank })
    }

    pub fn get_square_mut(&mut self, file: usize, rank: usize) -> Result<&mut Square, BoardError> {
        self.squares
            .get_mut(rank)
            .and_then(|row| row.get_mut(file))
            .ok_or(BoardError::SquareIndexOutOfRange { file, rank })
    }

    pub fn get_piece(&self, file: usize, rank: usize) -> Result<Option<Piece>, BoardError> {
        Ok(self.get_square(file, rank)?.piece())
    }

    pub fn set_piece(
        &mut self,
        file: usize,
        rank: usize,
        piece: Option<Piece>,
    ) -> Result<(), BoardError> {
        self.get_square_mut(file, rank)?.set_piece(piece);
        Ok(())
    }

    /// Stored `(file_index, rank_index)` of an algebraic coordinate such as `('e', 2)`.
    pub fn locate(&self, file: char, rank: u8) -> Result<(usize, usize), BoardError> {
        let unknown = || BoardError::UnknownSquare { file, rank };
        let file_idx = file_index(file)
            .filter(|&f| f < BOARD_SIZE)
            .ok_or_else(unknown)?;
        if rank == 0 || rank as usize > BOARD_SIZE {
            return Err(unknown());
        }
        Ok((file_idx, BOARD_SIZE - rank as usize))
    }

    /// Move whatever stands on `from` to `to`, returning the displaced occupant of `to`.
    /// No chess rules are applied.
    pub fn relocate(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<Option<Piece>, BoardError> {
        self.get_square(to.0, to.1)?;
        let origin = self.get_square_mut(from.0, from.1)?;
        let name = origin.name();
        let piece = origin.take_piece().ok_or(BoardError::EmptySquare(name))?;
        let target = self.get_square_mut(to.0, to.1)?;
        let captured = target.take_piece();
        target.set_piece(Some(piece));
        Ok(captured)
    }

    /// Rows in storage order (rank 8 first).
    pub fn rows(&self) -> impl Iterator<Item = &[Square; BOARD_SIZE]> {
        self.squares.iter()
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Read-only view oriented for `perspective`.
    pub fn view(&self, perspective: PieceColor) -> BoardView<'_> {
        BoardView {
            board: self,
            flipped: perspective == PieceColor::Black,
        }
    }
}

/// Board seen from one side. Black's view reverses both rows and columns
/// without touching the stored order.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    fn map(&self, index: usize) -> usize {
        if self.flipped {
            BOARD_SIZE - 1 - index
        } else {
            index
        }
    }

    /// Square drawn at display position `(row, col)`.
    ///
    /// Out-of-range positions report the display coordinates they were given,
    /// not stored indices.
    pub fn square(&self, row: usize, col: usize) -> Result<&'a Square, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::SquareIndexOutOfRange { file: col, rank: row });
        }
        Ok(self.at(row, col))
    }

    fn at(&self, row: usize, col: usize) -> &'a Square {
        &self.board.squares[self.map(row)][self.map(col)]
    }

    /// Display rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&'a Square>> + 'a {
        let view = *self;
        (0..BOARD_SIZE).map(move |row| (0..BOARD_SIZE).map(|col| view.at(row, col)).collect())
    }

    /// File letters in display order.
    pub fn files(&self) -> Vec<char> {
        (0..BOARD_SIZE)
            .map(|col| self.board.squares[0][self.map(col)].file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn rook(color: PieceColor) -> Piece {
        Piece::new(PieceKind::Rook, color)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.squares().count(), 64);
        assert!(board.squares().all(Square::is_empty));
    }

    #[test]
    fn test_squares_have_unique_coordinates() {
        let board = Board::new();
        let mut seen = std::collections::HashSet::new();
        for sq in board.squares() {
            assert!(seen.insert((sq.file_index(), sq.rank_index())));
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn test_labels() {
        let board = Board::new();
        assert_eq!(board.files(), vec!['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
        assert_eq!(board.ranks(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut board = Board::new();
        assert_eq!(
            board.get_square(8, 0),
            Err(BoardError::SquareIndexOutOfRange { file: 8, rank: 0 })
        );
        assert!(board.set_piece(0, 8, Some(rook(PieceColor::White))).is_err());
    }

    #[test]
    fn test_set_and_get_piece() {
        let mut board = Board::new();
        board.set_piece(3, 4, Some(rook(PieceColor::Black))).unwrap();
        assert_eq!(board.get_piece(3, 4).unwrap(), Some(rook(PieceColor::Black)));
        board.set_piece(3, 4, None).unwrap();
        assert_eq!(board.get_piece(3, 4).unwrap(), None);
    }

    #[test]
    fn test_locate() {
        let board = Board::new();
        assert_eq!(board.locate('a', 8), Ok((0, 0)));
        assert_eq!(board.locate('e', 1), Ok((4, 7)));
        assert!(board.locate('i', 1).is_err());
        assert!(board.locate('a', 9).is_err());
        assert!(board.locate('a', 0).is_err());
    }

    #[test]
    fn test_relocate_captures() {
        let mut board = Board::new();
        board.set_piece(0, 7, Some(rook(PieceColor::White))).unwrap();
        board.set_piece(0, 0, Some(rook(PieceColor::Black))).unwrap();

        let captured = board.relocate((0, 7), (0, 0)).unwrap();
        assert_eq!(captured, Some(rook(PieceColor::Black)));
        assert_eq!(board.get_piece(0, 0).unwrap(), Some(rook(PieceColor::White)));
        assert_eq!(board.get_piece(0, 7).unwrap(), None);
    }

    #[test]
    fn test_relocate_from_empty_square() {
        let mut board = Board::new();
        assert_eq!(
            board.relocate((4, 6), (4, 4)),
            Err(BoardError::EmptySquare("e2".to_string()))
        );
    }

    #[test]
    fn test_black_view_reverses_rows_and_columns() {
        let mut board = Board::new();
        board.set_piece(0, 0, Some(rook(PieceColor::Black))).unwrap();

        let white = board.view(PieceColor::White);
        let black = board.view(PieceColor::Black);
        assert_eq!(white.square(0, 0).unwrap().name(), "a8");
        assert_eq!(black.square(0, 0).unwrap().name(), "h1");
        assert_eq!(black.square(7, 7).unwrap().piece(), Some(rook(PieceColor::Black)));
        assert_eq!(black.files(), vec!['h', 'g', 'f', 'e', 'd', 'c', 'b', 'a']);

        // The stored order is untouched by viewing.
        assert_eq!(board.get_square(0, 0).unwrap().name(), "a8");
    }

    #[test]
    fn test_view_out_of_range_reports_display_coordinates() {
        let board = Board::new();
        let black = board.view(PieceColor::Black);
        assert_eq!(
            black.square(1, 8),
            Err(BoardError::SquareIndexOutOfRange { file: 8, rank: 1 })
        );
        assert_eq!(
            black.square(9, 0),
            Err(BoardError::SquareIndexOutOfRange { file: 0, rank: 9 })
        );
    }
}
