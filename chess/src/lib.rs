//! Board model, FEN piece-placement codec and terminal rendering for asciichess.

pub mod board;
pub mod fen;
pub mod piece;
pub mod render;
pub mod scheme;
pub mod selector;
pub mod square;
pub mod types;

pub use board::{Board, BoardError, BoardView, STARTING_PLACEMENT};
pub use fen::{decode, encode, FenError};
pub use piece::Piece;
pub use render::{render, render_plain, Renderer};
pub use scheme::{CellStyle, ColorScheme, Rgb, SchemeError};
pub use selector::{DestinationSelector, PieceSelector, SelectorError, SquareRef};
pub use square::Square;
pub use types::{PieceColor, PieceKind, SquareColor};
