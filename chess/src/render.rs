//! Text rendering of a board for true-color terminals.

use crate::board::{Board, BoardView};
use crate::scheme::ColorScheme;
use crate::square::Square;
use crate::types::PieceColor;

/// Ideographic space. Roughly two columns wide, matching a padded cell.
const WIDE_SPACE: char = '\u{3000}';

/// Renders boards with a fixed color scheme.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    scheme: &'a ColorScheme,
}

impl<'a> Renderer<'a> {
    pub fn new(scheme: &'a ColorScheme) -> Self {
        Self { scheme }
    }

    /// Draw `board` from `active_player`'s side, ranks on the left and files below.
    pub fn render(&self, board: &Board, active_player: PieceColor) -> String {
        let view = board.view(active_player);
        let reset = self.scheme.reset();
        let mut out = String::new();

        for row in view.rows() {
            for (col, square) in row.iter().enumerate() {
                if col == 0 {
                    out.push_str(&reset);
                    out.push_str(&format!("{} ", square.rank()));
                }
                out.push_str(&self.scheme.resolve(square.color_key()));
                out.push_str(&cell(square));
                out.push_str(&reset);
            }
            out.push('\n');
            out.push_str(&reset);
        }

        out.push(' ');
        out.push(WIDE_SPACE);
        for file in view.files() {
            out.push_str(&reset);
            out.push(file);
            out.push(WIDE_SPACE);
        }

        tracing::debug!(
            player = %active_player,
            flipped = view.is_flipped(),
            bytes = out.len(),
            "rendered board"
        );
        out
    }
}

/// Render with an explicit scheme.
pub fn render(board: &Board, scheme: &ColorScheme, active_player: PieceColor) -> String {
    Renderer::new(scheme).render(board, active_player)
}

/// Escape-free rendering; sides are told apart by outlined and filled glyphs.
pub fn render_plain(board: &Board, perspective: PieceColor) -> String {
    let view = board.view(perspective);
    let mut out = String::new();
    for row in view.rows() {
        if let Some(first) = row.first() {
            out.push_str(&format!("{} ", first.rank()));
        }
        for square in &row {
            let glyph = square.piece().map_or(' ', |piece| piece.outline_glyph());
            out.push_str(&format!(" {} ", glyph));
        }
        out.push('\n');
    }
    out.push_str("  ");
    out.push_str(&file_labels(&view));
    out
}

fn file_labels(view: &BoardView<'_>) -> String {
    view.files().iter().map(|file| format!(" {} ", file)).collect()
}

/// Three columns wide whether or not the square is occupied.
fn cell(square: &Square) -> String {
    let glyph = square.piece().map_or(' ', |piece| piece.glyph());
    format!(" {} ", glyph)
}
