use crate::types::{PieceColor, PieceKind};

/// A chess piece: kind plus side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Resolve a FEN letter; uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self { kind, color })
    }

    pub fn fen_char(self) -> char {
        match self.color {
            PieceColor::White => self.kind.to_char_upper(),
            PieceColor::Black => self.kind.to_char_lower(),
        }
    }

    pub fn glyph(self) -> char {
        self.kind.glyph()
    }

    /// Glyph distinguishing the sides by shape instead of color.
    pub fn outline_glyph(self) -> char {
        match self.color {
            PieceColor::White => self.kind.outline_glyph(),
            PieceColor::Black => self.kind.glyph(),
        }
    }

    /// High bit of a color-scheme key: 1 for Black, 0 for White.
    pub fn color_bit(self) -> u8 {
        match self.color {
            PieceColor::White => 0,
            PieceColor::Black => 1,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_char_case_follows_color() {
        let white_king = Piece::new(PieceKind::King, PieceColor::White);
        let black_knight = Piece::new(PieceKind::Knight, PieceColor::Black);
        assert_eq!(white_king.fen_char(), 'K');
        assert_eq!(black_knight.fen_char(), 'n');
        assert_eq!(Piece::from_fen_char('K'), Some(white_king));
        assert_eq!(Piece::from_fen_char('n'), Some(black_knight));
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }

    #[test]
    fn test_glyphs() {
        let white_queen = Piece::new(PieceKind::Queen, PieceColor::White);
        let black_queen = Piece::new(PieceKind::Queen, PieceColor::Black);
        assert_eq!(white_queen.glyph(), black_queen.glyph());
        assert_eq!(white_queen.outline_glyph(), '♕');
        assert_eq!(black_queen.outline_glyph(), '♛');
    }
}
