//! Piece kinds, piece colors and square colors.

/// The six chess piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Side a piece belongs to. Also used for the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

/// Checkerboard color of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Light,
    Dark,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
        Self::Pawn,
    ];

    pub fn to_char_upper(self) -> char {
        self.to_char_lower().to_ascii_uppercase()
    }

    pub fn to_char_lower(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        }
    }

    /// Case-insensitive lookup of a FEN letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Self::King),
            'q' => Some(Self::Queen),
            'r' => Some(Self::Rook),
            'b' => Some(Self::Bishop),
            'n' => Some(Self::Knight),
            'p' => Some(Self::Pawn),
            _ => None,
        }
    }

    /// Filled glyph, drawn for both sides; the terminal foreground tells them apart.
    pub fn glyph(self) -> char {
        match self {
            Self::King => '♚',
            Self::Queen => '♛',
            Self::Rook => '♜',
            Self::Bishop => '♝',
            Self::Knight => '♞',
            Self::Pawn => '♟',
        }
    }

    /// Outlined glyph, conventionally used for White when no colors are available.
    pub fn outline_glyph(self) -> char {
        match self {
            Self::King => '♔',
            Self::Queen => '♕',
            Self::Rook => '♖',
            Self::Bishop => '♗',
            Self::Knight => '♘',
            Self::Pawn => '♙',
        }
    }
}

impl PieceColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Parse the FEN active-color field (`w` or `b`).
    pub fn from_fen_field(field: &str) -> Option<Self> {
        match field {
            "w" => Some(Self::White),
            "b" => Some(Self::Black),
            _ => None,
        }
    }
}

impl SquareColor {
    /// Checkerboard parity of a stored position. File 0 on row 0 (a8) is light.
    pub fn at(file_index: usize, rank_index: usize) -> Self {
        if (file_index + rank_index) % 2 == 0 {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Bit used in color-scheme keys.
    pub fn bit(self) -> u8 {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
