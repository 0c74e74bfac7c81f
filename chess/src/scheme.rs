//! Terminal color schemes keyed by piece color and square color.
//!
//! A scheme maps each color key `(piece_color_bit << 1) | square_color_bit` to a
//! true-color SGR directive, plus a reset directive written before labels and
//! after every cell.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Every key a complete scheme must define.
pub const COLOR_KEYS: [u8; 4] = [0, 1, 2, 3];

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("Incomplete color scheme: missing keys {0:?}")]
    IncompleteColorScheme(Vec<u8>),
    #[error("Invalid color scheme: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read color scheme: {0}")]
    Io(#[from] std::io::Error),
}

/// 24-bit color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Background and foreground of one cell class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl CellStyle {
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// ANSI SGR sequence `ESC[48;2;R;G;B;38;2;R;G;Bm`.
    pub fn directive(&self) -> String {
        let Rgb(br, bg, bb) = self.background;
        let Rgb(fr, fg, fb) = self.foreground;
        format!("\x1b[48;2;{br};{bg};{bb};38;2;{fr};{fg};{fb}m")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    cells: BTreeMap<u8, CellStyle>,
    reset: CellStyle,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::grayscale()
    }
}

impl ColorScheme {
    /// Build a scheme, rejecting it unless every key in [`COLOR_KEYS`] is present.
    pub fn new(cells: BTreeMap<u8, CellStyle>, reset: CellStyle) -> Result<Self, SchemeError> {
        let scheme = Self { cells, reset };
        scheme.validate()?;
        Ok(scheme)
    }

    /// High-contrast grayscale board.
    pub fn grayscale() -> Self {
        const LIGHT: Rgb = Rgb(200, 200, 200);
        const DARK: Rgb = Rgb(50, 50, 50);
        const WHITE: Rgb = Rgb(255, 255, 255);
        const BLACK: Rgb = Rgb(0, 0, 0);
        Self::from_palette(LIGHT, DARK, WHITE, BLACK, CellStyle::new(BLACK, Rgb(50, 255, 255)))
    }

    /// Wooden board tones.
    pub fn classic() -> Self {
        const LIGHT: Rgb = Rgb(240, 217, 181);
        const DARK: Rgb = Rgb(181, 136, 99);
        const WHITE: Rgb = Rgb(255, 255, 255);
        const BLACK: Rgb = Rgb(0, 0, 0);
        Self::from_palette(LIGHT, DARK, WHITE, BLACK, CellStyle::new(BLACK, Rgb(255, 255, 0)))
    }

    fn from_palette(light: Rgb, dark: Rgb, white: Rgb, black: Rgb, reset: CellStyle) -> Self {
        let cells = BTreeMap::from([
            (0, CellStyle::new(light, white)),
            (1, CellStyle::new(dark, white)),
            (2, CellStyle::new(light, black)),
            (3, CellStyle::new(dark, black)),
        ]);
        Self { cells, reset }
    }

    /// Parse a JSON scheme and check that it is total.
    pub fn from_json(json: &str) -> Result<Self, SchemeError> {
        let scheme: Self = serde_json::from_str(json)?;
        scheme.validate()?;
        Ok(scheme)
    }

    pub fn from_file(path: &Path) -> Result<Self, SchemeError> {
        let json = std::fs::read_to_string(path)?;
        let scheme = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded color scheme");
        Ok(scheme)
    }

    pub fn to_json(&self) -> Result<String, SchemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SchemeError> {
        let missing: Vec<u8> = COLOR_KEYS
            .iter()
            .copied()
            .filter(|key| !self.cells.contains_key(key))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SchemeError::IncompleteColorScheme(missing))
        }
    }

    /// Directive for `key`, or an error when the scheme does not define it.
    pub fn directive(&self, key: u8) -> Result<String, SchemeError> {
        self.cells
            .get(&key)
            .map(CellStyle::directive)
            .ok_or_else(|| SchemeError::IncompleteColorScheme(vec![key]))
    }

    /// Directive for `key`, falling back to the reset directive.
    pub fn resolve(&self, key: u8) -> String {
        match self.cells.get(&key) {
            Some(style) => style.directive(),
            None => {
                tracing::warn!(key, "color key missing from scheme, using reset");
                self.reset.directive()
            }
        }
    }

    pub fn reset(&self) -> String {
        self.reset.directive()
    }
}
