//! Drawing palette.
//!
//! Charcoal draws with a fixed seven-color palette addressed by the
//! indices 1-7. The indices are part of the persisted file format, so
//! they are stable: index 0 and anything above 7 are invalid everywhere,
//! including on load.

/// A color from the seven-entry drawing palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaletteColor {
    White = 1,
    Red = 2,
    Green = 3,
    Blue = 4,
    Yellow = 5,
    Cyan = 6,
    Magenta = 7,
}

impl Default for PaletteColor {
    fn default() -> Self {
        PaletteColor::White
    }
}

impl PaletteColor {
    /// Number of colors in the palette.
    pub const COUNT: u8 = 7;

    /// Look up a palette color by its persisted index (1-7).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PaletteColor::White),
            2 => Some(PaletteColor::Red),
            3 => Some(PaletteColor::Green),
            4 => Some(PaletteColor::Blue),
            5 => Some(PaletteColor::Yellow),
            6 => Some(PaletteColor::Cyan),
            7 => Some(PaletteColor::Magenta),
            _ => None,
        }
    }

    /// The persisted index of this color (1-7).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable name for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::White => "white",
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Magenta => "magenta",
        }
    }

    /// All palette colors in index order.
    pub fn all() -> [PaletteColor; 7] {
        [
            PaletteColor::White,
            PaletteColor::Red,
            PaletteColor::Green,
            PaletteColor::Blue,
            PaletteColor::Yellow,
            PaletteColor::Cyan,
            PaletteColor::Magenta,
        ]
    }
}
