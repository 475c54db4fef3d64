pub(crate) use rgb::RGB8;
use strum::EnumIter;
use thiserror::Error;

/// One entry of the color catalog.
pub(crate) struct ColorData {
    pub(crate) name: &'static str,
    pub(crate) rgb: RGB8,
    pub(crate) description: &'static str,
}

/// A named grouping of catalog colors.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) colors: &'static [Color], // Invariant: non-empty, no duplicates
}

/// A named color from the closed catalog.
///
/// Iterating (through [`strum::IntoEnumIterator`]) yields the eight
/// colors in declaration order.  Colors compare by identity, never by
/// channel proximity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    /// Initial color of a freshly created mixer.
    #[default]
    White,
    Black,
}

/// Kind of palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum PaletteKind {
    /// Additive primary colors: red, green and blue.
    Primary,
    /// Additive secondary colors: yellow, cyan and magenta.
    Secondary,
    /// The grayscale extremes, white and black.
    Grayscale,
}

/// A name that matches no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown color {0:?}")]
    UnknownColor(String),
    #[error("unknown palette {0:?}")]
    UnknownPalette(String),
}
