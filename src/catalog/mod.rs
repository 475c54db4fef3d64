//! Static catalog data: the eight named colors and the three palettes.

pub(crate) mod ty;

use std::{collections::BTreeMap, fmt, str::FromStr};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use ty::*;

const RED: ColorData = ColorData {
    name: "RED",
    rgb: RGB8 { r: 255, g: 0, b: 0 },
    description: "Primary red",
};

const GREEN: ColorData = ColorData {
    name: "GREEN",
    rgb: RGB8 { r: 0, g: 255, b: 0 },
    description: "Primary green",
};

const BLUE: ColorData = ColorData {
    name: "BLUE",
    rgb: RGB8 { r: 0, g: 0, b: 255 },
    description: "Primary blue",
};

const YELLOW: ColorData = ColorData {
    name: "YELLOW",
    rgb: RGB8 { r: 255, g: 255, b: 0 },
    description: "Secondary yellow, red plus green",
};

const CYAN: ColorData = ColorData {
    name: "CYAN",
    rgb: RGB8 { r: 0, g: 255, b: 255 },
    description: "Secondary cyan, green plus blue",
};

const MAGENTA: ColorData = ColorData {
    name: "MAGENTA",
    rgb: RGB8 { r: 255, g: 0, b: 255 },
    description: "Secondary magenta, red plus blue",
};

const WHITE: ColorData = ColorData {
    name: "WHITE",
    rgb: RGB8 { r: 255, g: 255, b: 255 },
    description: "Pure white, all channels at maximum",
};

const BLACK: ColorData = ColorData {
    name: "BLACK",
    rgb: RGB8 { r: 0, g: 0, b: 0 },
    description: "Pure black, all channels at zero",
};

static PRIMARY: PaletteData = PaletteData {
    name: "PRIMARY",
    description: "Additive primary colors",
    colors: &[Color::Red, Color::Green, Color::Blue],
};

static SECONDARY: PaletteData = PaletteData {
    name: "SECONDARY",
    description: "Additive secondary colors",
    colors: &[Color::Yellow, Color::Cyan, Color::Magenta],
};

static GRAYSCALE: PaletteData = PaletteData {
    name: "GRAYSCALE",
    description: "Grayscale extremes",
    colors: &[Color::White, Color::Black],
};

lazy_static! {
    static ref COLOR_BY_NAME: BTreeMap<&'static str, Color> =
        Color::iter().map(|c| (c.name(), c)).collect();
    static ref PALETTE_BY_NAME: BTreeMap<&'static str, PaletteKind> =
        PaletteKind::iter().map(|k| (k.name(), k)).collect();
}

impl Color {
    fn data(self) -> &'static ColorData {
        match self {
            Color::Red => &RED,
            Color::Green => &GREEN,
            Color::Blue => &BLUE,
            Color::Yellow => &YELLOW,
            Color::Cyan => &CYAN,
            Color::Magenta => &MAGENTA,
            Color::White => &WHITE,
            Color::Black => &BLACK,
        }
    }

    /// Canonical uppercase name, e.g. `"RED"`.
    pub fn name(self) -> &'static str { self.data().name }

    /// Short description; contains the color's common name in
    /// lowercase.
    pub fn description(self) -> &'static str { self.data().description }

    /// Returns the red, green and blue channels of the color.
    pub fn to_rgb(self) -> RGB8 { self.data().rgb }

    /// Returns `"#RRGGBB"`: uppercase, zero-padded hex encoding of
    /// [`to_rgb`][Color::to_rgb].
    pub fn to_hex(self) -> String {
        let RGB8 { r, g, b } = self.data().rgb;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Look up a catalog color by its exact canonical name.
    pub fn from_name(name: &str) -> Result<Color, LookupError> {
        COLOR_BY_NAME.get(name).copied()
            .ok_or_else(|| LookupError::UnknownColor(name.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, LookupError> {
        Color::from_name(s)
    }
}

impl PaletteKind {
    pub(crate) fn data(self) -> &'static PaletteData {
        match self {
            PaletteKind::Primary => &PRIMARY,
            PaletteKind::Secondary => &SECONDARY,
            PaletteKind::Grayscale => &GRAYSCALE,
        }
    }

    /// Display name of the palette, e.g. `"PRIMARY"`.
    pub fn name(self) -> &'static str { self.data().name }

    pub fn description(self) -> &'static str { self.data().description }

    /// Look up a palette kind by its exact display name.
    pub fn from_name(name: &str) -> Result<PaletteKind, LookupError> {
        PALETTE_BY_NAME.get(name).copied()
            .ok_or_else(|| LookupError::UnknownPalette(name.to_string()))
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, LookupError> {
        PaletteKind::from_name(s)
    }
}
