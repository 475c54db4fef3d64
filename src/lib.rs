//! A closed catalog of named colors and palettes.
//!
//! - [`Color`]
//! - [`PaletteKind`]
//!
//! Eight named colors with fixed RGB values are grouped into three
//! [`Palette`]s.  Two small helpers sit on top of the catalog:
//! [`ColorMixer`] holds one current color and averages channel
//! values, [`PaletteViewer`] renders one palette as text.
//!
//! ```
//! use color_catalog::{Color, ColorMixer, Palette, PaletteKind};
//! let primary = Palette::new(PaletteKind::Primary);
//! assert!(primary.contains(Color::Red));
//! let violet = ColorMixer::mix_rgb_average(Color::Red, Color::Blue);
//! assert_eq!((violet.r, violet.g, violet.b), (127, 0, 127));
//! ```

use rgb::RGB8;

mod catalog;
use catalog::ty::PaletteData;
pub use catalog::ty::{Color, LookupError, PaletteKind};

/// An ordered, immutable grouping of catalog colors.
///
/// Constructed from a [`PaletteKind`]; the mapping is total, so
/// construction never fails.  A `Palette` borrows the catalog's
/// static data and is `Copy`.
#[derive(Clone, Copy)]
pub struct Palette {
    data: &'static PaletteData,
}

impl Palette {
    /// Returns the palette for `kind`.
    pub fn new(kind: PaletteKind) -> Self {
        Palette { data: kind.data() }
    }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes contain at least 1 color.
    pub fn len(&self) -> usize { self.data.colors.len() }

    /// Display name of the palette, e.g. `"PRIMARY"`.
    pub fn name(&self) -> &'static str { self.data.name }

    pub fn description(&self) -> &'static str { self.data.description }

    /// Returns the colors of the palette, in declaration order.
    pub fn colors(&self) -> &'static [Color] { self.data.colors }

    /// Maps every color through [`Color::to_hex`], preserving the
    /// palette's order.
    pub fn hex_values(&self) -> Vec<String> {
        self.data.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// Maps every color through [`Color::to_rgb`], preserving the
    /// palette's order.
    pub fn rgb_values(&self) -> Vec<RGB8> {
        self.data.colors.iter().map(|c| c.to_rgb()).collect()
    }

    /// Says whether `color` is a member of the palette.
    pub fn contains(&self, color: Color) -> bool {
        self.data.colors.contains(&color)
    }
}

/// Attributes of one color, as reported by
/// [`ColorMixer::color_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInfo {
    pub name: &'static str,
    pub hex: String,
    pub rgb: RGB8,
    pub description: &'static str,
}

/// Holds one current color and averages channel values.
#[derive(Debug, Default)]
pub struct ColorMixer {
    current: Color,
}

impl ColorMixer {
    /// Creates a mixer whose current color is [`Color::White`].
    pub fn new() -> Self {
        ColorMixer { current: Color::White }
    }

    /// Unconditionally replaces the current color.
    pub fn set_color(&mut self, color: Color) { self.current = color }

    /// Returns the attributes of the current color.
    pub fn color_info(&self) -> ColorInfo {
        let c = self.current;
        ColorInfo {
            name: c.name(),
            hex: c.to_hex(),
            rgb: c.to_rgb(),
            description: c.description(),
        }
    }

    /// Averages two colors channel by channel with integer (floor)
    /// division: odd sums truncate down, so RED and BLUE average to
    /// (127, 0, 127).
    pub fn mix_rgb_average(c1: Color, c2: Color) -> RGB8 {
        let (a, b) = (c1.to_rgb(), c2.to_rgb());
        let avg = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
        RGB8 { r: avg(a.r, b.r), g: avg(a.g, b.g), b: avg(a.b, b.b) }
    }
}

/// Renders one [`Palette`] as text.
///
/// A viewer wraps exactly one palette for its lifetime; create a new
/// viewer to view a different palette.
#[derive(Clone, Copy)]
pub struct PaletteViewer {
    palette: Palette,
}

impl PaletteViewer {
    /// Creates a viewer for the palette of `kind`.
    pub fn new(kind: PaletteKind) -> Self {
        PaletteViewer { palette: Palette::new(kind) }
    }

    /// The wrapped palette.
    pub fn palette(&self) -> &Palette { &self.palette }

    /// Returns a multi-line summary: a header, the description, the
    /// color count and one line per color in palette order.
    pub fn summary(&self) -> String {
        let p = &self.palette;
        let mut lines = vec![
            format!("Palette: {}", p.name()),
            format!("Description: {}", p.description()),
            format!("Colors ({}):", p.len()),
        ];
        for &c in p.colors() {
            let RGB8 { r, g, b } = c.to_rgb();
            lines.push(format!("  - {}: {} ({}, {}, {})",
                               c.name(), c.to_hex(), r, g, b));
        }
        lines.join("\n")
    }

    /// Hex codes of every palette color, in palette order.
    pub fn hex_codes(&self) -> Vec<String> { self.palette.hex_values() }

    /// Says whether the wrapped palette contains `color`.
    pub fn contains_color(&self, color: Color) -> bool {
        self.palette.contains(color)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use strum::IntoEnumIterator;

    #[test]
    fn hex_matches_rgb() {
        for c in Color::iter() {
            let RGB8 { r, g, b } = c.to_rgb();
            assert_eq!(c.to_hex(), format!("#{:02X}{:02X}{:02X}", r, g, b),
                       "hex of {c} must encode its rgb");
        }
        assert_eq!(Color::Red.to_hex(), "#FF0000");
        assert_eq!(Color::Green.to_hex(), "#00FF00");
        assert_eq!(Color::Blue.to_hex(), "#0000FF");
        assert_eq!(Color::White.to_hex(), "#FFFFFF");
        assert_eq!(Color::Black.to_hex(), "#000000");
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(Color::Red.to_rgb(), RGB8::new(255, 0, 0));
        assert_eq!(Color::Green.to_rgb(), RGB8::new(0, 255, 0));
        assert_eq!(Color::Blue.to_rgb(), RGB8::new(0, 0, 255));
        assert_eq!(Color::Yellow.to_rgb(), RGB8::new(255, 255, 0));
        assert_eq!(Color::Cyan.to_rgb(), RGB8::new(0, 255, 255));
        assert_eq!(Color::Magenta.to_rgb(), RGB8::new(255, 0, 255));
    }

    #[test]
    fn catalog_is_complete_and_ordered() {
        let names: Vec<_> = Color::iter().map(|c| c.name()).collect();
        assert_eq!(names, ["RED", "GREEN", "BLUE", "YELLOW", "CYAN",
                           "MAGENTA", "WHITE", "BLACK"]);
        let kinds: Vec<_> = PaletteKind::iter().collect();
        assert_eq!(kinds, [PaletteKind::Primary, PaletteKind::Secondary,
                           PaletteKind::Grayscale]);
        for kind in kinds {
            assert_eq!(kind.to_string(), kind.name());
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn descriptions_name_the_color() {
        for c in Color::iter() {
            let common = c.name().to_lowercase();
            assert!(c.description().to_lowercase().contains(&common),
                    "description of {c} must mention {common:?}");
        }
    }

    #[test]
    fn palette_members() {
        let primary = Palette::new(PaletteKind::Primary);
        assert_eq!(primary.len(), 3);
        assert_eq!(primary.colors(),
                   [Color::Red, Color::Green, Color::Blue]);

        let secondary = Palette::new(PaletteKind::Secondary);
        assert_eq!(secondary.len(), 3);
        assert_eq!(secondary.colors(),
                   [Color::Yellow, Color::Cyan, Color::Magenta]);

        let grayscale = Palette::new(PaletteKind::Grayscale);
        assert_eq!(grayscale.len(), 2);
        assert_eq!(grayscale.colors(), [Color::White, Color::Black]);
    }

    #[test]
    fn palettes_are_nonempty_and_duplicate_free() {
        for kind in PaletteKind::iter() {
            let p = Palette::new(kind);
            assert!(p.len() >= 1, "{} must not be empty", p.name());
            let mut seen = std::collections::HashSet::new();
            assert!(p.colors().iter().all(|c| seen.insert(*c)),
                    "{} must not repeat colors", p.name());
        }
    }

    #[test]
    fn palette_hex_and_rgb_values() {
        let primary = Palette::new(PaletteKind::Primary);
        assert_eq!(primary.hex_values(),
                   ["#FF0000", "#00FF00", "#0000FF"]);
        assert_eq!(primary.rgb_values(),
                   [RGB8::new(255, 0, 0), RGB8::new(0, 255, 0),
                    RGB8::new(0, 0, 255)]);
        assert_eq!(Palette::new(PaletteKind::Secondary).hex_values(),
                   ["#FFFF00", "#00FFFF", "#FF00FF"]);
    }

    #[test]
    fn mixing_truncates_odd_sums() {
        let mixed = ColorMixer::mix_rgb_average(Color::Red, Color::Blue);
        assert_eq!(mixed, RGB8::new(127, 0, 127));
        let mixed = ColorMixer::mix_rgb_average(Color::White, Color::Black);
        assert_eq!(mixed, RGB8::new(127, 127, 127));
        let mixed = ColorMixer::mix_rgb_average(Color::Red, Color::White);
        assert_eq!(mixed, RGB8::new(255, 127, 127));
    }

    #[test]
    fn mixer_starts_white_and_reports_current() {
        let mut mixer = ColorMixer::new();
        assert_eq!(mixer.color_info().name, "WHITE");

        mixer.set_color(Color::Red);
        let info = mixer.color_info();
        assert_eq!(info.name, "RED");
        assert_eq!(info.hex, "#FF0000");
        assert_eq!(info.rgb, RGB8::new(255, 0, 0));
        assert!(!info.description.is_empty());
    }

    #[test]
    fn viewer_summary() {
        let viewer = PaletteViewer::new(PaletteKind::Primary);
        let summary = viewer.summary();
        for needle in ["Palette: PRIMARY", "Colors (3):",
                       "RED", "GREEN", "BLUE", "#FF0000"] {
            assert!(summary.contains(needle),
                    "summary must contain {needle:?}:\n{summary}");
        }
    }

    #[test]
    fn viewer_membership_and_hex_codes() {
        let primary = PaletteViewer::new(PaletteKind::Primary);
        assert!(primary.contains_color(Color::Red));
        assert!(primary.contains_color(Color::Green));
        assert!(primary.contains_color(Color::Blue));
        assert!(!primary.contains_color(Color::Yellow));
        assert!(!primary.contains_color(Color::Cyan));

        let secondary = PaletteViewer::new(PaletteKind::Secondary);
        assert_eq!(secondary.hex_codes(),
                   ["#FFFF00", "#00FFFF", "#FF00FF"]);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Color::from_name("MAGENTA"), Ok(Color::Magenta));
        assert_eq!("BLACK".parse(), Ok(Color::Black));
        assert_eq!(Color::from_name("magenta"),
                   Err(LookupError::UnknownColor("magenta".into())));
        assert_eq!(Color::from_name("magenta").unwrap_err().to_string(),
                   "unknown color \"magenta\"");
        assert_eq!(PaletteKind::from_name("GRAYSCALE"),
                   Ok(PaletteKind::Grayscale));
        assert_eq!("pastel".parse::<PaletteKind>(),
                   Err(LookupError::UnknownPalette("pastel".into())));
    }

    #[test]
    fn accessors_are_pure() {
        let p = Palette::new(PaletteKind::Grayscale);
        assert_eq!(p.hex_values(), p.hex_values());
        assert_eq!(p.rgb_values(), p.rgb_values());
        assert_eq!(Color::Cyan.to_hex(), Color::Cyan.to_hex());
        let viewer = PaletteViewer::new(PaletteKind::Grayscale);
        assert_eq!(viewer.contains_color(Color::White),
                   viewer.contains_color(Color::White));
    }
}
