//! Console walk-through of the catalog, the mixer and the palettes.

use color_catalog::{Color, ColorMixer, PaletteKind, PaletteViewer};
use strum::IntoEnumIterator;

fn main() {
    println!("Available colors:");
    for color in Color::iter() {
        println!("  {}: {} -> {}", color.name(), color.to_hex(),
                 color.to_rgb());
    }

    let mut mixer = ColorMixer::new();
    mixer.set_color(Color::Red);
    println!("\nCurrent color: {:?}", mixer.color_info());

    let mixed = ColorMixer::mix_rgb_average(Color::Red, Color::Blue);
    println!("\nMixing RED + BLUE = {mixed}");
    let mixed = ColorMixer::mix_rgb_average(Color::Yellow, Color::Cyan);
    println!("Mixing YELLOW + CYAN = {mixed}");

    for kind in PaletteKind::iter() {
        println!("\n{}", PaletteViewer::new(kind).summary());
    }

    let primary = PaletteViewer::new(PaletteKind::Primary);
    println!("\nPRIMARY contains RED: {}",
             primary.contains_color(Color::Red));
    println!("PRIMARY contains YELLOW: {}",
             primary.contains_color(Color::Yellow));
    let secondary = PaletteViewer::new(PaletteKind::Secondary);
    println!("SECONDARY contains YELLOW: {}",
             secondary.contains_color(Color::Yellow));
    println!("SECONDARY contains RED: {}",
             secondary.contains_color(Color::Red));
}
