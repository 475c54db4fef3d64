//! Writes `swatches.html`: one swatch row per palette.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_catalog::{Color, Palette, PaletteKind};
use strum::IntoEnumIterator;

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[Color],
                   comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: 60px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color_catalog: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Catalog</h3>")?;
    let all: Vec<_> = Color::iter().collect();
    table_of_colors(&mut fh, &all, "all colors, declaration order")?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    for kind in PaletteKind::iter() {
        let p = Palette::new(kind);
        let comment = format!("{}: {} ({} colors)",
                              p.name(), p.description(), p.len());
        table_of_colors(&mut fh, p.colors(), &comment)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
