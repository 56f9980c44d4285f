use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGBA8;
use swatchbook::{hsl_to_rgb, parse, Color, RGBColor};

type Err = Box<dyn Error>;

fn swatch(fh: &mut impl Write, name: &str, c: Color) -> Result<(), Err> {
    let f = c.formats();
    let (text, badges) = match c.contrast() {
        Some(r) => {
            let best = r.best_choice.to_string();
            let badges = format!("white {} {} · black {} {}",
                                 r.white.ratio_text, r.white.wcag,
                                 r.black.ratio_text, r.black.wcag);
            (best, badges)
        }
        None => ("black".to_string(), "translucent".to_string()),
    };
    writeln!(fh, "<tr>\n  \
                  <td style=\"width: 120px; height: 60px; background: {}; \
                  color: {text}; padding: 4px\">{name}</td>",
             f.rgb)?;
    writeln!(fh, "  <td><code>{}</code><br/><code>{}</code><br/>\
                  <code>{}</code><br/><code>{}</code></td>",
             f.hex, f.rgb, f.hsl, f.oklch)?;
    writeln!(fh, "  <td>{badges}</td>\n</tr>")?;
    Ok(())
}

fn ramp(fh: &mut impl Write, hue: f64, saturation: f64) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for l in (5 ..= 95).step_by(10) {
        let c = Color::from(hsl_to_rgb(hue, saturation, l as f64));
        let fg = c.contrast().map_or("black".to_string(),
                                     |r| r.best_choice.to_string());
        writeln!(fh, "  <td style=\"width: 60px; height: 30px; \
                      background-color: {}; color: {fg}\">{l}</td>",
                 c.formats().hex)?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>swatchbook: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Swatches</h3>\n<table>")?;
    for (name, css) in [("primary", "rgb(59, 130, 246)"),
                        ("primary-trans", "rgba(59, 130, 246, 0.4)"),
                        ("secondary", "rgb(236, 72, 153)"),
                        ("neutral", "rgb(118, 118, 118)"),
                        ("dark", "rgb(15, 23, 42)"),
                        ("light", "rgb(248, 250, 252)")] {
        if let Some(c) = parse(css) {
            swatch(&mut fh, name, c)?;
        }
    }
    let accent = RGBA8 { r: 34, g: 197, b: 94, a: 255 };
    swatch(&mut fh, "accent", accent.to_color())?;
    writeln!(fh, "</table>")?;

    writeln!(fh, "<h3>Lightness ramps</h3>")?;
    for hue in [217., 330., 142.] {
        ramp(&mut fh, hue, 90.)?;
    }
    ramp(&mut fh, 0., 0.)?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
