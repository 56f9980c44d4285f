// Command-line access to the swatch computations, mainly to produce and
// check golden values:
//
//   swatchbook convert "rgba(59, 130, 246, 0.4)"
//   swatchbook contrast "#767676" --json
//   swatchbook place --anchor 560,40,30,20 --panel 300,120 --viewport 600,400
//
// Set RUST_LOG=debug to see why an input is rejected.

use std::{error::Error, io::{self, Write}};
use clap::{Parser, Subcommand};
use serde::Serialize;
use swatchbook::{place, Color, MenuOptions, Rect, RGBColor, Size};
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

#[derive(Parser)]
#[command(name = "swatchbook", version, about = "Color swatch formats, \
          contrast badges and menu placement")]
struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a color in every display format.
    Convert { color: String },
    /// Print the luminance and the contrast badges against white and black.
    Contrast { color: String },
    /// Compute where a floating menu goes.
    Place {
        /// Anchor rectangle as LEFT,TOP,WIDTH,HEIGHT.
        #[arg(long, value_parser = parse_rect)]
        anchor: Rect,
        /// Panel size as WIDTH,HEIGHT.
        #[arg(long, value_parser = parse_size)]
        panel: Size,
        /// Viewport size as WIDTH,HEIGHT.
        #[arg(long, value_parser = parse_size)]
        viewport: Size,
        #[arg(long, default_value_t = MenuOptions::default().gap)]
        gap: f64,
        #[arg(long, default_value_t = MenuOptions::default().margin)]
        margin: f64,
    },
}

fn numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let v: Vec<f64> = s.split(',')
        .map(|x| x.trim().parse::<f64>().map_err(|e| format!("{x:?}: {e}")))
        .collect::<Result<_, _>>()?;
    v.try_into().map_err(|v: Vec<f64>| {
        format!("expected {N} comma-separated numbers, got {}", v.len()) })
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [l, t, w, h] = numbers::<4>(s)?;
    Ok(Rect::new(l, t, w, h))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = numbers::<2>(s)?;
    Ok(Size::new(w, h))
}

fn print_json(out: &mut impl Write, v: &impl Serialize) -> Result<(), Err> {
    serde_json::to_writer_pretty(&mut *out, v)?;
    writeln!(out)?;
    Ok(())
}

fn convert(out: &mut impl Write, c: Color, json: bool) -> Result<(), Err> {
    let f = c.formats();
    if json { return print_json(out, &f) }
    writeln!(out, "hex    {}\nrgb    {}\nhsl    {}\noklch  {}",
             f.hex, f.rgb, f.hsl, f.oklch)?;
    Ok(())
}

fn contrast(out: &mut impl Write, c: Color, json: bool) -> Result<(), Err> {
    let Some(r) = c.contrast() else {
        return Err("contrast is undefined for a translucent color".into())
    };
    if json { return print_json(out, &r) }
    writeln!(out, "luminance  {:.4}", r.luminance)?;
    for (name, s) in [("white", &r.white), ("black", &r.black)] {
        writeln!(out, "on {name:<7} {:>8}  {}", s.ratio_text, s.wcag)?;
    }
    writeln!(out, "best       {}", r.best_choice)?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Convert { color } => convert(&mut out, color.parse()?, cli.json),
        Command::Contrast { color } => contrast(&mut out, color.parse()?, cli.json),
        Command::Place { anchor, panel, viewport, gap, margin } => {
            let p = place(anchor, panel, viewport, MenuOptions { gap, margin });
            tracing::debug!(?anchor, ?panel, ?viewport, ?p, "placed");
            if cli.json { return print_json(&mut out, &p) }
            writeln!(out, "left {}  top {}", p.left, p.top)?;
            Ok(())
        }
    }
}
