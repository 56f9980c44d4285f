//! Color formats, contrast badges and menu placement for style-guide
//! swatches.
//!
//! - [`Color`], read back from a computed style with [`parse`]
//! - [`ColorFormats`]: hex, rgb, hsl and oklch display strings
//! - [`ContrastResult`]: WCAG badges against white and black
//! - [`place`]: position of a floating menu next to its trigger
//!
//! Every [`RGBColor`] (notably [`rgb::RGB8`] and [`rgb::RGBA8`]) gets
//! the conversions as provided methods.
//!
//! ```
//! use swatchbook::{parse, RGBColor};
//! let blue = parse("rgb(59, 130, 246)").unwrap();
//! assert_eq!(blue.formats().hex, "#3B82F6");
//! assert_eq!(blue.hsl().to_string(), "hsl(217, 91%, 60%)");
//! ```

use rgb::{RGB8, RGBA8};

mod cache;
mod contrast;
mod convert;
mod error;
mod menu;
mod parse;

pub use cache::ResolvedCache;
pub use contrast::{contrast_ratio, evaluate, luminance, wcag_level,
                   Background, ContrastResult, ContrastScore, WcagLevel};
pub use convert::{hsl_to_rgb, to_hex, to_hex8, to_hsl, to_oklch,
                  ColorFormats, Hsl, Oklch};
pub use error::ParseColorError;
pub use menu::{place, MenuOptions, MenuPlacement, Rect, ResizeDebounce, Size};
pub use parse::{parse, parse_hex};

/// An sRGB color with 8-bit channels and a floating-point alpha.
///
/// Values are immutable: all textual forms are recomputed from the
/// channels on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
    has_alpha: bool,
}

impl Color {
    /// An opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1., has_alpha: false }
    }

    /// A color with alpha `a` ∈ \[0, 1\].  Values outside the range are
    /// clamped and NaN is taken as opaque.
    pub fn with_alpha(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 1. } else { a.clamp(0., 1.) };
        Color { r, g, b, a, has_alpha: a < 1. }
    }

    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    #[inline]
    pub fn r(&self) -> u8 { self.r }
    #[inline]
    pub fn g(&self) -> u8 { self.g }
    #[inline]
    pub fn b(&self) -> u8 { self.b }
    #[inline]
    pub fn a(&self) -> f64 { self.a }

    /// Whether the color is (partly) transparent, i.e. alpha < 1.
    #[inline]
    pub fn has_alpha(&self) -> bool { self.has_alpha }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the color as a [`Color`].
    fn to_color(&self) -> Color;

    /// Create a value from a [`Color`].  Encodings without alpha drop it.
    fn from_color(c: Color) -> Self;

    /// The rounded HSL triple of the color (alpha is ignored).
    fn hsl(&self) -> Hsl {
        let c = self.to_color();
        to_hsl(c.r, c.g, c.b)
    }

    /// The OKLCH coordinates of the color (alpha is ignored).
    fn oklch(&self) -> Oklch {
        let c = self.to_color();
        to_oklch(c.r, c.g, c.b)
    }

    /// WCAG relative luminance in \[0, 1\].
    fn luminance(&self) -> f64 {
        let c = self.to_color();
        luminance(c.r, c.g, c.b)
    }

    /// Contrast badges against white and black, or `None` when the
    /// color is translucent: contrast against a see-through color
    /// depends on what lies behind it.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use swatchbook::{Background, RGBColor};
    /// let navy = RGB8::new(0, 0, 128);
    /// assert_eq!(navy.contrast().unwrap().best_choice, Background::White);
    /// ```
    fn contrast(&self) -> Option<ContrastResult> {
        let c = self.to_color();
        if c.has_alpha { None } else { Some(evaluate(c.r, c.g, c.b)) }
    }

    /// All display strings of the color.
    fn formats(&self) -> ColorFormats { ColorFormats::of(self.to_color()) }
}

impl RGBColor for Color {
    #[inline]
    fn to_color(&self) -> Color { *self }

    #[inline]
    fn from_color(c: Color) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_color(&self) -> Color { Color::new(self.r, self.g, self.b) }

    #[inline]
    fn from_color(c: Color) -> Self { RGB8 { r: c.r, g: c.g, b: c.b } }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_color(&self) -> Color {
        Color::with_alpha(self.r, self.g, self.b, self.a as f64 / 255.)
    }

    #[inline]
    fn from_color(c: Color) -> Self {
        RGBA8 { r: c.r, g: c.g, b: c.b, a: (c.a * 255.).round() as u8 }
    }
}

impl From<RGB8> for Color {
    fn from(c: RGB8) -> Self { c.to_color() }
}

impl From<RGBA8> for Color {
    fn from(c: RGBA8) -> Self { c.to_color() }
}
