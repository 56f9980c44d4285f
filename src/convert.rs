//! Conversions from 8-bit sRGB to the textual forms a swatch shows.

use std::fmt;
use rgb::RGB8;
use crate::Color;

/// `#rrggbb`, lowercase.
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `#rrggbbaa`, lowercase, with the alpha `a` ∈ \[0, 1\] scaled to
/// `round(255 a)`.
pub fn to_hex8(r: u8, g: u8, b: u8, a: f64) -> String {
    let a = (a.clamp(0., 1.) * 255.).round() as u8;
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}

/// A color as rounded hue (degrees), saturation and lightness (percent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    /// Hue in 0 .. 360.
    pub h: u16,
    /// Saturation in 0 ..= 100.
    pub s: u8,
    /// Lightness in 0 ..= 100.
    pub l: u8,
}

/// Unrounded HSL with `h` ∈ \[0, 1) and `s`, `l` ∈ \[0, 1\].
fn hsl_unit(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.;
    let g = g as f64 / 255.;
    let b = b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    if max == min { return (0., 0., l) } // achromatic
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let h = if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. };
    (h / 6., s, l)
}

/// Convert to HSL, rounding each component to the nearest integer.
pub fn to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (h, s, l) = hsl_unit(r, g, b);
    // A hue of 359.6° rounds to 360° which is 0°.
    let h = (h * 360.).round() as u16 % 360;
    Hsl { h, s: (s * 100.).round() as u8, l: (l * 100.).round() as u8 }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. { t += 1. }
    if t > 1. { t -= 1. }
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 1. / 2. { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}

/// Convert hue `h` (degrees), saturation `s` and lightness `l`
/// (percent) back to sRGB.  `s` and `l` are clamped to \[0, 100\] and
/// `h` is taken modulo 360.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RGB8 {
    let h = h.rem_euclid(360.) / 360.;
    let s = s.clamp(0., 100.) / 100.;
    let l = l.clamp(0., 100.) / 100.;
    let (r, g, b) = if s == 0. {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        (hue_to_rgb(p, q, h + 1. / 3.),
         hue_to_rgb(p, q, h),
         hue_to_rgb(p, q, h - 1. / 3.))
    };
    let to_u8 = |x: f64| (x * 255.).round().clamp(0., 255.) as u8;
    RGB8::new(to_u8(r), to_u8(g), to_u8(b))
}

impl Hsl {
    /// Back to sRGB; see [`hsl_to_rgb`].
    pub fn to_rgb(&self) -> RGB8 {
        hsl_to_rgb(self.h as f64, self.s as f64, self.l as f64)
    }

    /// `hsla(h, s%, l%, a)`.
    pub fn with_alpha(&self, a: f64) -> String {
        format!("hsla({}, {}%, {}%, {a})", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// A color in the OKLCH space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Oklch {
    /// Perceptual lightness as a percentage, 0 to 100.
    pub l: f64,
    /// Chroma, 0 to about 0.37 for sRGB colors.
    pub c: f64,
    /// Hue in degrees in \[0, 360).  Meaningless when the chroma is 0.
    pub h: f64,
}

/// sRGB transfer function, inverted.
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Convert to OKLCH through linear sRGB, LMS and OKLab.
///
/// See <https://bottosson.github.io/posts/oklab/>; the matrix
/// coefficients are those of the reference implementation.
pub fn to_oklch(r: u8, g: u8, b: u8) -> Oklch {
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);

    let l_ = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
    let m_ = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
    let s_ = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

    let l = 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_;
    let a = 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_;
    let b = 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_;

    let h = b.atan2(a).to_degrees();
    let h = if h < 0. { h + 360. } else { h };
    // -1e-14 + 360 rounds to 360.
    let h = if h >= 360. { 0. } else { h };
    Oklch { l: l * 100., c: a.hypot(b), h }
}

impl Oklch {
    // Chroma that prints as 0.000.
    fn is_achromatic(&self) -> bool { self.c < 0.0005 }

    fn coords(&self) -> String {
        let h = if self.is_achromatic() { 0. } else { self.h };
        format!("{:.1}% {:.3} {:.1}", self.l, self.c, h)
    }

    /// `oklch(L% C H / a)`.
    pub fn with_alpha(&self, a: f64) -> String {
        format!("oklch({} / {a})", self.coords())
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({})", self.coords())
    }
}

/// # Display strings
impl Color {
    /// The hex value: `#rrggbb`, or `#rrggbbaa` when the color has
    /// alpha.
    pub fn hex(&self) -> String {
        if self.has_alpha { to_hex8(self.r, self.g, self.b, self.a) }
        else { to_hex(self.r, self.g, self.b) }
    }

    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn css_rgb(&self) -> String {
        let Color { r, g, b, a, .. } = *self;
        if self.has_alpha { format!("rgba({r}, {g}, {b}, {a})") }
        else { format!("rgb({r}, {g}, {b})") }
    }

    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    pub fn css_hsl(&self) -> String {
        let hsl = to_hsl(self.r, self.g, self.b);
        if self.has_alpha { hsl.with_alpha(self.a) } else { hsl.to_string() }
    }

    /// `oklch(L% C H)` or `oklch(L% C H / a)`.
    pub fn css_oklch(&self) -> String {
        let oklch = to_oklch(self.r, self.g, self.b);
        if self.has_alpha { oklch.with_alpha(self.a) } else { oklch.to_string() }
    }
}

/// Every display string of one color, as offered for copying.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorFormats {
    /// Uppercase hex, 8 digits when translucent.
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub oklch: String,
}

impl ColorFormats {
    pub fn of(c: Color) -> Self {
        ColorFormats {
            hex: c.hex().to_ascii_uppercase(),
            rgb: c.css_rgb(),
            hsl: c.css_hsl(),
            oklch: c.css_oklch(),
        }
    }
}
