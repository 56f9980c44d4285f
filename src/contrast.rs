//! WCAG 2 contrast badges.
//!
//! A swatch is rated against plain white and plain black only, which is
//! what a style guide needs to say which text color goes on it.

use std::fmt;

/// WCAG relative luminance of an sRGB color, in \[0, 1\].
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    // WCAG 2 still publishes 0.03928 as the threshold (sRGB says 0.04045);
    // no 8-bit value falls between the two.
    fn linear(c: u8) -> f64 {
        let c = c as f64 / 255.;
        if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
    }
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio of two luminances, in \[1, 21\].  The order of the
/// arguments does not matter.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Conformance level reached by a contrast ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WcagLevel {
    /// ≥ 7:1, enhanced contrast for body text.
    Aaa,
    /// ≥ 4.5:1, minimum contrast for body text.
    Aa,
    /// ≥ 3:1, minimum contrast for large text only.
    AaLarge,
    /// Below 3:1.
    Fail,
}

impl WcagLevel {
    /// Text of the badge.
    pub fn label(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Fail => "Fail",
        }
    }

    pub fn pass(self) -> bool { !matches!(self, WcagLevel::Fail) }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a contrast ratio.  Thresholds are inclusive.
pub fn wcag_level(ratio: f64) -> WcagLevel {
    if ratio >= 7. { WcagLevel::Aaa }
    else if ratio >= 4.5 { WcagLevel::Aa }
    else if ratio >= 3. { WcagLevel::AaLarge }
    else { WcagLevel::Fail }
}

/// Contrast of a color against one background.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContrastScore {
    pub ratio: f64,
    /// The ratio as shown on the badge, e.g. `"4.54:1"`.
    pub ratio_text: String,
    pub wcag: WcagLevel,
}

impl ContrastScore {
    fn new(ratio: f64) -> Self {
        ContrastScore { ratio, ratio_text: format!("{ratio:.2}:1"),
                        wcag: wcag_level(ratio) }
    }
}

/// The text color to prefer on a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Background {
    White,
    Black,
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Background::White => "white",
                                 Background::Black => "black" })
    }
}

/// Contrast of one color against white and against black.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContrastResult {
    pub luminance: f64,
    pub white: ContrastScore,
    pub black: ContrastScore,
    pub best_choice: Background,
}

/// Rate an opaque color against white and black.
///
/// The alpha channel is not an input: callers must not show the
/// result for translucent colors (see
/// [`RGBColor::contrast`](crate::RGBColor::contrast)).
pub fn evaluate(r: u8, g: u8, b: u8) -> ContrastResult {
    let luminance = luminance(r, g, b);
    let white = ContrastScore::new(contrast_ratio(luminance, 1.));
    let black = ContrastScore::new(contrast_ratio(luminance, 0.));
    // Ties go to white.
    let best_choice = if white.ratio >= black.ratio { Background::White }
                      else { Background::Black };
    ContrastResult { luminance, white, black, best_choice }
}
