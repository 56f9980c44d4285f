//! Reading colors back from computed styles.

use std::str::FromStr;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use crate::{Color, ParseColorError};

lazy_static! {
    // The legacy comma syntax, as serialized by `getComputedStyle`.
    static ref RGB_FN: Regex = Regex::new(
        r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*(\d*\.?\d+)\s*)?\)$"
    ).expect("valid rgb() pattern");
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Returns `None` for anything else (`transparent`, `oklch(…)`,
/// garbage): there is then simply no swatch to display.  Hex notation
/// is accepted as well, see [`parse_hex`].
///
/// ```
/// use swatchbook::parse;
/// let c = parse("rgba(59, 130, 246, 0.4)").unwrap();
/// assert_eq!((c.r(), c.g(), c.b(), c.a()), (59, 130, 246, 0.4));
/// assert!(c.has_alpha());
/// assert!(parse("not-a-color").is_none());
/// ```
pub fn parse(s: &str) -> Option<Color> {
    s.parse().ok()
}

fn channel(m: Option<regex::Match<'_>>) -> Result<u8, ParseColorError> {
    // The pattern guarantees the three channel groups are present.
    let digits = m.map_or("", |m| m.as_str());
    let v = digits.parse::<u32>().unwrap_or(u32::MAX);
    u8::try_from(v).map_err(|_| ParseColorError::ChannelOutOfRange(v))
}

fn rgb_from_captures(caps: &Captures<'_>, s: &str) -> Result<Color, ParseColorError> {
    let r = channel(caps.get(1))?;
    let g = channel(caps.get(2))?;
    let b = channel(caps.get(3))?;
    let a = match caps.get(4) {
        None => 1.,
        Some(m) => m.as_str().parse::<f64>()
            .map_err(|_| ParseColorError::Unsupported(s.to_string()))?,
    };
    if !(0. ..= 1.).contains(&a) {
        return Err(ParseColorError::AlphaOutOfRange(a))
    }
    Ok(Color::with_alpha(r, g, b, a))
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (case-insensitive).
pub fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let unsupported = || ParseColorError::Unsupported(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(unsupported)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(unsupported())
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i .. i + 1], 16);
    let pair = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16);
    let res = match hex.len() {
        3 | 4 => {
            let short = |i| digit(i).map(|d| d * 17);
            let a = if hex.len() == 4 { short(3)? } else { 255 };
            (short(0)?, short(1)?, short(2)?, a)
        }
        6 | 8 => {
            let a = if hex.len() == 8 { pair(6)? } else { 255 };
            (pair(0)?, pair(2)?, pair(4)?, a)
        }
        _ => return Err(unsupported()),
    };
    let (r, g, b, a) = res;
    if a == 255 { Ok(Color::new(r, g, b)) }
    else { Ok(Color::with_alpha(r, g, b, a as f64 / 255.)) }
}

impl From<std::num::ParseIntError> for ParseColorError {
    fn from(e: std::num::ParseIntError) -> Self {
        ParseColorError::Unsupported(e.to_string())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let res = if s.starts_with('#') {
            parse_hex(s)
        } else {
            match RGB_FN.captures(s) {
                Some(caps) => rgb_from_captures(&caps, s),
                None => Err(ParseColorError::Unsupported(s.to_string())),
            }
        };
        if let Err(e) = &res {
            tracing::debug!(input = s, error = %e, "color rejected");
        }
        res
    }
}
