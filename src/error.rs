//! Why a color string was rejected.

use thiserror::Error;

/// Reasons a string is not accepted as a [`Color`](crate::Color).
///
/// None of these are fatal: a caller that only wants to know whether
/// there is a swatch to show should use [`parse`](crate::parse), which
/// maps every variant to `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Not an `rgb()`/`rgba()` (or hex) form, e.g. `transparent` or a
    /// color in another color space.
    #[error("unsupported color syntax: {0:?}")]
    Unsupported(String),

    /// A channel is larger than 255.
    #[error("channel value {0} out of range 0..=255")]
    ChannelOutOfRange(u32),

    /// The alpha component is outside \[0, 1\].
    #[error("alpha value {0} out of range 0..=1")]
    AlphaOutOfRange(f64),
}
