//! Placement of a floating menu next to the element that opened it.
//!
//! The panel goes to the right of its anchor, else to the left, else
//! under the anchor's left edge, and is then pushed back inside the
//! viewport.  Vertically it is top-aligned with the anchor and flips to
//! bottom alignment when that would overflow.  Everything is in CSS
//! pixels; the caller applies the result as a fixed position.

use std::time::{Duration, Instant};

/// An axis-aligned rectangle, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    #[inline]
    pub fn right(&self) -> f64 { self.left + self.width }

    #[inline]
    pub fn bottom(&self) -> f64 { self.top + self.height }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self { Size { width, height } }
}

/// Spacing rules of the menu.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MenuOptions {
    /// Distance between the anchor and the panel.
    pub gap: f64,
    /// Minimal distance between the panel and the viewport edges.
    pub margin: f64,
}

impl Default for MenuOptions {
    fn default() -> Self { MenuOptions { gap: 8., margin: 10. } }
}

/// Top-left corner of the panel, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MenuPlacement {
    pub left: f64,
    pub top: f64,
}

fn place_x(anchor: &Rect, width: f64, viewport: f64, gap: f64, margin: f64) -> f64 {
    let max = viewport - margin;
    if width > viewport - 2. * margin {
        return margin
    }
    let mut left = if anchor.right() + gap + width <= max {
        anchor.right() + gap
    } else if anchor.left - gap - width >= margin {
        anchor.left - gap - width
    } else {
        tracing::debug!(anchor_left = anchor.left, width, viewport,
                        "menu fits on neither side");
        anchor.left
    };
    if left + width > max { left = max - width }
    if left < margin { left = margin }
    left
}

fn place_y(anchor: &Rect, height: f64, viewport: f64, margin: f64) -> f64 {
    let max = viewport - margin;
    if height > viewport - 2. * margin {
        return margin
    }
    let mut top = anchor.top;
    if top + height > max {
        top = anchor.bottom() - height;
        if top < margin { top = margin }
    }
    if top + height > max { top = max - height }
    if top < margin { top = margin }
    top
}

/// Position a panel of size `panel` next to `anchor` so that it stays
/// `opts.margin` away from the edges of `viewport` whenever it fits.
/// A panel larger than the viewport (less both margins) is pinned to
/// the margin on that axis.
///
/// ```
/// use swatchbook::{place, MenuOptions, Rect, Size};
/// let anchor = Rect::new(100., 50., 30., 20.);
/// let p = place(anchor, Size::new(200., 150.), Size::new(1024., 768.),
///               MenuOptions::default());
/// assert_eq!((p.left, p.top), (138., 50.));
/// ```
pub fn place(anchor: Rect, panel: Size, viewport: Size, opts: MenuOptions)
             -> MenuPlacement {
    MenuPlacement {
        left: place_x(&anchor, panel.width, viewport.width, opts.gap, opts.margin),
        top: place_y(&anchor, panel.height, viewport.height, opts.margin),
    }
}

/// Trailing-edge debounce of viewport resize notifications.
///
/// Each [`notify`](Self::notify) restarts the quiet period;
/// [`poll`](Self::poll) returns `true` exactly once, when `delay` has
/// elapsed since the last notification.  Time is supplied by the
/// caller.
#[derive(Clone, Debug)]
pub struct ResizeDebounce {
    delay: Duration,
    last: Option<Instant>,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self { ResizeDebounce { delay, last: None } }

    /// Record a resize at `now`.
    pub fn notify(&mut self, now: Instant) { self.last = Some(now) }

    /// Whether a resize is waiting to be handled.
    pub fn is_pending(&self) -> bool { self.last.is_some() }

    /// Return `true` if the pending resize should be handled at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last {
            Some(t) if now.saturating_duration_since(t) >= self.delay => {
                self.last = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ResizeDebounce {
    fn default() -> Self { ResizeDebounce::new(Duration::from_millis(150)) }
}
