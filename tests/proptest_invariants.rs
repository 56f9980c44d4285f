//! Invariants of the conversions, the contrast engine and menu placement.

use proptest::prelude::*;
use swatchbook::{contrast_ratio, evaluate, hsl_to_rgb, luminance, place,
                 to_hsl, to_oklch, Color, MenuOptions, Rect, RGBColor, Size};

/// Unrounded HSL in degrees and percent, recomputed here from the
/// textbook formulas so the round trip does not depend on rounding.
fn exact_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64 / 255., g as f64 / 255., b as f64 / 255.);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    if max == min { return (0., 0., l * 100.) }
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let h = if max == r { ((g - b) / d).rem_euclid(6.) }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. };
    (h * 60., s * 100., l * 100.)
}

proptest! {
    #[test]
    fn hsl_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hsl = to_hsl(r, g, b);
        prop_assert!(hsl.h < 360);
        prop_assert!(hsl.s <= 100);
        prop_assert!(hsl.l <= 100);
    }

    #[test]
    fn exact_hsl_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let (h, s, l) = exact_hsl(r, g, b);
        let back = hsl_to_rgb(h, s, l);
        prop_assert!((back.r as i16 - r as i16).abs() <= 1, "{back:?}");
        prop_assert!((back.g as i16 - g as i16).abs() <= 1, "{back:?}");
        prop_assert!((back.b as i16 - b as i16).abs() <= 1, "{back:?}");
    }

    #[test]
    fn oklch_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let o = to_oklch(r, g, b);
        prop_assert!((-1e-6 ..= 100. + 1e-6).contains(&o.l), "{o:?}");
        prop_assert!(o.c >= 0. && o.c < 0.4, "{o:?}");
        prop_assert!((0. .. 360.).contains(&o.h), "{o:?}");
    }

    #[test]
    fn converters_are_idempotent(r in any::<u8>(), g in any::<u8>(),
                                 b in any::<u8>(), a in 0.0_f64 ..= 1.) {
        let c = Color::with_alpha(r, g, b, a);
        prop_assert_eq!(c.formats(), c.formats());
        prop_assert_eq!(evaluate(r, g, b), evaluate(r, g, b));
    }

    #[test]
    fn ratio_symmetric_and_bounded(x in 0.0_f64 ..= 1., y in 0.0_f64 ..= 1.) {
        prop_assert_eq!(contrast_ratio(x, y), contrast_ratio(y, x));
        prop_assert_eq!(contrast_ratio(x, x), 1.);
        let ratio = contrast_ratio(x, y);
        prop_assert!((1. ..= 21. + 1e-9).contains(&ratio));
    }

    #[test]
    fn best_choice_has_the_higher_ratio(r in any::<u8>(), g in any::<u8>(),
                                        b in any::<u8>()) {
        let res = evaluate(r, g, b);
        prop_assert_eq!(res.luminance, luminance(r, g, b));
        let best = res.white.ratio.max(res.black.ratio);
        let chosen = match res.best_choice {
            swatchbook::Background::White => res.white.ratio,
            swatchbook::Background::Black => res.black.ratio,
        };
        prop_assert_eq!(chosen, best);
    }

    #[test]
    fn hex_follows_alpha(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(),
                         a in 0.0_f64 .. 1.) {
        prop_assert_eq!(Color::with_alpha(r, g, b, a).formats().hex.len(), 9);
        prop_assert_eq!(Color::new(r, g, b).formats().hex.len(), 7);
    }

    #[test]
    fn menu_stays_inside_viewport(
        ax in -200.0_f64 .. 1200., ay in -200.0_f64 .. 900.,
        aw in 0.0_f64 .. 200., ah in 0.0_f64 .. 100.,
        pw in 1.0_f64 .. 700., ph in 1.0_f64 .. 500.,
        vw in 100.0_f64 .. 1200., vh in 100.0_f64 .. 900.,
    ) {
        let opts = MenuOptions::default();
        let p = place(Rect::new(ax, ay, aw, ah), Size::new(pw, ph),
                      Size::new(vw, vh), opts);
        prop_assert!(p.left >= opts.margin - 1e-9);
        prop_assert!(p.top >= opts.margin - 1e-9);
        if pw <= vw - 2. * opts.margin {
            prop_assert!(p.left + pw <= vw - opts.margin + 1e-9);
        }
        if ph <= vh - 2. * opts.margin {
            prop_assert!(p.top + ph <= vh - opts.margin + 1e-9);
        }
    }
}

#[test]
fn narrow_viewport_near_right_edge() {
    // Anchor ending at x = 590 in a 600px viewport, 300px panel.
    let opts = MenuOptions { gap: 8., margin: 10. };
    let anchor = Rect::new(560., 100., 30., 24.);
    let p = place(anchor, Size::new(300., 200.), Size::new(600., 800.), opts);
    assert!(p.left >= 10.);
    assert!(p.left + 300. <= 590.);
    assert_eq!(p.left, anchor.left - 8. - 300.);
}
