//! Reference conversions that swatches must keep producing.

use approx::assert_abs_diff_eq;
use swatchbook::{evaluate, parse, to_oklch, Background, Color, ColorFormats,
                 RGBColor, WcagLevel};

#[test]
fn oklch_reference_conversions() {
    // (rgb, L %, C, H°) from the reference OKLab transform.
    let cases = [
        ((255, 0, 0), 62.7955, 0.257683, 29.2339),
        ((0, 255, 0), 86.6440, 0.294827, 142.4953),
        ((0, 0, 255), 45.2014, 0.313214, 264.0520),
        ((59, 130, 246), 62.3083, 0.188015, 259.8145),
    ];
    for ((r, g, b), l, c, h) in cases {
        let o = to_oklch(r, g, b);
        assert_abs_diff_eq!(o.l, l, epsilon = 1e-3);
        assert_abs_diff_eq!(o.c, c, epsilon = 1e-3);
        assert_abs_diff_eq!(o.h, h, epsilon = 1e-3);
    }
}

#[test]
fn red_formats() {
    let red = parse("rgb(255, 0, 0)").unwrap();
    assert_eq!(red.formats(), ColorFormats {
        hex: "#FF0000".into(),
        rgb: "rgb(255, 0, 0)".into(),
        hsl: "hsl(0, 100%, 50%)".into(),
        oklch: "oklch(62.8% 0.258 29.2)".into(),
    });
}

#[test]
fn translucent_formats_use_alpha_everywhere() {
    let c = parse("rgba(59, 130, 246, 0.4)").unwrap();
    assert_eq!((c.r(), c.g(), c.b(), c.a(), c.has_alpha()),
               (59, 130, 246, 0.4, true));
    let f = c.formats();
    assert_eq!(f.hex, "#3B82F666");
    assert_eq!(f.rgb, "rgba(59, 130, 246, 0.4)");
    assert_eq!(f.hsl, "hsla(217, 91%, 60%, 0.4)");
    assert_eq!(f.oklch, "oklch(62.3% 0.188 259.8 / 0.4)");
    assert!(c.contrast().is_none());
}

#[test]
fn badges_for_black_and_white() {
    let black = evaluate(0, 0, 0);
    assert_abs_diff_eq!(black.white.ratio, 21., epsilon = 1e-9);
    assert_abs_diff_eq!(black.black.ratio, 1., epsilon = 1e-9);
    assert_eq!(black.best_choice, Background::White);

    let white = Color::WHITE.contrast().unwrap();
    assert_abs_diff_eq!(white.white.ratio, 1., epsilon = 1e-9);
    assert_abs_diff_eq!(white.black.ratio, 21., epsilon = 1e-9);
    assert_eq!(white.best_choice, Background::Black);
}

#[test]
fn brand_blue_badges() {
    let r = parse("rgb(59, 130, 246)").unwrap().contrast().unwrap();
    assert_abs_diff_eq!(r.luminance, 0.235489, epsilon = 1e-6);
    assert_eq!(r.white.ratio_text, "3.68:1");
    assert_eq!(r.white.wcag, WcagLevel::AaLarge);
    assert_eq!(r.black.ratio_text, "5.71:1");
    assert_eq!(r.black.wcag, WcagLevel::Aa);
    assert_eq!(r.best_choice, Background::Black);
}

#[test]
fn unparseable_is_nothing_to_show() {
    for s in ["not-a-color", "", "transparent", "rgb(a, b, c)", "hsl(0, 0%, 0%)"] {
        assert!(parse(s).is_none(), "{s:?}");
    }
}
