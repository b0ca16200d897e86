use super::{HslColor, HsvColor, RgbColor};

/// Hue shared by the HSV and HSL models, in degrees `[0, 360)`.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (sector * 60.0).rem_euclid(360.0)
}

pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    HsvColor {
        h: hue_degrees(r, g, b, max, delta),
        s: if max == 0.0 { 0.0 } else { delta / max },
        v: max,
    }
}

pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    let HsvColor { s, v, .. } = hsv;
    let scaled = (hsv.h / 360.0).rem_euclid(1.0) * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RgbColor::from_unit(r, g, b)
}

pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    HslColor {
        h: hue_degrees(r, g, b, max, delta),
        s,
        l,
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let HslColor { s, l, .. } = hsl;
    if s == 0.0 {
        return RgbColor::from_unit(l, l, l);
    }

    let h = (hsl.h / 360.0).rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    RgbColor::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(RgbColor::new(255, 0, 0));
        assert_close(red.h, 0.0);
        assert_close(red.s, 1.0);
        assert_close(red.v, 1.0);

        let green = rgb_to_hsv(RgbColor::new(0, 255, 0));
        assert_close(green.h, 120.0);

        let blue = rgb_to_hsv(RgbColor::new(0, 0, 255));
        assert_close(blue.h, 240.0);

        let magenta = rgb_to_hsv(RgbColor::new(255, 0, 128));
        assert!(magenta.h > 300.0 && magenta.h < 360.0);
    }

    #[test]
    fn test_rgb_to_hsv_grey_has_zero_hue() {
        let grey = rgb_to_hsv(RgbColor::new(128, 128, 128));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);

        let black = rgb_to_hsv(RgbColor::BLACK);
        assert_eq!(black, HsvColor::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_round_trip() {
        for rgb in [
            RgbColor::new(125, 75, 255),
            RgbColor::new(237, 115, 95),
            RgbColor::new(12, 200, 33),
            RgbColor::new(255, 255, 0),
            RgbColor::new(1, 2, 3),
        ] {
            assert_eq!(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn test_hsv_to_rgb_wraps_hue() {
        assert_eq!(
            hsv_to_rgb(HsvColor::new(360.0, 1.0, 1.0)),
            RgbColor::new(255, 0, 0)
        );
        assert_eq!(
            hsv_to_rgb(HsvColor::new(-120.0, 1.0, 1.0)),
            RgbColor::new(0, 0, 255)
        );
    }

    #[test]
    fn test_rgb_to_hsl() {
        let hsl = rgb_to_hsl(RgbColor::new(255, 0, 0));
        assert_close(hsl.h, 0.0);
        assert_close(hsl.s, 1.0);
        assert_close(hsl.l, 0.5);

        let grey = rgb_to_hsl(RgbColor::new(51, 51, 51));
        assert_eq!(grey.s, 0.0);
        assert_close(grey.l, 0.2);
    }

    #[test]
    fn test_hsl_round_trip() {
        for rgb in [
            RgbColor::new(125, 75, 255),
            RgbColor::new(237, 115, 95),
            RgbColor::new(0, 128, 128),
            RgbColor::new(250, 250, 240),
        ] {
            assert_eq!(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(
            hsl_to_rgb(HslColor::new(200.0, 0.0, 1.0)),
            RgbColor::WHITE
        );
    }
}
