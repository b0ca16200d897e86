use super::{channel, LabColor, RgbColor};

/// CIE XYZ tristimulus values, `y` normalized so that white is 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// D65 reference white.
pub const REFERENCE_WHITE: XyzColor = XyzColor {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

// (6/29)^3 and (29/3)^3
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

// sRGB transfer function (IEC 61966-2-1)
fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.003_130_8 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

fn xyz_to_lab_pivot(value: f64) -> f64 {
    if value > EPSILON {
        value.cbrt()
    } else {
        (value * KAPPA + 16.0) / 116.0
    }
}

fn lab_to_xyz_pivot(value: f64) -> f64 {
    let cubed = value * value * value;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * value - 16.0) / KAPPA
    }
}

pub fn rgb_to_xyz(rgb: RgbColor) -> XyzColor {
    let [r, g, b] = rgb.to_unit().map(srgb_to_linear);

    XyzColor {
        x: r * 0.412_456_4 + g * 0.357_576_1 + b * 0.180_437_5,
        y: r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175,
        z: r * 0.019_333_9 + g * 0.119_192 + b * 0.950_304_1,
    }
}

pub fn xyz_to_rgb(xyz: XyzColor) -> RgbColor {
    let XyzColor { x, y, z } = xyz;
    let r = x * 3.240_454_2 + y * -1.537_138_5 + z * -0.498_531_4;
    let g = x * -0.969_266 + y * 1.876_010_8 + z * 0.041_556;
    let b = x * 0.055_643_4 + y * -0.204_025_9 + z * 1.057_225_2;

    RgbColor {
        r: channel(linear_to_srgb(r) * 255.0),
        g: channel(linear_to_srgb(g) * 255.0),
        b: channel(linear_to_srgb(b) * 255.0),
    }
}

pub fn rgb_to_lab(rgb: RgbColor) -> LabColor {
    let xyz = rgb_to_xyz(rgb);

    let x = xyz_to_lab_pivot(xyz.x / REFERENCE_WHITE.x);
    let y = xyz_to_lab_pivot(xyz.y / REFERENCE_WHITE.y);
    let z = xyz_to_lab_pivot(xyz.z / REFERENCE_WHITE.z);

    LabColor {
        l: 116.0 * y - 16.0,
        a: 500.0 * (x - y),
        b: 200.0 * (y - z),
    }
}

pub fn lab_to_rgb(lab: LabColor) -> RgbColor {
    let y = (lab.l + 16.0) / 116.0;
    let x = lab.a / 500.0 + y;
    let z = y - lab.b / 200.0;

    xyz_to_rgb(XyzColor {
        x: REFERENCE_WHITE.x * lab_to_xyz_pivot(x),
        y: REFERENCE_WHITE.y * lab_to_xyz_pivot(y),
        z: REFERENCE_WHITE.z * lab_to_xyz_pivot(z),
    })
}
