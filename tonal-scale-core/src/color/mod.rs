//! Color models and the conversions between them.
//!
//! Conventions used throughout the crate:
//!
//! - [`RgbColor`] stores 8-bit sRGB channels. Every conversion that produces
//!   one rounds to the nearest integer and clamps to `0..=255`.
//! - [`HsvColor`] and [`HslColor`] carry hue in degrees `[0, 360)` and
//!   saturation/value/lightness as unit floats `[0, 1]`.
//! - [`LabColor`] is CIE L\*a\*b\* relative to the D65 white point, with
//!   `l` in `[0, 100]` and unbounded signed `a`/`b`.

mod cylindrical;
mod lab;
mod parse;

pub use cylindrical::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use lab::{lab_to_rgb, rgb_to_lab, rgb_to_xyz, xyz_to_rgb, XyzColor, REFERENCE_WHITE};
pub use parse::{hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex};

use std::fmt;
use std::str::FromStr;

use crate::error::TonalError;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unit channels, rounding and clamping each one.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel(r * 255.0),
            g: channel(g * 255.0),
            b: channel(b * 255.0),
        }
    }

    /// Channels scaled to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(rgb: RgbColor) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Hue in degrees, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl HsvColor {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Picker-style rounded `(degrees, percent, percent)`.
    pub fn to_percent(self) -> (u16, u8, u8) {
        let h = self.h.round().rem_euclid(360.0) as u16;
        let s = (self.s * 100.0).round().clamp(0.0, 100.0) as u8;
        let v = (self.v * 100.0).round().clamp(0.0, 100.0) as u8;
        (h, s, v)
    }
}

/// Hue in degrees, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// CIE L\*a\*b\* (D65).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Distance from the neutral axis.
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// Rounds and clamps a `0..=255` channel value.
pub(crate) fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
