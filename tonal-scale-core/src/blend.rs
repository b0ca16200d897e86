//! Blend modes used to tint the darker half of a ramp.
//!
//! Every mode except [`BlendMode::Hue`] is a separable per-channel formula
//! on unit values, `a` being the base channel and `b` the blend channel.
//! The result is then mixed back with the base channel by
//! `intensity * strength`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{channel, hsl_to_rgb, rgb_to_hsl, HslColor, RgbColor};
use crate::error::{Result, TonalError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Darken,
    Multiply,
    ColorBurn,
    Lighten,
    Screen,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    VividLight,
    Hue,
}

impl BlendMode {
    pub const ALL: [BlendMode; 11] = [
        BlendMode::Darken,
        BlendMode::Multiply,
        BlendMode::ColorBurn,
        BlendMode::Lighten,
        BlendMode::Screen,
        BlendMode::ColorDodge,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::VividLight,
        BlendMode::Hue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Darken => "darken",
            BlendMode::Multiply => "multiply",
            BlendMode::ColorBurn => "colorburn",
            BlendMode::Lighten => "lighten",
            BlendMode::Screen => "screen",
            BlendMode::ColorDodge => "colordodge",
            BlendMode::Overlay => "overlay",
            BlendMode::SoftLight => "softlight",
            BlendMode::HardLight => "hardlight",
            BlendMode::VividLight => "vividlight",
            BlendMode::Hue => "hue",
        }
    }

    /// The per-channel formula, or `None` for modes that are not separable.
    fn channel_formula(self) -> Option<fn(f64, f64) -> f64> {
        let formula: fn(f64, f64) -> f64 = match self {
            BlendMode::Darken => f64::min,
            BlendMode::Multiply => |a, b| a * b,
            BlendMode::ColorBurn => |a, b| {
                if b > 0.0 {
                    1.0 - ((1.0 - a) / b).min(1.0)
                } else {
                    0.0
                }
            },
            BlendMode::Lighten => f64::max,
            BlendMode::Screen => |a, b| 1.0 - (1.0 - a) * (1.0 - b),
            BlendMode::ColorDodge => |a, b| {
                if b < 1.0 {
                    (a / (1.0 - b)).min(1.0)
                } else {
                    1.0
                }
            },
            BlendMode::Overlay => |a, b| {
                if a <= 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            },
            BlendMode::SoftLight => |a, b| {
                if b <= 0.5 {
                    a - (1.0 - 2.0 * b) * a * (1.0 - a)
                } else {
                    a + (2.0 * b - 1.0) * (a.sqrt() - a)
                }
            },
            BlendMode::HardLight => |a, b| {
                if b <= 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            },
            BlendMode::VividLight => |a, b| {
                if b <= 0.5 {
                    1.0 - ((1.0 - a) / (2.0 * b)).min(1.0)
                } else {
                    (a / (2.0 * (1.0 - b))).min(1.0)
                }
            },
            BlendMode::Hue => return None,
        };
        Some(formula)
    }

    /// Blends a single unit channel. `None` for [`BlendMode::Hue`].
    pub fn blend_channel(self, base: f64, blend: f64) -> Option<f64> {
        self.channel_formula().map(|formula| formula(base, blend))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| TonalError::UnknownBlendMode(s.to_string()))
    }
}

pub(crate) fn require_unit(value: f64, parameter: &'static str) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TonalError::OutOfRange { parameter, value })
    }
}

/// Blends `rgb` toward the blend color `(blend_r, blend_g, blend_b)`.
///
/// All five numeric inputs must be in `[0, 1]`; anything else is an
/// [`TonalError::OutOfRange`] naming the argument. A black blend color, a
/// zero `intensity` or a zero `strength` returns `rgb` untouched.
pub fn apply_blend(
    rgb: RgbColor,
    mode: BlendMode,
    strength: f64,
    blend_r: f64,
    blend_g: f64,
    blend_b: f64,
    intensity: f64,
) -> Result<RgbColor> {
    require_unit(blend_r, "Red")?;
    require_unit(blend_g, "Green")?;
    require_unit(blend_b, "Blue")?;
    require_unit(intensity, "Intensity")?;
    require_unit(strength, "Blend strength")?;

    if (blend_r == 0.0 && blend_g == 0.0 && blend_b == 0.0) || intensity == 0.0 || strength == 0.0
    {
        return Ok(rgb);
    }

    let weight = intensity * strength;

    let Some(formula) = mode.channel_formula() else {
        let blend = RgbColor::from_unit(blend_r, blend_g, blend_b);
        return Ok(blend_hue(rgb, blend, weight));
    };

    let mix = |base: u8, blend: f64| {
        let a = f64::from(base) / 255.0;
        channel((a * (1.0 - weight) + formula(a, blend) * weight) * 255.0)
    };

    Ok(RgbColor {
        r: mix(rgb.r, blend_r),
        g: mix(rgb.g, blend_g),
        b: mix(rgb.b, blend_b),
    })
}

// Hue of the blend color, saturation and lightness of the base.
fn blend_hue(rgb: RgbColor, blend: RgbColor, weight: f64) -> RgbColor {
    let base_hsl = rgb_to_hsl(rgb);
    let blend_hsl = rgb_to_hsl(blend);
    let target = hsl_to_rgb(HslColor::new(blend_hsl.h, base_hsl.s, base_hsl.l));

    let lerp = |from: u8, to: u8| {
        let from = f64::from(from);
        channel(from + weight * (f64::from(to) - from))
    };

    RgbColor {
        r: lerp(rgb.r, target.r),
        g: lerp(rgb.g, target.g),
        b: lerp(rgb.b, target.b),
    }
}
