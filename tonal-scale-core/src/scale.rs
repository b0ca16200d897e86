//! The 101-step tonal ramp.
//!
//! Step `i` has CIELAB lightness `i`. The base color sits at the step
//! matching its own rounded lightness and is emitted unchanged; its LAB
//! chroma tapers linearly to zero at both ends of the ramp. Steps below the
//! base are then blended with the blend color under the Bézier envelope and
//! saturated by `satDarker`; steps above it are saturated by `satLighter`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blend::apply_blend;
use crate::color::{hex_to_rgb, lab_to_rgb, rgb_to_lab, LabColor, RgbColor};
use crate::easing::{ease_in_out_quad, intensity, intensity_curve};
use crate::error::{Result, TonalError};
use crate::params::TonalScaleParams;
use crate::saturation::apply_saturation;

/// Number of steps in every ramp, indices `0..=100`.
pub const STEPS: usize = 101;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TonalStep {
    pub index: usize,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TonalScale {
    pub color_scale: Vec<TonalStep>,
    /// Rounded LAB lightness of the base color, which is also its index.
    pub luminance: usize,
}

impl TonalScale {
    pub fn len(&self) -> usize {
        self.color_scale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.color_scale.is_empty()
    }

    pub fn step(&self, index: usize) -> Result<&TonalStep> {
        self.color_scale.get(index).ok_or(TonalError::IndexOutOfBounds {
            index,
            len: self.color_scale.len(),
        })
    }

    pub fn base_step(&self) -> Result<&TonalStep> {
        self.step(self.luminance)
    }

    pub fn steps(&self) -> &[TonalStep] {
        &self.color_scale
    }

    pub fn hexes(&self) -> impl Iterator<Item = &str> {
        self.color_scale.iter().map(|step| step.hex.as_str())
    }
}

/// Rounded LAB lightness of `rgb`, in `0..=100`.
pub fn lab_luminance(rgb: RgbColor) -> usize {
    rgb_to_lab(rgb).l.round().clamp(0.0, 100.0) as usize
}

// Chroma is full at the base index and falls to zero at 0 and 100. The
// branches are only reached when their denominator is non-zero.
fn scale_chroma(component: f64, i: usize, luminance: usize) -> f64 {
    match i.cmp(&luminance) {
        Ordering::Less => i as f64 / luminance as f64 * component,
        Ordering::Equal => component,
        Ordering::Greater => (100 - i) as f64 / (100 - luminance) as f64 * component,
    }
}

pub fn generate_tonal_scale(params: &TonalScaleParams) -> Result<TonalScale> {
    params.validate()?;

    let base_rgb = hex_to_rgb(&params.color_hex)?;
    let base_lab = rgb_to_lab(base_rgb);
    let luminance = lab_luminance(base_rgb);

    let blend_enabled = params.blend_enabled();
    let strength = params.blend_strength / 100.0;
    let [blend_r, blend_g, blend_b] = params.blend_rgb().to_unit();
    let curve = intensity_curve((params.middle + 50.0) / 100.0, params.spread / 100.0);
    let sat_darker = params.sat_darker / 100.0;
    let sat_lighter = params.sat_lighter / 100.0;

    debug!(
        base = %params.color_hex,
        luminance,
        blend_mode = %params.blend_mode,
        blend_enabled,
        "generating tonal scale"
    );

    let mut color_scale = Vec::with_capacity(STEPS);
    for i in 0..STEPS {
        let lab = LabColor::new(
            i as f64,
            scale_chroma(base_lab.a, i, luminance),
            scale_chroma(base_lab.b, i, luminance),
        );

        let rgb = match i.cmp(&luminance) {
            Ordering::Equal => base_rgb,
            Ordering::Less => {
                let mut rgb = lab_to_rgb(lab);
                if blend_enabled {
                    let weight = intensity(&curve, i, luminance - 1);
                    rgb = apply_blend(
                        rgb,
                        params.blend_mode,
                        strength,
                        blend_r,
                        blend_g,
                        blend_b,
                        weight,
                    )?;
                }
                if sat_darker > 0.0 {
                    let weight = ease_in_out_quad(luminance as f64, i as f64);
                    rgb = apply_saturation(rgb, sat_darker, weight)?;
                }
                rgb
            }
            Ordering::Greater => {
                let mut rgb = lab_to_rgb(lab);
                if sat_lighter > 0.0 {
                    let weight = ease_in_out_quad((100 - luminance) as f64, (i - luminance) as f64);
                    rgb = apply_saturation(rgb, sat_lighter, weight)?;
                }
                rgb
            }
        };

        color_scale.push(TonalStep {
            index: i,
            hex: rgb.to_hex(),
        });
    }

    Ok(TonalScale {
        color_scale,
        luminance,
    })
}
