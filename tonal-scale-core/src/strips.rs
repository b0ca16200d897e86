//! Views over a ramp: the subsets of steps shown side by side, each step's
//! nearest accessible partners, and the sampled blend envelope.

use serde::{Deserialize, Serialize};

use crate::color::hex_to_rgb;
use crate::contrast::{
    contrast_ratio_exact, find_closest, round_to_one_decimal, ContrastCandidate, Direction,
    LARGE_TEXT, NORMAL_TEXT,
};
use crate::easing::{intensity, intensity_curve};
use crate::params::TonalScaleParams;
use crate::scale::{TonalScale, TonalStep};

pub const EXTENDED_SCALE_INDICES: [usize; 18] = [
    0, 5, 10, 15, 20, 25, 30, 35, 40, 50, 60, 70, 80, 90, 95, 98, 99, 100,
];

pub const KEY_SCALE_INDICES: [usize; 16] =
    [0, 10, 20, 25, 30, 35, 40, 50, 60, 70, 80, 90, 95, 98, 99, 100];

pub const LIGHT_LINE_COLOR: &str = "#e2e8f0";
pub const DARK_LINE_COLOR: &str = "#0f172a";

fn strip(scale: &TonalScale, indices: &[usize]) -> Vec<TonalStep> {
    let mut picked: Vec<usize> = indices.to_vec();
    picked.push(scale.luminance);
    picked.sort_unstable();
    picked.dedup();

    picked
        .into_iter()
        .filter_map(|index| scale.color_scale.get(index).cloned())
        .collect()
}

/// Every step of the ramp, in order.
pub fn full_strip(scale: &TonalScale) -> Vec<TonalStep> {
    scale.color_scale.clone()
}

/// The extended preset plus the base step.
pub fn extended_strip(scale: &TonalScale) -> Vec<TonalStep> {
    strip(scale, &EXTENDED_SCALE_INDICES)
}

/// The key preset plus the base step.
pub fn key_strip(scale: &TonalScale) -> Vec<TonalStep> {
    strip(scale, &KEY_SCALE_INDICES)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneMetadata {
    pub tone: TonalStep,
    pub darker3: Option<ContrastCandidate>,
    pub darker45: Option<ContrastCandidate>,
    pub lighter3: Option<ContrastCandidate>,
    pub lighter45: Option<ContrastCandidate>,
}

/// Nearest 3:1 and 4.5:1 partners in both directions for every step.
pub fn build_metadata(scale: &TonalScale) -> Vec<ToneMetadata> {
    let steps = scale.steps();
    steps
        .iter()
        .map(|tone| ToneMetadata {
            tone: tone.clone(),
            darker3: find_closest(tone.index, steps, LARGE_TEXT, Direction::Darker),
            darker45: find_closest(tone.index, steps, NORMAL_TEXT, Direction::Darker),
            lighter3: find_closest(tone.index, steps, LARGE_TEXT, Direction::Lighter),
            lighter45: find_closest(tone.index, steps, NORMAL_TEXT, Direction::Lighter),
        })
        .collect()
}

/// The blend envelope sampled across the darker part of the ramp, for
/// drawing it over the swatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendDistribution {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Share of the ramp width covered by the plot.
    pub width_percent: usize,
    pub line_color: String,
}

pub fn blend_distribution(params: &TonalScaleParams, scale: &TonalScale) -> BlendDistribution {
    let luminance = scale.luminance;
    let curve = intensity_curve((params.middle + 50.0) / 100.0, params.spread / 100.0);
    let span = luminance.saturating_sub(1).max(1);

    let (x, y) = (0..luminance)
        .map(|i| (i as f64, intensity(&curve, i, span)))
        .unzip();

    BlendDistribution {
        x,
        y,
        width_percent: luminance.saturating_sub(1),
        line_color: pick_line_color(scale).to_string(),
    }
}

/// Light or dark line, whichever reads better against the middle of the
/// darker half. Ties go to the light line.
pub fn pick_line_color(scale: &TonalScale) -> &'static str {
    let sample = ((scale.luminance as f64) / 2.0).round() as usize;
    let Some(step) = scale.color_scale.get(sample.min(scale.len().saturating_sub(1))) else {
        return LIGHT_LINE_COLOR;
    };
    let (Ok(background), Ok(light), Ok(dark)) = (
        hex_to_rgb(&step.hex),
        hex_to_rgb(LIGHT_LINE_COLOR),
        hex_to_rgb(DARK_LINE_COLOR),
    ) else {
        return LIGHT_LINE_COLOR;
    };

    let light_ratio = round_to_one_decimal(contrast_ratio_exact(background, light));
    let dark_ratio = round_to_one_decimal(contrast_ratio_exact(background, dark));
    if dark_ratio > light_ratio {
        DARK_LINE_COLOR
    } else {
        LIGHT_LINE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbColor;
    use crate::scale::generate_tonal_scale;

    fn grey_scale(luminance: usize) -> TonalScale {
        TonalScale {
            color_scale: (0..=100)
                .map(|index| {
                    let level = (index as f64 * 2.55).round() as u8;
                    TonalStep {
                        index,
                        hex: RgbColor::new(level, level, level).to_hex(),
                    }
                })
                .collect(),
            luminance,
        }
    }

    fn indices(strip: &[TonalStep]) -> Vec<usize> {
        strip.iter().map(|step| step.index).collect()
    }

    #[test]
    fn test_extended_strip_inserts_base() {
        let scale = grey_scale(48);
        let strip = extended_strip(&scale);
        assert_eq!(
            indices(&strip),
            vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 48, 50, 60, 70, 80, 90, 95, 98, 99, 100]
        );
    }

    #[test]
    fn test_key_strip_does_not_duplicate_base() {
        let scale = grey_scale(50);
        let strip = key_strip(&scale);
        assert_eq!(indices(&strip), KEY_SCALE_INDICES.to_vec());
    }

    #[test]
    fn test_full_strip() {
        let scale = grey_scale(10);
        assert_eq!(full_strip(&scale).len(), 101);
    }

    #[test]
    fn test_metadata_matches_find_closest() {
        let scale = grey_scale(50);
        let metadata = build_metadata(&scale);
        assert_eq!(metadata.len(), 101);

        let mid = &metadata[50];
        assert_eq!(mid.tone.index, 50);
        assert_eq!(mid.darker45.as_ref().map(|c| c.index), Some(9));
        assert_eq!(mid.darker3.as_ref().map(|c| c.index), Some(21));
        assert_eq!(mid.lighter3.as_ref().map(|c| c.index), Some(87));
        assert_eq!(mid.lighter45, None);

        assert_eq!(metadata[0].darker3, None);
        assert_eq!(metadata[100].lighter3, None);
    }

    #[test]
    fn test_blend_distribution_shape() {
        let params = TonalScaleParams::default();
        let scale = grey_scale(41);
        let distribution = blend_distribution(&params, &scale);

        assert_eq!(distribution.x.len(), 41);
        assert_eq!(distribution.y.len(), 41);
        assert_eq!(distribution.width_percent, 40);
        assert_eq!(distribution.x[3], 3.0);
        assert_eq!(distribution.y[0], 0.0);
        assert_eq!(distribution.y[40], 0.0);
        assert!(distribution.y.iter().all(|y| (0.0..=1.0).contains(y)));
        assert!(distribution.y[20] > 0.5);
    }

    #[test]
    fn test_blend_distribution_at_black_base() {
        let distribution = blend_distribution(&TonalScaleParams::default(), &grey_scale(0));
        assert!(distribution.x.is_empty());
        assert_eq!(distribution.width_percent, 0);

        let distribution = blend_distribution(&TonalScaleParams::default(), &grey_scale(1));
        assert_eq!(distribution.y, vec![0.0]);
    }

    #[test]
    fn test_line_color() {
        assert_eq!(pick_line_color(&grey_scale(20)), LIGHT_LINE_COLOR);
        assert_eq!(pick_line_color(&grey_scale(100)), DARK_LINE_COLOR);
        // #737373 sits at 3.8:1 against both lines.
        assert_eq!(pick_line_color(&grey_scale(90)), LIGHT_LINE_COLOR);
    }

    #[test]
    fn test_default_ramp_views() {
        let params = TonalScaleParams::default();
        let scale = generate_tonal_scale(&params).unwrap();
        let key = key_strip(&scale);
        assert!(key.iter().any(|step| step.hex == "#8000ff"));
        assert_eq!(blend_distribution(&params, &scale).width_percent, 40);
    }
}
