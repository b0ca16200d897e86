//! WCAG 2.x relative luminance and contrast ratios, and the search for the
//! nearest accessible partner of a ramp step.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::{hex_to_rgb, RgbColor};
use crate::error::Result;
use crate::scale::TonalStep;

/// Minimum ratio for large text and UI components (WCAG AA).
pub const LARGE_TEXT: f64 = 3.0;
/// Minimum ratio for body text (WCAG AA).
pub const NORMAL_TEXT: f64 = 4.5;

/// Which way to walk the ramp from the origin step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward index 0.
    Darker,
    /// Toward index 100.
    Lighter,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Darker => f.write_str("darker"),
            Direction::Lighter => f.write_str("lighter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastCandidate {
    pub index: usize,
    pub hex: String,
    pub ratio: f64,
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(rgb: RgbColor) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Unrounded contrast ratio in `[1, 21]`, independent of argument order.
pub fn contrast_ratio_exact(first: RgbColor, second: RgbColor) -> f64 {
    let a = relative_luminance(first);
    let b = relative_luminance(second);
    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Contrast ratio of two hex colors, rounded to one decimal place.
pub fn get_contrast_ratio(first: &str, second: &str) -> Result<f64> {
    let first = hex_to_rgb(first)?;
    let second = hex_to_rgb(second)?;
    Ok(round_to_one_decimal(contrast_ratio_exact(first, second)))
}

/// Formats a ratio as `21:1` or `4.5:1`.
pub fn format_contrast_ratio(ratio: f64) -> String {
    let rounded = round_to_one_decimal(ratio);
    if rounded.fract() == 0.0 {
        format!("{}:1", rounded as i64)
    } else {
        format!("{:.1}:1", rounded)
    }
}

/// Walks `scale` from `index` toward `direction` and returns the first step
/// whose rounded ratio against the origin reaches `ratio`.
///
/// `None` when the walk runs off the end of the ramp, which is expected for
/// anchors near black or white. Steps whose hex does not parse never match.
pub fn find_closest(
    index: usize,
    scale: &[TonalStep],
    ratio: f64,
    direction: Direction,
) -> Option<ContrastCandidate> {
    let origin = hex_to_rgb(&scale.get(index)?.hex).ok()?;

    let next = |cursor: usize| match direction {
        Direction::Darker => cursor.checked_sub(1),
        Direction::Lighter => cursor.checked_add(1),
    };
    let walk = std::iter::successors(next(index), |&cursor| next(cursor))
        .map_while(|cursor| scale.get(cursor));

    for candidate in walk {
        let Ok(rgb) = hex_to_rgb(&candidate.hex) else {
            continue;
        };
        let candidate_ratio = round_to_one_decimal(contrast_ratio_exact(origin, rgb));
        if candidate_ratio >= ratio {
            trace!(
                origin = index,
                found = candidate.index,
                ratio = candidate_ratio,
                %direction,
                "contrast candidate"
            );
            return Some(ContrastCandidate {
                index: candidate.index,
                hex: candidate.hex.clone(),
                ratio: candidate_ratio,
            });
        }
    }

    trace!(origin = index, threshold = ratio, %direction, "no contrast candidate");
    None
}
