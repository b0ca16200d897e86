//! # tonal-scale
//!
//! Perceptual tonal ramps from a single base color.
//!
//! ## Features
//!
//! - **Tonal Scale**: 101 steps indexed by CIELAB lightness, with the base color pinned at its own lightness
//! - **Blending**: Eleven blend modes applied to the darker half under an adjustable Bézier envelope
//! - **Saturation**: Independent saturation boosts for the darker and lighter halves
//! - **Contrast**: WCAG 2.x contrast ratios and nearest 3:1 / 4.5:1 partners for every step
//! - **Color Spaces**: sRGB, HSV, HSL, CIE XYZ and CIELAB (D65) conversions
//! - **Sharing**: Params round-trip through JSON and URL query strings
//! - **Export**: SVG swatch sheets carrying their own params
//!
//! ## Quick Start
//!
//! ```rust
//! use tonal_scale::{generate_tonal_scale, BlendMode, Result, TonalScaleParams};
//!
//! # fn main() -> Result<()> {
//! let mut params = TonalScaleParams::new("#7d4bff");
//! params.blend_mode = BlendMode::Overlay;
//! params.blend_strength = 65.0;
//! params = params.with_blend_hex("#ed735f")?;
//!
//! let scale = generate_tonal_scale(&params)?;
//! assert_eq!(scale.luminance, 48);
//! assert_eq!(scale.base_step()?.hex, "#7d4bff");
//! assert_eq!(scale.color_scale[0].hex, "#000000");
//! # Ok(())
//! # }
//! ```
//!
//! ### Contrast
//!
//! ```rust
//! use tonal_scale::{find_closest, generate_tonal_scale, Direction, TonalScaleParams, NORMAL_TEXT};
//!
//! # fn main() -> tonal_scale::Result<()> {
//! let scale = generate_tonal_scale(&TonalScaleParams::new("#336699"))?;
//! if let Some(partner) = find_closest(scale.luminance, &scale.color_scale, NORMAL_TEXT, Direction::Lighter) {
//!     assert!(partner.ratio >= 4.5);
//!     assert!(partner.index > scale.luminance);
//! }
//! # Ok(())
//! # }
//! ```

pub mod blend;
pub mod color;
pub mod contrast;
pub mod easing;
pub mod error;
pub mod export;
pub mod params;
pub mod saturation;
pub mod scale;
pub mod snapshot;
pub mod strips;

// Re-export color types
pub use color::{
    hex_to_rgb, hsl_to_rgb, hsv_to_rgb, is_valid_hex, lab_to_rgb, normalize_hex, rgb_to_hex,
    rgb_to_hsl, rgb_to_hsv, rgb_to_lab, HslColor, HsvColor, LabColor, RgbColor,
};
pub use error::{Result, TonalError};

// Re-export generation
pub use blend::{apply_blend, BlendMode};
pub use easing::{cubic_bezier, ease_in_out_quad, intensity, intensity_curve, CubicBezier};
pub use params::{clamp_control, ControlId, TonalScaleParams};
pub use saturation::apply_saturation;
pub use scale::{generate_tonal_scale, TonalScale, TonalStep, STEPS};

// Re-export analysis and export
pub use contrast::{
    find_closest, format_contrast_ratio, get_contrast_ratio, ContrastCandidate, Direction,
    LARGE_TEXT, NORMAL_TEXT,
};
pub use export::{build_scale_svg, ExportMetadata};
pub use snapshot::TonalScaleSnapshot;
pub use strips::{
    blend_distribution, build_metadata, extended_strip, key_strip, BlendDistribution,
    ToneMetadata,
};

/// Current version of tonal-scale
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_cover_the_pipeline() {
        let params = TonalScaleParams::default();
        let scale = generate_tonal_scale(&params).unwrap();
        let metadata = build_metadata(&scale);
        assert_eq!(metadata.len(), STEPS);
        assert_eq!(BlendMode::ALL.len(), 11);
    }
}
