use crate::blend::require_unit;
use crate::color::{hsv_to_rgb, rgb_to_hsv, HsvColor, RgbColor};
use crate::error::Result;

/// Pushes HSV saturation toward 1 by `saturation * intensity` of the
/// remaining headroom. Both inputs must be in `[0, 1]`.
pub fn apply_saturation(rgb: RgbColor, saturation: f64, intensity: f64) -> Result<RgbColor> {
    require_unit(saturation, "Saturation")?;
    require_unit(intensity, "Intensity")?;

    let hsv = rgb_to_hsv(rgb);
    let boosted = hsv.s + (1.0 - hsv.s) * saturation * intensity;

    Ok(hsv_to_rgb(HsvColor::new(hsv.h, boosted, hsv.v)))
}
