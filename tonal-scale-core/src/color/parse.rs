use super::RgbColor;
use crate::error::{Result, TonalError};

fn hex_digits(hex: &str) -> &str {
    let trimmed = hex.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

/// Accepts `RGB` or `RRGGBB`, with or without a leading `#`, in any case.
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex_digits(hex);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expands shorthand and lowercases, always returning `#rrggbb`.
///
/// Returns `None` for anything [`is_valid_hex`] rejects.
pub fn normalize_hex(hex: &str) -> Option<String> {
    if !is_valid_hex(hex) {
        return None;
    }

    let digits = hex_digits(hex);
    let mut normalized = String::with_capacity(7);
    normalized.push('#');
    if digits.len() == 3 {
        for c in digits.chars().map(|c| c.to_ascii_lowercase()) {
            normalized.push(c);
            normalized.push(c);
        }
    } else {
        normalized.push_str(&digits.to_ascii_lowercase());
    }
    Some(normalized)
}

pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    let normalized = normalize_hex(hex).ok_or_else(|| TonalError::InvalidHex(hex.to_string()))?;

    let mut bytes = [0u8; 3];
    hex::decode_to_slice(&normalized[1..], &mut bytes)
        .map_err(|_| TonalError::InvalidHex(hex.to_string()))?;

    Ok(RgbColor::from(bytes))
}

pub fn rgb_to_hex(rgb: RgbColor) -> String {
    format!("#{}", hex::encode([rgb.r, rgb.g, rgb.b]))
}
