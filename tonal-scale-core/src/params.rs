//! The inputs of a ramp and their (de)serialization.
//!
//! [`TonalScaleParams`] mirrors the controls a user manipulates: a base
//! color, a blend color and mode, and five sliders. Values arriving from the
//! outside (a saved JSON payload, a URL query) go through
//! [`TonalScaleParams::import_json`] / [`TonalScaleParams::from_query_string`],
//! which clamp every slider and fall back field by field on bad input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use url::form_urlencoded;

use crate::blend::BlendMode;
use crate::color::{hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex, RgbColor};
use crate::error::{Result, TonalError};

pub const DEFAULT_BASE_HEX: &str = "#8000ff";
pub const DEFAULT_BLEND_HEX: &str = "#000032";

/// One of the five numeric sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Strength,
    Middle,
    Spread,
    SatDarker,
    SatLighter,
}

impl ControlId {
    pub const ALL: [ControlId; 5] = [
        ControlId::Strength,
        ControlId::Middle,
        ControlId::Spread,
        ControlId::SatDarker,
        ControlId::SatLighter,
    ];

    /// Inclusive slider bounds.
    pub fn range(self) -> (f64, f64) {
        match self {
            ControlId::Middle => (-50.0, 50.0),
            ControlId::Strength | ControlId::Spread | ControlId::SatDarker | ControlId::SatLighter => {
                (0.0, 100.0)
            }
        }
    }

    /// Field name in serialized params.
    pub fn field(self) -> &'static str {
        match self {
            ControlId::Strength => "blendStrength",
            ControlId::Middle => "middle",
            ControlId::Spread => "spread",
            ControlId::SatDarker => "satDarker",
            ControlId::SatLighter => "satLighter",
        }
    }
}

pub fn clamp_control(id: ControlId, value: f64) -> f64 {
    let (min, max) = id.range();
    value.clamp(min, max)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TonalScaleParams {
    pub color_hex: String,
    pub blend_mode: BlendMode,
    /// `0..=100`
    pub blend_strength: f64,
    pub blend_r: u8,
    pub blend_g: u8,
    pub blend_b: u8,
    /// `-50..=50`, where the blend envelope peaks.
    pub middle: f64,
    /// `0..=100`, how narrow the blend envelope is.
    pub spread: f64,
    /// `0..=100`
    pub sat_darker: f64,
    /// `0..=100`
    pub sat_lighter: f64,
}

impl Default for TonalScaleParams {
    fn default() -> Self {
        Self {
            color_hex: DEFAULT_BASE_HEX.to_string(),
            blend_mode: BlendMode::ColorDodge,
            blend_strength: 0.0,
            blend_r: 0,
            blend_g: 0,
            blend_b: 50,
            middle: 0.0,
            spread: 50.0,
            sat_darker: 0.0,
            sat_lighter: 0.0,
        }
    }
}

impl TonalScaleParams {
    pub fn new(color_hex: impl Into<String>) -> Self {
        Self {
            color_hex: color_hex.into(),
            ..Self::default()
        }
    }

    pub fn control(&self, id: ControlId) -> f64 {
        match id {
            ControlId::Strength => self.blend_strength,
            ControlId::Middle => self.middle,
            ControlId::Spread => self.spread,
            ControlId::SatDarker => self.sat_darker,
            ControlId::SatLighter => self.sat_lighter,
        }
    }

    /// Sets a slider, clamping it into range.
    pub fn set_control(&mut self, id: ControlId, value: f64) {
        let value = clamp_control(id, value);
        match id {
            ControlId::Strength => self.blend_strength = value,
            ControlId::Middle => self.middle = value,
            ControlId::Spread => self.spread = value,
            ControlId::SatDarker => self.sat_darker = value,
            ControlId::SatLighter => self.sat_lighter = value,
        }
    }

    pub fn blend_rgb(&self) -> RgbColor {
        RgbColor::new(self.blend_r, self.blend_g, self.blend_b)
    }

    pub fn blend_hex(&self) -> String {
        rgb_to_hex(self.blend_rgb())
    }

    pub fn with_blend_hex(mut self, hex: &str) -> Result<Self> {
        let rgb = hex_to_rgb(hex)?;
        self.blend_r = rgb.r;
        self.blend_g = rgb.g;
        self.blend_b = rgb.b;
        Ok(self)
    }

    /// Blending is a no-op with zero strength or a black blend color.
    pub fn blend_enabled(&self) -> bool {
        self.blend_strength > 0.0 && !self.blend_rgb().is_black()
    }

    /// Checks the base hex and that every slider is inside its range.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_hex(&self.color_hex) {
            return Err(TonalError::InvalidHex(self.color_hex.clone()));
        }

        for id in ControlId::ALL {
            let value = self.control(id);
            let (min, max) = id.range();
            if !(min..=max).contains(&value) {
                return Err(TonalError::InvalidParameter {
                    name: id.field(),
                    value,
                    min,
                    max,
                });
            }
        }

        Ok(())
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a possibly partial JSON object, taking missing or invalid
    /// fields from `fallback`.
    pub fn import_json(payload: &str, fallback: &TonalScaleParams) -> Result<Self> {
        match serde_json::from_str::<Value>(payload)? {
            Value::Object(fields) => Ok(Self::from_fields(&fields, fallback)),
            other => Err(TonalError::InvalidPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn to_query_string(&self) -> String {
        let color = self.color_hex.trim();
        form_urlencoded::Serializer::new(String::new())
            .append_pair("colorHex", color.strip_prefix('#').unwrap_or(color))
            .append_pair("blendMode", self.blend_mode.name())
            .append_pair("blendStrength", &self.blend_strength.to_string())
            .append_pair("blendR", &self.blend_r.to_string())
            .append_pair("blendG", &self.blend_g.to_string())
            .append_pair("blendB", &self.blend_b.to_string())
            .append_pair("middle", &self.middle.to_string())
            .append_pair("spread", &self.spread.to_string())
            .append_pair("satDarker", &self.sat_darker.to_string())
            .append_pair("satLighter", &self.sat_lighter.to_string())
            .finish()
    }

    /// Decodes a query string (with or without the leading `?`). Repeated
    /// keys keep their first value; everything else follows
    /// [`import_json`](Self::import_json).
    pub fn from_query_string(query: &str, fallback: &TonalScaleParams) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut fields = Map::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| Value::String(value.into_owned()));
        }
        Self::from_fields(&fields, fallback)
    }

    fn from_fields(fields: &Map<String, Value>, fallback: &TonalScaleParams) -> Self {
        let color_hex = match fields.get("colorHex").and_then(Value::as_str).and_then(normalize_hex) {
            Some(hex) => hex,
            None => {
                reject(fields, "colorHex");
                fallback.color_hex.clone()
            }
        };

        let blend_mode = match fields
            .get("blendMode")
            .and_then(Value::as_str)
            .and_then(|name| name.parse().ok())
        {
            Some(mode) => mode,
            None => {
                reject(fields, "blendMode");
                fallback.blend_mode
            }
        };

        let control = |id: ControlId| {
            number_field(fields, id.field())
                .map(|value| clamp_control(id, value))
                .unwrap_or_else(|| fallback.control(id))
        };
        let blend_channel = |key: &'static str, current: u8| {
            number_field(fields, key)
                .map(|value| value.clamp(0.0, 255.0).round() as u8)
                .unwrap_or(current)
        };

        Self {
            color_hex,
            blend_mode,
            blend_strength: control(ControlId::Strength),
            blend_r: blend_channel("blendR", fallback.blend_r),
            blend_g: blend_channel("blendG", fallback.blend_g),
            blend_b: blend_channel("blendB", fallback.blend_b),
            middle: control(ControlId::Middle),
            spread: control(ControlId::Spread),
            sat_darker: control(ControlId::SatDarker),
            sat_lighter: control(ControlId::SatLighter),
        }
    }
}

/// A finite number, given either as a JSON number or a numeric string.
fn number_field(fields: &Map<String, Value>, key: &'static str) -> Option<f64> {
    let value = fields.get(key)?;
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite());

    if number.is_none() {
        reject(fields, key);
    }
    number
}

fn reject(fields: &Map<String, Value>, key: &str) {
    if let Some(value) = fields.get(key) {
        warn!(field = key, %value, "ignoring invalid params field");
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
