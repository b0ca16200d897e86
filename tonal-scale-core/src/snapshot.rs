use serde::Serialize;
use tracing::debug;

use crate::color::normalize_hex;
use crate::error::{Result, TonalError};
use crate::export::{build_scale_svg, ExportMetadata};
use crate::params::TonalScaleParams;
use crate::scale::{generate_tonal_scale, TonalScale, TonalStep};
use crate::strips::{
    blend_distribution, build_metadata, extended_strip, full_strip, key_strip, BlendDistribution,
    ToneMetadata,
};

/// Everything derived from one set of params, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TonalScaleSnapshot {
    pub params: TonalScaleParams,
    pub base_hex: String,
    pub blend_hex: String,
    pub scale: TonalScale,
    pub full_strip: Vec<TonalStep>,
    pub extended_strip: Vec<TonalStep>,
    pub key_strip: Vec<TonalStep>,
    pub metadata: Vec<ToneMetadata>,
    pub serialized_params: String,
    pub blend_distribution: BlendDistribution,
}

impl TonalScaleSnapshot {
    /// The base hex is stored normalized, so every derived view and the
    /// serialized params agree on it.
    pub fn from_params(mut params: TonalScaleParams) -> Result<Self> {
        params.validate()?;
        params.color_hex = normalize_hex(&params.color_hex)
            .ok_or_else(|| TonalError::InvalidHex(params.color_hex.clone()))?;

        let scale = generate_tonal_scale(&params)?;
        let base_hex = scale.base_step()?.hex.clone();
        let serialized_params = params.export_json()?;

        debug!(base = %base_hex, luminance = scale.luminance, "built snapshot");

        Ok(Self {
            base_hex,
            blend_hex: params.blend_hex(),
            full_strip: full_strip(&scale),
            extended_strip: extended_strip(&scale),
            key_strip: key_strip(&scale),
            metadata: build_metadata(&scale),
            blend_distribution: blend_distribution(&params, &scale),
            serialized_params,
            scale,
            params,
        })
    }

    pub fn metadata_for(&self, index: usize) -> Option<&ToneMetadata> {
        self.metadata.get(index)
    }

    /// The full, extended and key strips stacked top to bottom.
    pub fn to_svg(&self, url: &str) -> String {
        build_scale_svg(
            &[&self.full_strip, &self.extended_strip, &self.key_strip],
            &ExportMetadata {
                url: url.to_string(),
                params_json: self.serialized_params.clone(),
            },
        )
    }
}
