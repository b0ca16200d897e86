//! SVG rendering of one or more strips.
//!
//! Each strip becomes a row of 40×40 swatches. To the right of the widest
//! row sit the share URL and the serialized params, and the params are also
//! stored in the document's `<desc>` so the file can be re-imported.

use std::fmt::{self, Write};

use crate::scale::TonalStep;

pub const SWATCH_SIZE: usize = 40;
const TEXT_GAP: usize = 20;
const TEXT_AREA: usize = 800;

/// Text embedded next to the swatches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportMetadata {
    pub url: String,
    pub params_json: String,
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn write_scale_svg<W: Write>(
    out: &mut W,
    strips: &[&[TonalStep]],
    metadata: &ExportMetadata,
) -> fmt::Result {
    let max_width = strips.iter().map(|strip| strip.len()).max().unwrap_or(0) * SWATCH_SIZE;
    let width = max_width + TEXT_AREA;
    let height = strips.len() * SWATCH_SIZE;
    let text_x = max_width + TEXT_GAP;
    let params = escape_xml(&metadata.params_json);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(out, "  <desc>{params}</desc>")?;

    for (row, strip) in strips.iter().enumerate() {
        let y = row * SWATCH_SIZE;
        writeln!(out, "  <g>")?;
        for (column, step) in strip.iter().enumerate() {
            writeln!(
                out,
                r#"    <rect x="{}" y="{y}" width="{SWATCH_SIZE}" height="{SWATCH_SIZE}" fill="{}" />"#,
                column * SWATCH_SIZE,
                escape_xml(&step.hex),
            )?;
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(
        out,
        r#"  <text x="{text_x}" y="20" font-family="sans-serif" font-size="16">{}</text>"#,
        escape_xml(&metadata.url)
    )?;
    writeln!(
        out,
        r#"  <text x="{text_x}" y="50" font-family="monospace" font-size="12">{params}</text>"#
    )?;
    write!(out, "</svg>")
}

pub fn build_scale_svg(strips: &[&[TonalStep]], metadata: &ExportMetadata) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write_scale_svg(&mut svg, strips, metadata);
    svg
}
