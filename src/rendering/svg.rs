//! QR renderer backed by the `qrcode` crate, producing SVG markup.

use log::debug;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::rendering::{CorrectLevel, RenderRequest, RenderedSymbol, SymbolRenderer};
use crate::{Error, Result};

/// Renders requests as SVG documents that fit inside the requested box.
#[derive(Debug, Clone)]
pub struct QrSvgRenderer {
    /// Whether to draw the four-module quiet zone around the symbol
    pub quiet_zone: bool,
}

impl QrSvgRenderer {
    pub fn new() -> Self {
        Self { quiet_zone: true }
    }
}

impl Default for QrSvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn ec_level(level: CorrectLevel) -> EcLevel {
    match level {
        CorrectLevel::L => EcLevel::L,
        CorrectLevel::M => EcLevel::M,
        CorrectLevel::Q => EcLevel::Q,
        CorrectLevel::H => EcLevel::H,
    }
}

/// Colors end up inside SVG attributes, so markup characters are refused.
fn check_color(color: &str) -> Result<&str> {
    if color.trim().is_empty() || color.contains(['"', '\'', '<', '>', '&']) {
        return Err(Error::RenderError(format!("unusable color {:?}", color)));
    }
    Ok(color)
}

impl SymbolRenderer for QrSvgRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RenderedSymbol> {
        let dark = check_color(&request.palette.dark)?;
        let light = check_color(&request.palette.light)?;

        let code = QrCode::with_error_correction_level(
            request.text.as_bytes(),
            ec_level(request.correct_level),
        )
        .map_err(|e| Error::RenderError(format!("QR encoding failed: {}", e)))?;

        // One unit per module; the outer element scales the grid to the box.
        let grid = code.width() as u32 + if self.quiet_zone { 8 } else { 0 };
        debug!(
            "encoding {} bytes at {:?}: {} units scaled to {}x{}",
            request.text.len(),
            request.correct_level,
            grid,
            request.width,
            request.height
        );

        let inner = code
            .render::<svg::Color>()
            .quiet_zone(self.quiet_zone)
            .module_dimensions(1, 1)
            .dark_color(svg::Color(dark))
            .light_color(svg::Color(light))
            .build();
        let start = inner
            .find("<svg")
            .ok_or_else(|| Error::RenderError("encoder produced no <svg> element".into()))?;

        let markup = format!(
            concat!(
                r#"<?xml version="1.0" standalone="yes"?>"#,
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" "#,
                r#"viewBox="0 0 {g} {g}" preserveAspectRatio="none" shape-rendering="crispEdges">"#,
                "{inner}</svg>"
            ),
            w = request.width,
            h = request.height,
            g = grid,
            inner = &inner[start..]
        );

        Ok(RenderedSymbol::new(request.width, request.height, markup))
    }
}
