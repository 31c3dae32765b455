//! Symbol rendering seam
//!
//! The controller never encodes QR symbols itself. It builds a
//! [`RenderRequest`] and hands it to a [`SymbolRenderer`], then stores the
//! returned [`RenderedSymbol`] in the output area.

pub mod recording;
pub mod svg;

pub use recording::RecordingRenderer;
pub use svg::QrSvgRenderer;

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Result;

/// QR error-correction level, lowest to highest redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorrectLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

/// Dark/light colors used for modules and background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub dark: String,
    pub light: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: "#000000".to_string(),
            light: "#ffffff".to_string(),
        }
    }
}

/// Everything a renderer needs to draw one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub correct_level: CorrectLevel,
}

/// A rendered symbol as placed into the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSymbol {
    /// Target box width in pixels
    pub width: u32,
    /// Target box height in pixels
    pub height: u32,
    /// Markup (SVG for the QR renderer)
    pub markup: String,
    /// Hex SHA-256 of `markup`
    pub digest: String,
}

impl RenderedSymbol {
    pub fn new(width: u32, height: u32, markup: String) -> Self {
        let digest = hex::encode(Sha256::digest(markup.as_bytes()));
        Self {
            width,
            height,
            markup,
            digest,
        }
    }

    /// `data:` URL suitable for an `<img src>` attribute.
    pub fn data_url(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(self.markup.as_bytes())
        )
    }
}

/// External collaborator that turns a request into a visual code.
pub trait SymbolRenderer {
    /// Render synchronously. An error leaves the caller's state untouched.
    fn render(&self, request: &RenderRequest) -> Result<RenderedSymbol>;
}

impl<T: SymbolRenderer + ?Sized> SymbolRenderer for &T {
    fn render(&self, request: &RenderRequest) -> Result<RenderedSymbol> {
        (**self).render(request)
    }
}

impl<T: SymbolRenderer + ?Sized> SymbolRenderer for Box<T> {
    fn render(&self, request: &RenderRequest) -> Result<RenderedSymbol> {
        (**self).render(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_black_on_white() {
        let p = Palette::default();
        assert_eq!(p.dark, "#000000");
        assert_eq!(p.light, "#ffffff");
        assert_eq!(CorrectLevel::default(), CorrectLevel::H);
    }

    #[test]
    fn rendered_symbol_digest_tracks_markup() {
        let a = RenderedSymbol::new(8, 8, "<svg/>".to_string());
        let b = RenderedSymbol::new(8, 8, "<svg/>".to_string());
        let c = RenderedSymbol::new(8, 8, "<svg></svg>".to_string());
        assert_eq!(a.digest, b.digest);
        assert_ne!(a.digest, c.digest);
        assert_eq!(a.digest.len(), 64);
    }

    #[test]
    fn data_url_is_base64_svg() {
        let s = RenderedSymbol::new(1, 1, "<svg/>".to_string());
        assert_eq!(s.data_url(), "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
