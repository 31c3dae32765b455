/// Output area, generate button and the read-only size displays

use crate::rendering::RenderedSymbol;

pub const GENERATE_LABEL: &str = "Generate QR Code";
pub const REGENERATE_LABEL: &str = "Re-generate QR Code";
pub const DIRTY_CLASS: &str = "dirty";

/// Render target. `dirty` mirrors the `dirty` class on the element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputArea {
    pub dirty: bool,
    pub symbol: Option<RenderedSymbol>,
}

impl OutputArea {
    pub fn clear(&mut self) {
        self.symbol = None;
    }

    pub fn classes(&self) -> Vec<&'static str> {
        if self.dirty {
            vec![DIRTY_CLASS]
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateButton {
    pub label: String,
}

impl Default for GenerateButton {
    fn default() -> Self {
        GenerateButton {
            label: GENERATE_LABEL.to_string(),
        }
    }
}

/// The value label next to the slider and the `"{n}px"` badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeDisplays {
    pub value_label: String,
    pub badge: String,
}

impl SizeDisplays {
    pub fn show(&mut self, s: &str) {
        self.value_label = s.to_string();
        self.badge = format!("{}px", s);
    }
}
