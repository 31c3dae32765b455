//! qrform
//!
//! Input-state controller for a "type text, get a QR code" form. The
//! controller keeps a stepped size slider, a free-typed exact-size field and
//! the rendered output consistent, and flags the output as stale whenever
//! the inputs drift away from what was last rendered.
//!
//! # Features
//!
//! - **Headless**: the page is modelled as plain data ([`form::Form`]) so the
//!   logic runs and tests without a browser
//! - **Pluggable rendering**: symbols are produced by a [`SymbolRenderer`];
//!   [`QrSvgRenderer`] encodes real QR codes as SVG
//! - **Scriptable**: [`FormEvent`]s can be replayed from JSON lines
//!
//! # Example
//!
//! ```
//! use qrform::{Controller, FormConfig, QrSvgRenderer, SubmitOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = Controller::new(FormConfig::default(), QrSvgRenderer::new());
//! controller.on_text_input("https://example.com");
//! controller.on_slider_input("256");
//! assert_eq!(controller.on_submit()?, SubmitOutcome::Generated { size: 256 });
//!
//! controller.on_slider_input("264");
//! assert!(controller.is_dirty());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod controller;
pub mod events;
pub mod form;
pub mod rendering;
pub mod size;
pub mod snapshot;

pub use controller::{Controller, GenerationState, SubmitOutcome};
pub use events::FormEvent;
pub use rendering::{
    CorrectLevel, Palette, QrSvgRenderer, RecordingRenderer, RenderRequest, RenderedSymbol,
    SymbolRenderer,
};
pub use snapshot::ControllerSnapshot;

/// Size used at page load, on reset and when the size controls are hidden.
pub const DEFAULT_SIZE: i64 = 128;

/// Raw attributes of the size slider as written in the page markup.
///
/// Values are strings on purpose: a missing or unparseable attribute is not
/// an error, it resolves to a fallback bound (see [`size::SizeBounds`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    /// Initial value; the default size when absent
    pub value: Option<String>,
}

impl SliderConfig {
    /// A slider with no attributes at all.
    pub fn unbounded() -> Self {
        SliderConfig {
            min: None,
            max: None,
            step: None,
            value: None,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        SliderConfig {
            min: Some("32".to_string()),
            max: Some("512".to_string()),
            step: Some("8".to_string()),
            value: None,
        }
    }
}

/// Configuration for a [`Controller`]
///
/// The defaults match the stock page: a 32..=512 slider in steps of 8 and a
/// 128px default. Palette and error-correction level are not configurable.
///
/// # Examples
///
/// ```
/// let cfg = qrform::FormConfig::default();
/// assert_eq!(cfg.default_size, 128);
/// assert!(!cfg.advanced_shown);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Fallback and reset size in pixels
    pub default_size: i64,
    /// Slider attributes
    pub slider: SliderConfig,
    /// Whether the size controls start expanded
    pub advanced_shown: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            slider: SliderConfig::default(),
            advanced_shown: false,
        }
    }
}

impl FormConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: FormConfig =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_size < 1 {
            return Err(Error::ConfigError(format!(
                "default_size must be positive, got {}",
                self.default_size
            )));
        }
        Ok(())
    }
}

/// Create a controller that renders real QR codes as SVG.
pub fn new_controller(config: FormConfig) -> Result<Controller<QrSvgRenderer>> {
    config.validate()?;
    Ok(Controller::new(config, QrSvgRenderer::new()))
}
