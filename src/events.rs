//! Form events as data, for hosts and scripted replays.
//!
//! Events are JSON objects tagged by `event`, one per line in replay scripts:
//!
//! ```text
//! {"event":"text_input","value":"hello"}
//! {"event":"slider_input","value":"256"}
//! {"event":"submit"}
//! ```

use serde::{Deserialize, Serialize};

use crate::controller::Controller;
use crate::rendering::SymbolRenderer;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    TextInput { value: String },
    SliderInput { value: String },
    SizeInput { value: String },
    SizeBlur,
    SizeKey { key: String },
    ToggleAdvanced,
    ResetSize,
    Submit,
}

/// Decode one replay line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<FormEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| Error::EventError(format!("{}: {}", e, line)))
}

impl<R: SymbolRenderer> Controller<R> {
    /// Route an event to its handler.
    pub fn dispatch(&mut self, event: &FormEvent) -> Result<()> {
        match event {
            FormEvent::TextInput { value } => self.on_text_input(value),
            FormEvent::SliderInput { value } => self.on_slider_input(value),
            FormEvent::SizeInput { value } => self.on_size_input(value),
            FormEvent::SizeBlur => self.on_size_blur(),
            FormEvent::SizeKey { key } => {
                self.on_size_key(key);
            }
            FormEvent::ToggleAdvanced => {
                self.on_toggle_advanced();
            }
            FormEvent::ResetSize => self.on_reset_size(),
            FormEvent::Submit => {
                self.on_submit()?;
            }
        }
        Ok(())
    }
}
