//! Serializable view of the controller, used by the replay CLI and tests.

use serde::Serialize;

use crate::controller::{Controller, GenerationState};
use crate::rendering::SymbolRenderer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerSnapshot {
    pub text: String,
    pub slider: String,
    pub size_field: String,
    pub size_label: String,
    pub size_badge: String,
    pub dirty: bool,
    pub button_label: String,
    pub advanced_shown: bool,
    pub toggle_label: String,
    /// Inline validation message, if shown
    pub error: Option<String>,
    pub generation: GenerationState,
    /// Digest of the symbol currently in the output area
    pub symbol_digest: Option<String>,
}

impl<R: SymbolRenderer> Controller<R> {
    pub fn snapshot(&self) -> ControllerSnapshot {
        let form = self.form();
        ControllerSnapshot {
            text: form.text_input.value.clone(),
            slider: form.slider.value.clone(),
            size_field: form.size_field.value.clone(),
            size_label: form.displays.value_label.clone(),
            size_badge: form.displays.badge.clone(),
            dirty: form.output.dirty,
            button_label: form.button.label.clone(),
            advanced_shown: form.panel.is_shown(),
            toggle_label: form.panel.toggle_label.clone(),
            error: if form.error_label.hidden {
                None
            } else {
                Some(form.error_label.text.clone())
            },
            generation: self.generation().clone(),
            symbol_digest: form.output.symbol.as_ref().map(|s| s.digest.clone()),
        }
    }
}
