//! Input synchronization controller
//!
//! Owns the [`Form`] surfaces and the last committed [`GenerationState`], and
//! keeps the slider, the exact-size field, the displays and the output's
//! dirty marker consistent as events arrive. Every handler runs to completion
//! before the next one; nothing here blocks or suspends.
//!
//! The exact-size field is permissive while the user types and strict at
//! commit points (blur, Enter, submit), where values are clamped into the
//! slider's bounds.

use log::{debug, warn};
use serde::Serialize;

use crate::form::{output, Form, EMPTY_INPUT_MESSAGE};
use crate::rendering::{CorrectLevel, Palette, RenderRequest, SymbolRenderer};
use crate::size;
use crate::{Error, FormConfig, Result};

/// Snapshot of the inputs at the last successful render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationState {
    pub has_generated: bool,
    pub last_generated_size: i64,
    pub last_generated_text: String,
}

impl GenerationState {
    pub fn new(default_size: i64) -> Self {
        GenerationState {
            has_generated: false,
            last_generated_size: default_size,
            last_generated_text: String::new(),
        }
    }
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A symbol was rendered at `size` pixels per side
    Generated { size: i64 },
    /// The text field was blank; the field is now flagged and nothing rendered
    Invalid,
}

pub struct Controller<R> {
    config: FormConfig,
    form: Form,
    generation: GenerationState,
    renderer: R,
}

impl<R: SymbolRenderer> Controller<R> {
    pub fn new(config: FormConfig, renderer: R) -> Self {
        let form = Form::new(&config);
        let generation = GenerationState::new(config.default_size);
        Controller {
            config,
            form,
            generation,
            renderer,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_dirty(&self) -> bool {
        self.form.output.dirty
    }

    // --- display and dirty-state primitives ---

    /// Write `value` into the read-only displays, and into the exact-size
    /// field when `push_to_size_field` is set. No validation.
    pub fn update_size_displays(&mut self, value: &str, push_to_size_field: bool) {
        self.form.displays.show(value);
        if push_to_size_field {
            self.form.size_field.value = value.to_string();
        }
    }

    /// Clamp `n` into the slider's bounds, push it into the slider, the
    /// displays and the exact-size field, and return it.
    pub fn clamp_and_sync(&mut self, n: f64) -> i64 {
        let bounds = self.form.slider.bounds();
        let v = bounds.clamp(n, self.config.default_size);
        debug!("clamp {} into [{}, {}] -> {}", n, bounds.min, bounds.max, v);

        self.form.slider.set(v);
        self.update_size_displays(&v.to_string(), true);
        self.mark_dirty_if_needed(v);
        v
    }

    /// Recompute the dirty marker after a size change.
    pub fn mark_dirty_if_needed(&mut self, new_size: i64) {
        if !self.generation.has_generated {
            return;
        }
        if new_size != self.generation.last_generated_size {
            self.set_dirty(true);
        } else {
            let text_matches =
                self.form.text_input.value.trim() == self.generation.last_generated_text;
            self.set_dirty(!text_matches);
        }
    }

    /// Recompute the dirty marker after a text change.
    pub fn mark_text_dirty_if_needed(&mut self, new_text: &str) {
        if let Some(dirty) = self.text_dirtiness(new_text) {
            self.set_dirty(dirty);
        }
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.form.output.dirty = dirty;
        self.form.button.label = if dirty {
            output::REGENERATE_LABEL
        } else {
            output::GENERATE_LABEL
        }
        .to_string();
    }

    fn text_dirtiness(&self, text: &str) -> Option<bool> {
        if !self.generation.has_generated {
            return None;
        }
        if text.trim() != self.generation.last_generated_text {
            return Some(true);
        }
        Some(self.current_size() != Some(self.generation.last_generated_size))
    }

    /// Size as the user currently sees it: the exact-size field when it has
    /// content, else the slider. `None` when that source is not numeric.
    fn current_size(&self) -> Option<i64> {
        let typed = self.form.size_field.value.trim();
        if typed.is_empty() {
            self.form.slider.parsed()
        } else {
            size::parse_int(typed)
        }
    }

    fn refresh_text_dirty(&mut self) {
        if let Some(dirty) = self.text_dirtiness(&self.form.text_input.value) {
            self.set_dirty(dirty);
        }
    }

    // --- event handlers ---

    /// The main text field changed.
    pub fn on_text_input(&mut self, value: &str) {
        self.form.text_input.value = value.to_string();
        self.form.clear_input_error();
        self.refresh_text_dirty();
    }

    /// The slider moved to `raw`.
    pub fn on_slider_input(&mut self, raw: &str) {
        self.form.slider.value = raw.to_string();
        let v = self.form.slider.value_or(self.config.default_size);
        self.form.size_field.value = v.to_string();
        self.update_size_displays(&v.to_string(), false);
        self.mark_dirty_if_needed(v);
        self.refresh_text_dirty();
    }

    /// The exact-size field changed while typing. Nothing is clamped here;
    /// the slider only follows values it could reach itself.
    pub fn on_size_input(&mut self, raw: &str) {
        self.form.size_field.value = raw.to_string();
        let typed = raw.trim();

        if typed.is_empty() {
            // Text dirtiness below still runs; it falls back to the slider.
            self.update_size_displays("", false);
        } else if let Some(n) = size::parse_int(typed) {
            self.update_size_displays(typed, false);
            if self.form.slider.bounds().accepts(n) {
                self.form.slider.set(n);
            }
            self.mark_dirty_if_needed(n);
        } else {
            self.update_size_displays(typed, false);
        }

        self.refresh_text_dirty();
    }

    /// The exact-size field lost focus: commit its value.
    pub fn on_size_blur(&mut self) {
        match size::parse_int(&self.form.size_field.value) {
            None => {
                let fallback = self
                    .form
                    .slider
                    .parsed()
                    .map(|v| v as f64)
                    .unwrap_or(f64::NAN);
                self.clamp_and_sync(fallback);
            }
            Some(n) => {
                let clamped = self.clamp_and_sync(n as f64);
                self.mark_dirty_if_needed(clamped);
            }
        }
        self.refresh_text_dirty();
    }

    /// A key went down in the exact-size field. Enter commits like a blur.
    /// Returns whether the key was consumed.
    pub fn on_size_key(&mut self, key: &str) -> bool {
        if key != "Enter" {
            return false;
        }
        self.on_size_blur();
        true
    }

    /// Show or hide the size controls. Hiding them forfeits any custom
    /// size. Returns whether the panel is now shown.
    pub fn on_toggle_advanced(&mut self) -> bool {
        let shown = self.form.panel.toggle();
        if !shown {
            self.clamp_and_sync(self.config.default_size as f64);
        }
        shown
    }

    pub fn on_reset_size(&mut self) {
        self.clamp_and_sync(self.config.default_size as f64);
        self.refresh_text_dirty();
    }

    /// Render the current text, or flag the text field if it is blank.
    ///
    /// Symbols are always black on white at level H, whatever the config.
    ///
    /// A renderer error is returned as-is; the output stays empty and the
    /// generation state keeps its previous values.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome> {
        let text = self.form.text_input.value.trim().to_string();
        if text.is_empty() {
            debug!("submit rejected: blank input");
            self.form.show_input_error(EMPTY_INPUT_MESSAGE);
            return Ok(SubmitOutcome::Invalid);
        }

        self.form.output.clear();
        let size = self.resolve_submit_size();
        let side = u32::try_from(size)
            .map_err(|_| Error::RenderError(format!("size {} is not a pixel dimension", size)))?;

        let request = RenderRequest {
            text: text.clone(),
            width: side,
            height: side,
            palette: Palette::default(),
            correct_level: CorrectLevel::H,
        };
        let symbol = self.renderer.render(&request).map_err(|e| {
            warn!("renderer rejected {} bytes at {}px: {}", text.len(), side, e);
            e
        })?;

        debug!("generated {}px symbol {}", side, symbol.digest);
        self.form.output.symbol = Some(symbol);
        self.generation = GenerationState {
            has_generated: true,
            last_generated_size: size,
            last_generated_text: text,
        };
        self.set_dirty(false);
        Ok(SubmitOutcome::Generated { size })
    }

    /// Exact-size field first (clamped), then the slider, then the default.
    fn resolve_submit_size(&mut self) -> i64 {
        let typed = self.form.size_field.value.trim().to_string();
        if !typed.is_empty() {
            if let Some(n) = size::parse_int(&typed) {
                return self.clamp_and_sync(n as f64);
            }
        }
        self.form.slider.value_or(self.config.default_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::RecordingRenderer;

    fn controller() -> Controller<RecordingRenderer> {
        Controller::new(FormConfig::default(), RecordingRenderer::new())
    }

    #[test]
    fn starts_clean_and_ungenerated() {
        let c = controller();
        assert!(!c.generation().has_generated);
        assert_eq!(c.generation().last_generated_size, 128);
        assert!(!c.is_dirty());
    }

    #[test]
    fn dirty_checks_are_noops_before_first_generation() {
        let mut c = controller();
        c.mark_dirty_if_needed(500);
        c.mark_text_dirty_if_needed("anything");
        c.on_slider_input("256");
        assert!(!c.is_dirty());
        assert_eq!(c.form().button.label, output::GENERATE_LABEL);
    }

    #[test]
    fn set_dirty_swaps_button_label() {
        let mut c = controller();
        c.set_dirty(true);
        c.set_dirty(true);
        assert_eq!(c.form().button.label, output::REGENERATE_LABEL);
        assert!(c.form().output.dirty);
        c.set_dirty(false);
        assert_eq!(c.form().button.label, output::GENERATE_LABEL);
    }

    #[test]
    fn clamp_and_sync_pushes_everywhere() {
        let mut c = controller();
        assert_eq!(c.clamp_and_sync(9000.0), 512);
        assert_eq!(c.form().slider.value, "512");
        assert_eq!(c.form().size_field.value, "512");
        assert_eq!(c.form().displays.badge, "512px");
        assert_eq!(c.clamp_and_sync(1.0), 32);
        assert_eq!(c.clamp_and_sync(f64::NAN), 128);
    }

    #[test]
    fn update_size_displays_optionally_writes_field() {
        let mut c = controller();
        c.update_size_displays("77", false);
        assert_eq!(c.form().displays.value_label, "77");
        assert_eq!(c.form().size_field.value, "128");
        c.update_size_displays("78", true);
        assert_eq!(c.form().size_field.value, "78");
    }

    #[test]
    fn mark_text_dirty_uses_field_before_slider() {
        let mut c = controller();
        c.on_text_input("hello");
        c.on_submit().unwrap();

        c.form.size_field.value = "oops".into();
        c.mark_text_dirty_if_needed("hello");
        assert!(c.is_dirty());

        c.form.size_field.value = "  ".into();
        c.mark_text_dirty_if_needed("hello");
        assert!(!c.is_dirty());
    }

    #[test]
    fn enter_commits_and_other_keys_do_not() {
        let mut c = controller();
        c.on_size_input("9999");
        assert!(!c.on_size_key("a"));
        assert_eq!(c.form().size_field.value, "9999");
        assert!(c.on_size_key("Enter"));
        assert_eq!(c.form().size_field.value, "512");
        assert_eq!(c.form().slider.value, "512");
    }

    #[test]
    fn render_failure_keeps_previous_generation() {
        let mut c = Controller::new(FormConfig::default(), RecordingRenderer::failing("too long"));
        c.on_text_input("hello");
        assert!(matches!(c.on_submit(), Err(Error::RenderError(_))));
        assert!(!c.generation().has_generated);
        assert!(c.form().output.symbol.is_none());
        assert_eq!(c.renderer().call_count(), 1);
    }
}
