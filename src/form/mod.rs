//! Plain-data model of the page's form surfaces
//!
//! The controller reads and writes these fields; a host binding mirrors them
//! onto real widgets after each handler returns.

pub mod output;
pub mod panel;
pub mod slider;

pub use output::{GenerateButton, OutputArea, SizeDisplays};
pub use panel::AdvancedPanel;
pub use slider::Slider;

use crate::FormConfig;

pub const INPUT_ERROR_CLASS: &str = "input-error";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text or a URL to generate a QR code.";

/// The main text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub value: String,
    /// Carries the `input-error` class
    pub invalid: bool,
    pub focused: bool,
}

/// The exact-size text field. Free text; validated only at commit points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeField {
    pub value: String,
}

/// Inline validation message under the text field.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLabel {
    pub text: String,
    pub hidden: bool,
}

impl Default for ErrorLabel {
    fn default() -> Self {
        ErrorLabel {
            text: String::new(),
            hidden: true,
        }
    }
}

/// Every surface the controller touches.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub text_input: TextInput,
    pub slider: Slider,
    pub size_field: SizeField,
    pub displays: SizeDisplays,
    pub panel: AdvancedPanel,
    pub output: OutputArea,
    pub button: GenerateButton,
    pub error_label: ErrorLabel,
}

impl Form {
    /// Build the surfaces as they appear at page load, with the displays and
    /// the size field showing the slider's initial value.
    pub fn new(config: &FormConfig) -> Self {
        let slider = Slider::from_config(&config.slider, config.default_size);
        let mut displays = SizeDisplays::default();
        displays.show(&slider.value);
        let size_field = SizeField {
            value: slider.value.clone(),
        };

        Form {
            text_input: TextInput::default(),
            slider,
            size_field,
            displays,
            panel: AdvancedPanel::new(config.advanced_shown),
            output: OutputArea::default(),
            button: GenerateButton::default(),
            error_label: ErrorLabel::default(),
        }
    }

    pub fn show_input_error(&mut self, message: &str) {
        self.text_input.invalid = true;
        self.text_input.focused = true;
        self.error_label.text = message.to_string();
        self.error_label.hidden = false;
    }

    pub fn clear_input_error(&mut self) {
        self.text_input.invalid = false;
        self.error_label.text.clear();
        self.error_label.hidden = true;
    }
}
