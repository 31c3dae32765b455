/// Range slider surface

use crate::size::{self, SizeBounds};
use crate::SliderConfig;

/// A range input. Attributes are kept as raw strings, the way a page would
/// expose them; missing or garbled ones resolve to fallbacks in [`Slider::bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub value: String,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
}

impl Slider {
    pub fn from_config(cfg: &SliderConfig, default_size: i64) -> Self {
        Slider {
            value: cfg
                .value
                .clone()
                .unwrap_or_else(|| default_size.to_string()),
            min: cfg.min.clone(),
            max: cfg.max.clone(),
            step: cfg.step.clone(),
        }
    }

    pub fn bounds(&self) -> SizeBounds {
        SizeBounds::from_attributes(
            self.min.as_deref(),
            self.max.as_deref(),
            self.step.as_deref(),
        )
    }

    /// Parsed value, or `None` if the value is not numeric.
    pub fn parsed(&self) -> Option<i64> {
        size::parse_int(&self.value)
    }

    /// Parsed value with zero and garbage resolving to `fallback`.
    pub fn value_or(&self, fallback: i64) -> i64 {
        size::parse_or(Some(&self.value), fallback)
    }

    pub fn set(&mut self, v: i64) {
        self.value = v.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_without_attributes_uses_fallback_bounds() {
        let s = Slider::from_config(&SliderConfig::unbounded(), 128);
        assert_eq!(s.value, "128");
        assert_eq!(s.bounds(), SizeBounds::default());
    }

    #[test]
    fn slider_value_parsing() {
        let mut s = Slider::from_config(&SliderConfig::default(), 128);
        s.value = "0".into();
        assert_eq!(s.parsed(), Some(0));
        assert_eq!(s.value_or(128), 128);
        s.set(264);
        assert_eq!(s.value, "264");
        assert_eq!(s.value_or(128), 264);
    }
}
