//! Advanced size-control panel and its toggle

pub const SHOW_LABEL: &str = "Show size control";
pub const HIDE_LABEL: &str = "Hide size control";

#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedPanel {
    pub hidden: bool,
    pub aria_hidden: bool,
    pub toggle_label: String,
}

impl AdvancedPanel {
    pub fn new(shown: bool) -> Self {
        let mut p = AdvancedPanel {
            hidden: true,
            aria_hidden: true,
            toggle_label: String::new(),
        };
        p.set_shown(shown);
        p
    }

    pub fn is_shown(&self) -> bool {
        !self.hidden
    }

    /// Flip visibility and return whether the panel is now shown.
    pub fn toggle(&mut self) -> bool {
        let shown = self.hidden;
        self.set_shown(shown);
        shown
    }

    fn set_shown(&mut self, shown: bool) {
        self.hidden = !shown;
        self.aria_hidden = !shown;
        self.toggle_label = if shown { HIDE_LABEL } else { SHOW_LABEL }.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_keeps_aria_and_label_in_step() {
        let mut p = AdvancedPanel::new(false);
        assert!(p.hidden && p.aria_hidden);
        assert_eq!(p.toggle_label, SHOW_LABEL);

        assert!(p.toggle());
        assert!(!p.hidden && !p.aria_hidden);
        assert_eq!(p.toggle_label, HIDE_LABEL);

        assert!(!p.toggle());
        assert_eq!(p.toggle_label, SHOW_LABEL);
    }
}
