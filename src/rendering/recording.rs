/// Recording renderer for deterministic tests

use std::sync::{Mutex, MutexGuard};

use crate::rendering::{RenderRequest, RenderedSymbol, SymbolRenderer};
use crate::{Error, Result};

/// Stores every request it sees and returns a placeholder symbol whose markup
/// encodes the request, so equal requests yield equal digests.
pub struct RecordingRenderer {
    requests: Mutex<Vec<RenderRequest>>,
    fail_with: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        RecordingRenderer {
            requests: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A renderer that records requests but rejects each one with `reason`.
    pub fn failing(reason: &str) -> Self {
        RecordingRenderer {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    // A panic elsewhere must not hide requests from the test reading them.
    fn recorded(&self) -> MutexGuard<'_, Vec<RenderRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn requests(&self) -> Vec<RenderRequest> {
        self.recorded().clone()
    }

    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    pub fn last_request(&self) -> Option<RenderRequest> {
        self.recorded().last().cloned()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolRenderer for RecordingRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RenderedSymbol> {
        self.recorded().push(request.clone());
        if let Some(reason) = &self.fail_with {
            return Err(Error::RenderError(reason.clone()));
        }
        let markup = format!(
            "<svg width=\"{}\" height=\"{}\" data-level=\"{:?}\" fill=\"{}\" stroke=\"{}\">{}</svg>",
            request.width,
            request.height,
            request.correct_level,
            request.palette.dark,
            request.palette.light,
            request.text
        );
        Ok(RenderedSymbol::new(request.width, request.height, markup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{CorrectLevel, Palette};

    fn req(text: &str) -> RenderRequest {
        RenderRequest {
            text: text.to_string(),
            width: 64,
            height: 64,
            palette: Palette::default(),
            correct_level: CorrectLevel::H,
        }
    }

    #[test]
    fn records_requests_in_order() {
        let r = RecordingRenderer::new();
        r.render(&req("a")).unwrap();
        r.render(&req("b")).unwrap();
        assert_eq!(r.call_count(), 2);
        assert_eq!(r.requests()[0].text, "a");
        assert_eq!(r.last_request().unwrap().text, "b");
    }

    #[test]
    fn poisoned_lock_keeps_recording() {
        let r = RecordingRenderer::new();
        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _g = r.requests.lock().unwrap();
                    panic!("poison the request log");
                })
                .join();
        });
        assert!(r.requests.is_poisoned());

        r.render(&req("a")).unwrap();
        assert_eq!(r.call_count(), 1);
        assert_eq!(r.last_request().unwrap().text, "a");
    }

    #[test]
    fn failing_renderer_still_records() {
        let r = RecordingRenderer::failing("nope");
        assert!(r.render(&req("a")).is_err());
        assert_eq!(r.call_count(), 1);
    }
}
