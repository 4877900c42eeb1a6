use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, acquired for a single write.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut cb = arboard::Clipboard::new().context("clipboard unavailable")?;
        cb.set_text(text.to_string()).context("clipboard write failed")?;
        Ok(())
    }
}

/// Per-card copy affordance. Shows "Copied!" for `feedback` after a
/// successful write, then reverts.
#[derive(Debug, Clone)]
pub struct CopyButton {
    copied_at: Option<Instant>,
    feedback: Duration,
}

impl CopyButton {
    pub fn new(feedback: Duration) -> Self {
        Self { copied_at: None, feedback }
    }

    /// Returns whether the write succeeded. Failures are logged and leave
    /// the indicator as it was.
    pub fn press(&mut self, sink: &mut dyn ClipboardSink, text: &str, now: Instant) -> bool {
        match sink.write_text(text) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "failed to copy text");
                false
            }
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .map(|t| now.saturating_duration_since(t) < self.feedback)
            .unwrap_or(false)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) { "Copied!" } else { "Copy" }
    }

    pub fn feedback(&self) -> Duration {
        self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[derive(Default)]
    struct FakeClipboard {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("no display"));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copied_indicator_reverts_after_feedback() {
        let mut sink = FakeClipboard::default();
        let mut btn = CopyButton::new(Duration::from_secs(2));
        let t0 = Instant::now();
        assert_eq!(btn.label(t0), "Copy");

        assert!(btn.press(&mut sink, "Step Into Tomorrow", t0));
        assert_eq!(sink.written, ["Step Into Tomorrow"]);
        assert_eq!(btn.label(t0 + Duration::from_millis(1999)), "Copied!");
        assert_eq!(btn.label(t0 + Duration::from_secs(2)), "Copy");
    }

    #[test]
    fn test_failed_write_leaves_indicator_unchanged() {
        let mut sink = FakeClipboard { fail: true, ..Default::default() };
        let mut btn = CopyButton::new(Duration::from_secs(2));
        let t0 = Instant::now();
        assert!(!btn.press(&mut sink, "x", t0));
        assert!(!btn.is_copied(t0));
        assert!(sink.written.is_empty());
    }
}
