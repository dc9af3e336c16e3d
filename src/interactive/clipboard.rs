//! Click-to-copy for syntax and example blocks.

use std::time::{Duration, Instant};

use log::warn;
use thiserror::Error;

/// How long the "Copied!" acknowledgment stays visible.
pub const ACK_DURATION: Duration = Duration::from_millis(1000);

const DEFAULT_TITLE: &str = "Click to copy";
const COPIED_TITLE: &str = "Copied!";
const ACK_OPACITY: f32 = 0.7;

/// The host refused a clipboard write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Write access to the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard held in memory; optionally refuses every write.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    deny: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects writes, as a host without permission would.
    pub fn denied() -> Self {
        Self {
            contents: None,
            deny: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError("permission denied".to_owned()));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// A copyable block and its transient acknowledgment state.
#[derive(Clone, Debug)]
pub struct CopyTarget {
    text: String,
    acknowledged_until: Option<Instant>,
}

impl CopyTarget {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            acknowledged_until: None,
        }
    }

    /// Copies the block's text. Failures are logged and leave the block unchanged.
    pub fn click(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        match clipboard.write_text(&self.text) {
            Ok(()) => {
                self.acknowledged_until = Some(now + ACK_DURATION);
                true
            }
            Err(err) => {
                warn!("Copy failed: {}", err);
                false
            }
        }
    }

    fn acknowledged(&self, now: Instant) -> bool {
        self.acknowledged_until.is_some_and(|until| now < until)
    }

    /// Tooltip shown at `now`.
    pub fn title(&self, now: Instant) -> &'static str {
        if self.acknowledged(now) {
            COPIED_TITLE
        } else {
            DEFAULT_TITLE
        }
    }

    /// Opacity of the block at `now`.
    pub fn opacity(&self, now: Instant) -> f32 {
        if self.acknowledged(now) {
            ACK_OPACITY
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_copy_is_acknowledged_then_reverts() {
        let start = Instant::now();
        let mut clipboard = MemoryClipboard::new();
        let mut block = CopyTarget::new("sorted(iterable)");

        assert!(block.click(&mut clipboard, start));
        assert_eq!(clipboard.contents(), Some("sorted(iterable)"));
        assert_eq!(block.title(start), "Copied!");
        assert_eq!(block.opacity(start + Duration::from_millis(500)), 0.7);

        let later = start + ACK_DURATION;
        assert_eq!(block.title(later), "Click to copy");
        assert_eq!(block.opacity(later), 1.0);
    }

    #[test]
    fn failed_copy_shows_nothing() {
        let start = Instant::now();
        let mut clipboard = MemoryClipboard::denied();
        let mut block = CopyTarget::new("abs(x)");

        assert!(!block.click(&mut clipboard, start));
        assert_eq!(block.title(start), "Click to copy");
        assert_eq!(clipboard.contents(), None);
    }
}
