//! State of the "download PDF" control.
//!
//! The control is disabled while an export runs, which is what keeps exports
//! from overlapping. On failure it announces the print fallback and, after a
//! short delay, emits [`TriggerEvent::OpenPrintDialog`]; opening the dialog is
//! up to the host.

use std::time::{Duration, Instant};

use log::error;

/// How long the success label stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(2000);
/// Delay between announcing the fallback and opening the print dialog.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1000);

const EXPORTING_LABEL: &str = "⏳ Generating PDF...";
const SUCCESS_LABEL: &str = "✅ Downloaded!";
const FALLBACK_LABEL: &str = "🖨️ Opening Print Dialog...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Exporting,
    Succeeded { until: Instant },
    FallingBack { until: Instant },
}

/// Something the host has to act on after [`ExportTrigger::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The control is back to its initial label and enabled.
    Reset,
    /// Export failed earlier; open the print dialog now. The control is reset as well.
    OpenPrintDialog,
}

/// The export button.
#[derive(Clone, Debug)]
pub struct ExportTrigger {
    label: String,
    state: State,
}

impl ExportTrigger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: State::Idle,
        }
    }

    /// Text currently shown on the control.
    pub fn label(&self) -> &str {
        match self.state {
            State::Idle => &self.label,
            State::Exporting => EXPORTING_LABEL,
            State::Succeeded { .. } => SUCCESS_LABEL,
            State::FallingBack { .. } => FALLBACK_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.state != State::Idle
    }

    /// Starts an export. Returns `false`, and does nothing, while the control is disabled.
    pub fn begin(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.state = State::Exporting;
        true
    }

    /// Records the outcome of the export started by [`ExportTrigger::begin`].
    pub fn finish<T, E: std::fmt::Display>(&mut self, outcome: &Result<T, E>, now: Instant) {
        if self.state != State::Exporting {
            return;
        }
        self.state = match outcome {
            Ok(_) => State::Succeeded {
                until: now + SUCCESS_DISPLAY,
            },
            Err(err) => {
                error!("PDF generation failed: {}", err);
                State::FallingBack {
                    until: now + FALLBACK_DELAY,
                }
            }
        };
    }

    /// Advances timers; returns an event when a delayed step is due.
    pub fn tick(&mut self, now: Instant) -> Option<TriggerEvent> {
        let event = match self.state {
            State::Succeeded { until } if now >= until => TriggerEvent::Reset,
            State::FallingBack { until } if now >= until => TriggerEvent::OpenPrintDialog,
            _ => return None,
        };
        self.state = State::Idle;
        Some(event)
    }
}
