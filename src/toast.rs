//! Toast notifications.
//!
//! A single transient banner showing one message at a time. Showing a new
//! toast supersedes the current one and restarts the auto-dismiss window;
//! hiding keeps the last message around so a fade-out render can still
//! read it, but cancels the pending dismiss so it can never fire against
//! a later toast.
//!
//! The notifier owns its own dismiss deadline instead of sharing a global
//! timer handle, so multiple notifiers could coexist without cross-talk.

use std::time::{Duration, Instant};

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DISMISS: Duration = Duration::from_millis(4000);

/// Toast severity, used for icon and color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Icon glyph for the toast banner.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}",
            Severity::Error => "\u{2717}",
            Severity::Warning => "!",
            Severity::Info => "i",
        }
    }
}

/// Owns the single visible toast and its auto-dismiss deadline.
#[derive(Debug, Default)]
pub struct ToastNotifier {
    message: String,
    severity: Severity,
    visible: bool,
    dismiss_at: Option<Instant>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, fully superseding any visible one (last write wins).
    /// The 4 second dismiss window restarts from `now`.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
        self.dismiss_at = Some(now + TOAST_DISMISS);
    }

    /// Hide the toast. The message is kept for fade-out rendering; the
    /// pending dismiss is cancelled so a stale deadline never fires.
    pub fn hide(&mut self) {
        self.visible = false;
        self.dismiss_at = None;
    }

    /// Drive the auto-dismiss deadline. Returns true if the toast was
    /// dismissed on this poll (caller should redraw).
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.dismiss_at {
            Some(due) if now >= due => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
