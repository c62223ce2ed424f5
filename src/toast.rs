//! Single-slot transient notification with a scheduled dismissal.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Holds at most one toast and the instant it should disappear.
///
/// Showing a toast replaces both the current toast and its pending
/// dismissal, so an older deadline can never clear a newer toast.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    dismiss_at: Option<Instant>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `toast`, cancelling any scheduled dismissal.
    pub fn show(&mut self, toast: Toast, now: Instant) {
        self.dismiss_at = Some(now + TOAST_DURATION);
        self.current = Some(toast);
    }

    /// Clear the toast if its deadline has passed. Returns true if cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.dismiss_at {
            Some(deadline) if now >= deadline => {
                self.current = None;
                self.dismiss_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Time left before the current toast is dismissed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.dismiss_at.map(|d| d.saturating_duration_since(now))
    }
}
