use crate::interactive_ratatui::constants::*;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    NoResults,
    Exhausted,
    Failure,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPosition {
    TopCenter,
}

/// A transient message produced by the gallery state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub duration: Duration,
    pub position: ToastPosition,
}

impl Notification {
    pub fn no_results() -> Self {
        Self::new(
            NotificationKind::NoResults,
            NO_RESULTS_TEXT,
            INFO_TOAST_DURATION_MS,
        )
    }

    pub fn exhausted() -> Self {
        Self::new(
            NotificationKind::Exhausted,
            NO_MORE_RESULTS_TEXT,
            INFO_TOAST_DURATION_MS,
        )
    }

    pub fn failure() -> Self {
        Self::new(NotificationKind::Failure, FAILURE_TEXT, ERROR_TOAST_DURATION_MS)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, text, INFO_TOAST_DURATION_MS)
    }

    fn new(kind: NotificationKind, text: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            kind,
            text: text.into(),
            duration: Duration::from_millis(duration_ms),
            position: ToastPosition::TopCenter,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            NotificationKind::NoResults | NotificationKind::Failure
        )
    }
}

/// Display queue for notifications drained from the state.
///
/// Each toast stays visible for its own duration; the newest one is drawn on top.
#[derive(Default)]
pub struct Toasts {
    active: VecDeque<(Notification, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.duration;
        self.active.push_back((notification, expires_at));
    }

    pub fn extend(&mut self, notifications: impl IntoIterator<Item = Notification>, now: Instant) {
        for notification in notifications {
            self.push(notification, now);
        }
    }

    /// Drop toasts whose display time has elapsed. Returns true if anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.active.len();
        self.active.retain(|(_, expires_at)| *expires_at > now);
        before != self.active.len()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.active.back().map(|(notification, _)| notification)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
