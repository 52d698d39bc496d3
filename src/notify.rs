//! Toast notifications
//!
//! A single visible slot. Every `present` call hands out a fresh token and
//! the slot only honors the hide deadline (or dismissal) of the latest one,
//! so a slow earlier toast can never hide a newer message.

use std::time::{Duration, Instant};

use crate::constants::toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Check mark for success, warning circle for errors
    pub fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => toast::ICON_SUCCESS,
            NoticeKind::Error => toast::ICON_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastToken(u64);

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub token: ToastToken,
    hide_at: Instant,
}

pub struct ToastSlot {
    current: Option<Toast>,
    next_token: u64,
    duration: Duration,
}

impl ToastSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            next_token: 0,
            duration,
        }
    }

    /// Show `notice`, replacing whatever is visible
    pub fn present(&mut self, notice: Notice, now: Instant) -> ToastToken {
        self.next_token += 1;
        let token = ToastToken(self.next_token);
        self.current = Some(Toast {
            notice,
            token,
            hide_at: now + self.duration,
        });
        token
    }

    /// Hide the toast if `token` is still the visible one
    pub fn dismiss(&mut self, token: ToastToken) -> bool {
        match &self.current {
            Some(toast) if toast.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Expire the visible toast once its own deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.current
            && now >= toast.hide_at
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(Duration::from_millis(toast::DURATION_MS))
    }
}
