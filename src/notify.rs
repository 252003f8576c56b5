//! Notification delivery contract.
//!
//! The core only produces `(message, severity)` pairs; how they reach the
//! user is the embedding shell's concern. [`LogSink`] forwards to the `log`
//! facade without blocking the caller; [`BufferSink`] keeps messages in
//! memory so tests and quiet callers can inspect them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// How loud a notification should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Receiver for user-facing notifications.
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that forwards notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warn => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// In-memory sink; keeps delivered notifications for later inspection.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything delivered so far, oldest first.
    pub fn drain(&self) -> Vec<(Severity, String)> {
        std::mem::take(&mut *self.messages.lock().expect("sink lock"))
    }
}

impl NotificationSink for BufferSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .expect("sink lock")
            .push((severity, message.to_string()));
    }
}
