//! Toast records

use serde::{Deserialize, Serialize};

/// Auto-dismiss delay applied when a producer does not pick one
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Toast semantic kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A broadcast toast record
///
/// Created by the bus on `show` and handed to every subscriber; the bus
/// keeps no history of it afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Opaque unique id, fabricated by the bus
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    /// Visible lifetime before the renderer starts its fade-out
    pub duration_ms: u64,
}

/// A toast as handed to `show`, before an id is assigned
#[derive(Clone, Debug)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: Option<u64>,
}

impl ToastRequest {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration_ms: None,
        }
    }

    /// Override the default auto-dismiss delay
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}
