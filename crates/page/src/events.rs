//! UI events delivered to the runtime.

use cadastre_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::element::NodeId;

/// Kind of a discrete UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    Input,
    Blur,
    Submit,
    PointerEnter,
    PointerLeave,
}

/// A discrete UI event targeted at one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEvent {
    pub kind: EventKind,
    pub target: NodeId,
    /// When the event was created (UTC).
    pub timestamp: Timestamp,
}

impl UiEvent {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            timestamp: chrono::Utc::now(),
        }
    }
}
