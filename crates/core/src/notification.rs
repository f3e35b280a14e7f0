//! Notification severity mapping.

use serde::{Deserialize, Serialize};

/// Severity of a transient notification, driving its color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Parse a severity label; anything unrecognized is informational.
    pub fn from_label(label: &str) -> Self {
        match label {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Canonical lowercase label, used in toast class names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Background color of the toast.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
            Self::Warning => "#ffc107",
            Self::Info => "#17a2b8",
        }
    }

    /// Icon class rendered before the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Warning => "fa-exclamation-triangle",
            Self::Info => "fa-info-circle",
        }
    }
}
