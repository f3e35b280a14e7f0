//! Field snapshot and validation outcome types.

use serde::{Deserialize, Serialize};

/// Declared input kind, mirroring the form markup's `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Number,
}

impl FieldKind {
    /// Map a markup `type` attribute to a kind. Anything unrecognized
    /// (`checkbox`, `date`, ...) validates as plain text.
    pub fn from_attr(attr: &str) -> Self {
        match attr {
            "email" => Self::Email,
            "number" => Self::Number,
            _ => Self::Text,
        }
    }
}

/// A point-in-time copy of one form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// The input's `name` attribute.
    pub name: String,
    /// Raw value as currently entered.
    pub value: String,
    /// Whether the input carries the `required` attribute.
    pub required: bool,
    /// Declared kind.
    pub kind: FieldKind,
}

impl FieldSnapshot {
    /// Create a plain-text, optional snapshot.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
            kind: FieldKind::Text,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the declared kind.
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Result of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FieldOutcome {
    Valid,
    Invalid { message: String },
}

impl FieldOutcome {
    pub(crate) fn invalid(message: &str) -> Self {
        Self::Invalid {
            message: message.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The inline message to surface, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(message),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Aggregated result of validating every field in a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOutcome {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}
