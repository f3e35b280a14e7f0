//! Element registry records.

use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a node in the page tree.
pub type NodeId = u64;

/// On-screen geometry of an element, supplied by the host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One element in the page tree.
///
/// Attributes, classes, and inline style are explicit typed maps instead
/// of a serialized markup string. `value` is the live input value (what
/// the user has typed), distinct from the `value` attribute.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) classes: BTreeSet<String>,
    pub(crate) style: BTreeMap<String, String>,
    pub(crate) text: String,
    pub(crate) value: String,
    pub(crate) disabled: bool,
    pub(crate) rect: Option<Rect>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }
}
