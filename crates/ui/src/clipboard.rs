//! Clipboard writes with a manual-selection fallback.
//!
//! The primary path is the host's clipboard API. When it fails or is
//! absent, the text is staged in an offscreen textarea, selected, and
//! copied through the legacy selection path. Success optionally flips a
//! feedback node's label to `Copied!` for two seconds.

use cadastre_page::{NodeId, Runtime};

/// How long the `Copied!` feedback stays up.
const FEEDBACK_MS: u64 = 2000;

/// Feedback label color while the copy confirmation is showing.
const SUCCESS_COLOR: &str = "#28a745";

/// Errors from the primary clipboard path.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No primary clipboard API exists on this host.
    #[error("clipboard API unavailable")]
    Unavailable,

    /// The host rejected the write (permissions, focus, ...).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Host clipboard interface.
pub trait Clipboard {
    /// Write via the primary clipboard API.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Legacy copy of the currently selected text. Returns `false` when
    /// the host doesn't support it either.
    fn copy_selection(&mut self, selected: &str) -> bool;
}

/// In-memory clipboard, used in tests and headless hosts.
#[derive(Debug)]
pub struct MemoryClipboard {
    /// Last text that reached the clipboard, by either path.
    pub contents: Option<String>,
    /// Simulate a host without the primary API.
    pub primary_available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            contents: None,
            primary_available: true,
        }
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.primary_available {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn copy_selection(&mut self, selected: &str) -> bool {
        self.contents = Some(selected.to_string());
        true
    }
}

/// Copy `text`, preferring the primary API and falling back to the
/// selection path. Returns whether the text reached the clipboard.
pub fn copy_to_clipboard<C: Clipboard>(
    rt: &mut Runtime,
    clipboard: &mut C,
    text: &str,
    feedback: Option<NodeId>,
) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            show_copy_success(rt, feedback);
            true
        }
        Err(error) => {
            tracing::warn!(%error, "primary clipboard write failed, using fallback");
            fallback_copy(rt, clipboard, text, feedback)
        }
    }
}

/// Stage the text in an offscreen textarea, select it, and copy through
/// the legacy path.
fn fallback_copy<C: Clipboard>(
    rt: &mut Runtime,
    clipboard: &mut C,
    text: &str,
    feedback: Option<NodeId>,
) -> bool {
    let textarea = rt.page.create_element("textarea");
    rt.page.set_value(textarea, text);
    rt.page.set_style(textarea, "position", "fixed");
    rt.page.set_style(textarea, "left", "-999999px");
    rt.page.set_style(textarea, "top", "-999999px");
    let body = rt.page.body();
    rt.page.append_child(body, textarea);

    let copied = clipboard.copy_selection(rt.page.value(textarea));
    rt.page.remove(textarea);

    if copied {
        show_copy_success(rt, feedback);
    } else {
        tracing::warn!("fallback clipboard copy unavailable");
    }
    copied
}

fn show_copy_success(rt: &mut Runtime, feedback: Option<NodeId>) {
    let Some(node) = feedback else {
        return;
    };
    if !rt.page.contains(node) {
        return;
    }
    let original = rt.page.text(node).to_string();
    rt.page.set_text(node, "Copied!");
    rt.page.set_style(node, "color", SUCCESS_COLOR);
    rt.set_timeout(FEEDBACK_MS, move |rt| {
        if !rt.page.contains(node) {
            return;
        }
        rt.page.set_text(node, &original);
        rt.page.remove_style(node, "color");
    });
}
