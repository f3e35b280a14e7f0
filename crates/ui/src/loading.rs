//! Busy-state helpers for action controls.

use cadastre_page::{NodeId, Page};

/// Label used when the caller doesn't supply one.
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// Disable `node` and replace its content with a spinner and `text`.
pub fn show_loading(page: &mut Page, node: NodeId, text: &str) {
    if !page.contains(node) {
        return;
    }
    page.set_disabled(node, true);
    page.clear_children(node);

    let spinner = page.create_element("i");
    page.add_class(spinner, "fas");
    page.add_class(spinner, "fa-spinner");
    page.add_class(spinner, "fa-spin");
    page.append_child(node, spinner);
    page.set_text(node, text);
}

/// Re-enable `node` and restore its original label.
pub fn hide_loading(page: &mut Page, node: NodeId, original_text: &str) {
    if !page.contains(node) {
        return;
    }
    page.set_disabled(node, false);
    page.clear_children(node);
    page.set_text(node, original_text);
}
