//! Controllers binding the land-registry presentation logic to a page
//! runtime.
//!
//! Each controller self-registers against matching elements currently in
//! the page, mirroring the application's page-ready wiring; there is no
//! further orchestration. [`install_all`] runs the element-driven
//! controllers in one call. Autosave needs a draft store and is installed
//! separately via [`autosave::install`], after [`form::install`], so a
//! cancelled submission keeps its draft.

pub mod alerts;
pub mod autosave;
pub mod clipboard;
pub mod form;
pub mod loading;
pub mod nav;
pub mod notify;
pub mod table;
pub mod tooltip;

use cadastre_core::notification::Severity;
use cadastre_page::Runtime;

pub use clipboard::{copy_to_clipboard, Clipboard, ClipboardError, MemoryClipboard};
pub use loading::{hide_loading, show_loading};
pub use notify::{NotificationHandle, Notifications};
pub use tooltip::Tooltips;

/// Wire navigation, alerts, validation, tables, and tooltips against the
/// elements currently in the page.
pub fn install_all(rt: &mut Runtime, current_path: &str) {
    nav::install(rt, current_path);
    alerts::install(rt);
    form::install(rt);
    table::install(rt);
    Tooltips::new().install(rt);
}

/// Show a toast using a severity label (`success`/`error`/`warning`/
/// `info`); unknown labels render as info.
pub fn notify(
    rt: &mut Runtime,
    center: &Notifications,
    message: &str,
    severity: &str,
    duration_ms: u64,
) -> NotificationHandle {
    center.notify(rt, message, Severity::from_label(severity), duration_ms)
}
