//! Transient toast notifications.
//!
//! Toasts are fixed-position elements that slide in shortly after
//! creation and slide out on dismissal, detaching 300 ms later. A toast
//! with a positive duration also dismisses itself when the clock passes
//! it; every removal path is idempotent, so a late timer firing against
//! an already-closed toast is a no-op. Concurrent toasts are independent
//! and may overlap visually.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use cadastre_core::notification::Severity;
use cadastre_page::{EventKind, NodeId, Runtime};
use uuid::Uuid;

/// Handle to a live notification, valid until it is dismissed.
pub type NotificationHandle = Uuid;

/// Default auto-dismiss delay.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Delay before the slide-in transform is applied.
const SLIDE_IN_DELAY_MS: u64 = 100;

/// How long the slide-out transition runs before the element detaches.
const FADE_OUT_MS: u64 = 300;

/// Notification center: creates toasts, schedules their timers, closes
/// them on request.
#[derive(Clone, Default)]
pub struct Notifications {
    live: Rc<RefCell<HashMap<NotificationHandle, NodeId>>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of toasts not yet dismissed.
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    /// Whether the toast behind `handle` is still up.
    pub fn is_live(&self, handle: NotificationHandle) -> bool {
        self.live.borrow().contains_key(&handle)
    }

    /// Show a toast. A `duration_ms` of zero disables the auto-dismiss
    /// timer entirely; the toast persists until explicitly closed.
    pub fn notify(
        &self,
        rt: &mut Runtime,
        message: &str,
        severity: Severity,
        duration_ms: u64,
    ) -> NotificationHandle {
        let toast = rt.page.create_element("div");
        rt.page.add_class(toast, "notification");
        rt.page
            .add_class(toast, &format!("notification-{}", severity.label()));
        rt.page.set_text(toast, message);
        for (property, value) in [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("padding", "1rem 1.5rem"),
            ("border-radius", "8px"),
            ("color", "white"),
            ("font-weight", "500"),
            ("z-index", "1000"),
            ("transform", "translateX(100%)"),
            ("transition", "transform 0.3s ease"),
            ("max-width", "400px"),
            ("word-wrap", "break-word"),
            ("background-color", severity.color()),
        ] {
            rt.page.set_style(toast, property, value);
        }

        let icon = rt.page.create_element("i");
        rt.page.add_class(icon, "fas");
        rt.page.add_class(icon, severity.icon());
        rt.page.set_style(icon, "margin-right", "0.5rem");
        rt.page.append_child(toast, icon);

        let close = rt.page.create_element("button");
        rt.page.add_class(close, "notification-close");
        rt.page.set_text(close, "\u{d7}");
        rt.page.set_style(close, "cursor", "pointer");
        rt.page.set_style(close, "margin-left", "1rem");
        rt.page.append_child(toast, close);

        let body = rt.page.body();
        rt.page.append_child(body, toast);

        rt.set_timeout(SLIDE_IN_DELAY_MS, move |rt| {
            if rt.page.contains(toast) {
                rt.page.set_style(toast, "transform", "translateX(0)");
            }
        });

        let handle = Uuid::new_v4();
        self.live.borrow_mut().insert(handle, toast);

        let center = self.clone();
        rt.on(close, EventKind::Click, move |rt, _| {
            center.dismiss_node(rt, toast);
        });

        if duration_ms > 0 {
            let center = self.clone();
            rt.set_timeout(duration_ms, move |rt| {
                center.dismiss_node(rt, toast);
            });
        }

        handle
    }

    /// Dismiss the toast behind `handle`. Unknown or already-dismissed
    /// handles are a no-op.
    pub fn close(&self, rt: &mut Runtime, handle: NotificationHandle) {
        let node = self.live.borrow().get(&handle).copied();
        if let Some(node) = node {
            self.dismiss_node(rt, node);
        }
    }

    fn dismiss_node(&self, rt: &mut Runtime, toast: NodeId) {
        self.live.borrow_mut().retain(|_, n| *n != toast);
        if !rt.page.contains(toast) {
            return;
        }
        rt.page.set_style(toast, "transform", "translateX(100%)");
        rt.set_timeout(FADE_OUT_MS, move |rt| {
            rt.page.remove(toast);
        });
    }
}
