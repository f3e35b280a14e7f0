//! Auto-dismissing alert banners.
//!
//! Server-rendered `.alert` elements fade out after five seconds or when
//! their injected close button is clicked; either way the element
//! detaches 300 ms after the fade starts. Both paths are idempotent.

use cadastre_page::{EventKind, NodeId, Runtime};

/// Delay before an alert dismisses itself.
const AUTO_DISMISS_MS: u64 = 5000;

/// How long the fade runs before the element detaches.
const FADE_OUT_MS: u64 = 300;

/// Wire every `.alert` currently in the page.
pub fn install(rt: &mut Runtime) {
    for alert in rt.page.query_class("alert") {
        bind_alert(rt, alert);
    }
}

/// Give one alert its close button and auto-dismiss timer.
pub fn bind_alert(rt: &mut Runtime, alert: NodeId) {
    rt.set_timeout(AUTO_DISMISS_MS, move |rt| {
        fade_out(rt, alert);
    });

    let close = rt.page.create_element("button");
    rt.page.add_class(close, "alert-close");
    rt.page.set_text(close, "\u{d7}");
    rt.page.set_style(close, "cursor", "pointer");
    rt.page.set_style(close, "margin-left", "auto");
    rt.page.append_child(alert, close);

    rt.on(close, EventKind::Click, move |rt, _| {
        fade_out(rt, alert);
    });
}

fn fade_out(rt: &mut Runtime, alert: NodeId) {
    if !rt.page.contains(alert) {
        return;
    }
    rt.page.set_style(alert, "opacity", "0");
    rt.set_timeout(FADE_OUT_MS, move |rt| {
        rt.page.remove(alert);
    });
}
