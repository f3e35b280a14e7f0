//! Synthetic tooltips replacing native ones.
//!
//! While the pointer is over an element with a `title`, the text moves to
//! `data-title` (suppressing the host's native tooltip) and one synthetic
//! `.custom-tooltip` element is rendered above the target, horizontally
//! centered. At most one synthetic tooltip exists at a time.

use std::rc::Rc;

use cadastre_page::{EventKind, NodeId, Runtime};

/// Gap between the tooltip's bottom edge and the target's top edge.
const TOOLTIP_GAP: f64 = 5.0;

/// Measures rendered tooltip text; hosts with a real layout engine can
/// inject their own.
type Measure = Rc<dyn Fn(&str) -> (f64, f64)>;

/// Tooltip controller.
#[derive(Clone)]
pub struct Tooltips {
    measure: Measure,
}

impl Tooltips {
    pub fn new() -> Self {
        Self {
            measure: Rc::new(default_measure),
        }
    }

    /// Use a host-provided text measurer (width, height in pixels).
    pub fn with_measurer<F>(measure: F) -> Self
    where
        F: Fn(&str) -> (f64, f64) + 'static,
    {
        Self {
            measure: Rc::new(measure),
        }
    }

    /// Install tooltip handling on every node carrying a `title`.
    pub fn install(&self, rt: &mut Runtime) {
        for node in rt.page.query_attr("title") {
            let tooltips = self.clone();
            rt.on(node, EventKind::PointerEnter, move |rt, event| {
                tooltips.show(rt, event.target);
            });
            let tooltips = self.clone();
            rt.on(node, EventKind::PointerLeave, move |rt, event| {
                tooltips.hide(rt, event.target);
            });
        }
    }

    /// Suppress the native tooltip on `node` and render the synthetic one.
    pub fn show(&self, rt: &mut Runtime, node: NodeId) {
        let Some(title) = rt.page.attr(node, "title").map(str::to_string) else {
            return;
        };
        if title.is_empty() {
            return;
        }

        // Rapidly overlapping pointer events may land here before the
        // previous tooltip is torn down; enforce the single-tooltip
        // invariant first.
        remove_synthetic(rt);

        rt.page.set_attr(node, "data-title", &title);
        rt.page.remove_attr(node, "title");

        let tooltip = rt.page.create_element("div");
        rt.page.add_class(tooltip, "custom-tooltip");
        rt.page.set_text(tooltip, &title);
        for (property, value) in [
            ("position", "absolute"),
            ("background", "#333"),
            ("color", "white"),
            ("padding", "0.5rem"),
            ("border-radius", "4px"),
            ("z-index", "1000"),
            ("pointer-events", "none"),
            ("white-space", "nowrap"),
        ] {
            rt.page.set_style(tooltip, property, value);
        }
        let body = rt.page.body();
        rt.page.append_child(body, tooltip);

        if let Some(rect) = rt.page.rect(node) {
            let (width, height) = (self.measure)(&title);
            let left = rect.left + rect.width / 2.0 - width / 2.0;
            let top = rect.top - height - TOOLTIP_GAP;
            rt.page.set_style(tooltip, "left", &format!("{left}px"));
            rt.page.set_style(tooltip, "top", &format!("{top}px"));
        }
    }

    /// Restore the native tooltip on `node` and drop the synthetic one.
    pub fn hide(&self, rt: &mut Runtime, node: NodeId) {
        if let Some(saved) = rt.page.attr(node, "data-title").map(str::to_string) {
            rt.page.set_attr(node, "title", &saved);
            rt.page.remove_attr(node, "data-title");
        }
        remove_synthetic(rt);
    }
}

impl Default for Tooltips {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_synthetic(rt: &mut Runtime) {
    for tooltip in rt.page.query_class("custom-tooltip") {
        rt.page.remove(tooltip);
    }
}

/// Rough glyph-box estimate for hosts that don't measure text.
fn default_measure(text: &str) -> (f64, f64) {
    (text.chars().count() as f64 * 7.5 + 16.0, 28.0)
}
