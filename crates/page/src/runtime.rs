//! Single-threaded event runtime.
//!
//! Owns the page tree, the handler registry, and a deterministic timer
//! queue driven by a logical millisecond clock. All work happens as a
//! reaction to a dispatched event or an elapsed timer; handlers never run
//! concurrently. A handler must not re-enter itself (dispatching its own
//! event from inside itself); unrelated nested dispatch is fine.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::element::NodeId;
use crate::events::{EventKind, UiEvent};
use crate::page::Page;

/// Handler invoked when a matching event reaches its node.
type Handler = Rc<RefCell<dyn FnMut(&mut Runtime, &UiEvent)>>;

/// Deferred closure fired once the logical clock passes its deadline.
type TimerFn = Box<dyn FnOnce(&mut Runtime)>;

struct Timer {
    due_ms: u64,
    seq: u64,
    run: TimerFn,
}

pub struct Runtime {
    pub page: Page,
    handlers: HashMap<(NodeId, EventKind), Vec<Handler>>,
    timers: Vec<Timer>,
    now_ms: u64,
    timer_seq: u64,
    cancelled: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            page: Page::new(),
            handlers: HashMap::new(),
            timers: Vec::new(),
            now_ms: 0,
            timer_seq: 0,
            cancelled: false,
        }
    }

    /// Current logical time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers not yet fired.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Register a handler for `kind` events on `node`. Handlers on the
    /// same node and kind run in registration order.
    pub fn on<F>(&mut self, node: NodeId, kind: EventKind, handler: F)
    where
        F: FnMut(&mut Runtime, &UiEvent) + 'static,
    {
        self.handlers
            .entry((node, kind))
            .or_default()
            .push(Rc::new(RefCell::new(handler)));
    }

    /// Deliver an event to every handler registered on its target.
    ///
    /// Returns `false` when some handler cancelled the default action
    /// (a submit that must not proceed). Events aimed at removed nodes
    /// are silently dropped.
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        if !self.page.contains(event.target) {
            tracing::debug!(node = event.target, kind = ?event.kind, "event for removed node dropped");
            return true;
        }
        let list = self
            .handlers
            .get(&(event.target, event.kind))
            .cloned()
            .unwrap_or_default();

        let outer = std::mem::replace(&mut self.cancelled, false);
        for handler in list {
            (&mut *handler.borrow_mut())(self, &event);
        }
        let proceed = !self.cancelled;
        self.cancelled = outer;
        proceed
    }

    /// Cancel the default action of the event currently being dispatched.
    pub fn prevent_default(&mut self) {
        self.cancelled = true;
    }

    /// Whether the event currently being dispatched was cancelled by an
    /// earlier handler.
    pub fn default_prevented(&self) -> bool {
        self.cancelled
    }

    /// Schedule `run` to fire once `delay_ms` has elapsed on the logical
    /// clock. Timers are fire-and-forget; a timer acting on a node that
    /// was removed in the meantime must check [`Page::contains`].
    pub fn set_timeout<F>(&mut self, delay_ms: u64, run: F)
    where
        F: FnOnce(&mut Runtime) + 'static,
    {
        let seq = self.timer_seq;
        self.timer_seq += 1;
        self.timers.push(Timer {
            due_ms: self.now_ms + delay_ms,
            seq,
            run: Box::new(run),
        });
    }

    /// Advance the logical clock by `delta_ms`, firing every timer that
    /// falls due, in deadline order (registration order on ties). Timers
    /// scheduled by other timers inside the same window fire too.
    pub fn advance(&mut self, delta_ms: u64) {
        let target = self.now_ms + delta_ms;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= target)
                .min_by_key(|(_, t)| (t.due_ms, t.seq))
                .map(|(i, _)| i);
            let Some(index) = next else {
                break;
            };
            let timer = self.timers.swap_remove(index);
            self.now_ms = self.now_ms.max(timer.due_ms);
            (timer.run)(self);
        }
        self.now_ms = target;
    }

    // ---- dispatch shorthands ----

    pub fn click(&mut self, node: NodeId) -> bool {
        self.dispatch(UiEvent::new(EventKind::Click, node))
    }

    pub fn input(&mut self, node: NodeId) -> bool {
        self.dispatch(UiEvent::new(EventKind::Input, node))
    }

    pub fn blur(&mut self, node: NodeId) -> bool {
        self.dispatch(UiEvent::new(EventKind::Blur, node))
    }

    pub fn submit(&mut self, node: NodeId) -> bool {
        self.dispatch(UiEvent::new(EventKind::Submit, node))
    }

    pub fn pointer_enter(&mut self, node: NodeId) -> bool {
        self.dispatch(UiEvent::new(EventKind::PointerEnter, node))
    }

    pub fn pointer_leave(&mut self, node: NodeId) -> bool {
        self.dispatch(UiEvent::new(EventKind::PointerLeave, node))
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
