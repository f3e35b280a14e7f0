//! Headless page model for the cadastre presentation runtime.
//!
//! Replaces the ambient document with explicit objects: a typed element
//! registry ([`Page`]), discrete UI events ([`events::UiEvent`]), and a
//! single-threaded [`runtime::Runtime`] owning handler registration and a
//! deterministic timer queue. Tests dispatch synthetic events and advance
//! the logical clock; no real document is involved.

pub mod element;
pub mod events;
pub mod page;
pub mod runtime;

pub use element::{NodeId, Rect};
pub use events::{EventKind, UiEvent};
pub use page::Page;
pub use runtime::Runtime;
