//! Draft persistence for in-progress registry forms.
//!
//! A [`DraftStore`] keeps one JSON-encoded name→value mapping per form in
//! a host-provided [`KeyValue`] backend. Saves are wholesale overwrites;
//! loads tolerate malformed payloads.

pub mod draft;
pub mod kv;

pub use draft::{Draft, DraftStore, StoreError};
pub use kv::{KeyValue, MemoryStore};
