//! Draft save/load/clear over a key-value backend.

use std::collections::BTreeMap;

use crate::kv::KeyValue;

/// Serialized field name → value mapping for one form.
pub type Draft = BTreeMap<String, String>;

/// Errors from the draft layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A stored draft payload was not valid JSON.
    #[error("malformed draft payload for form '{form_id}': {source}")]
    MalformedDraft {
        form_id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Draft persistence over a [`KeyValue`] backend.
///
/// Each form's draft lives under the key `form_{form_id}` as a JSON
/// object. Every save overwrites the whole mapping; there is no merge
/// and no expiry.
pub struct DraftStore<S: KeyValue> {
    backend: S,
}

impl<S: KeyValue> DraftStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Persist `draft` for `form_id`, replacing any previous draft.
    pub fn save(&mut self, form_id: &str, draft: &Draft) {
        match serde_json::to_string(draft) {
            Ok(payload) => self.backend.set(&storage_key(form_id), payload),
            Err(error) => {
                tracing::warn!(%form_id, %error, "failed to serialize draft, keeping previous");
            }
        }
    }

    /// Load the draft for `form_id`, surfacing a malformed payload as an
    /// error. `Ok(None)` means no draft is stored.
    pub fn try_load(&self, form_id: &str) -> Result<Option<Draft>, StoreError> {
        let Some(payload) = self.backend.get(&storage_key(form_id)) else {
            return Ok(None);
        };
        serde_json::from_str(&payload)
            .map(Some)
            .map_err(|source| StoreError::MalformedDraft {
                form_id: form_id.to_string(),
                source,
            })
    }

    /// Load the draft for `form_id`. Malformed payloads are logged and
    /// treated as absent; this never fails.
    pub fn load(&self, form_id: &str) -> Option<Draft> {
        match self.try_load(form_id) {
            Ok(draft) => draft,
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed draft");
                None
            }
        }
    }

    /// Delete the draft for `form_id`, if any.
    pub fn clear(&mut self, form_id: &str) {
        self.backend.remove(&storage_key(form_id));
    }
}

/// Key under which a form's draft is stored.
fn storage_key(form_id: &str) -> String {
    format!("form_{form_id}")
}
