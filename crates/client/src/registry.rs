//! Registry lookups with normalized failure values.
//!
//! Both operations are consumed directly by UI flows and therefore never
//! return an error: failures are logged and folded into a payload the
//! caller can render. The success body shape is owned by the server and
//! passed through opaquely.

use serde_json::{json, Value};

use crate::api::RegistryApi;

impl RegistryApi {
    /// Look up the details of a land parcel.
    ///
    /// Returns the decoded body of `GET /api/land/{id}`, or
    /// `{"success": false, "message": "Error looking up land details"}`
    /// on any failure.
    pub async fn lookup_land(&self, land_id: &str) -> Value {
        match self.get_json::<Value>(&format!("/api/land/{land_id}")).await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(%land_id, %error, "land lookup failed");
                json!({ "success": false, "message": "Error looking up land details" })
            }
        }
    }

    /// Ask the server to verify its ownership chain.
    ///
    /// Returns the decoded body of `GET /api/verify`, or
    /// `{"valid": false, "message": "Error verifying blockchain"}` on any
    /// failure.
    pub async fn verify_chain(&self) -> Value {
        match self.get_json::<Value>("/api/verify").await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(%error, "chain verification failed");
                json!({ "valid": false, "message": "Error verifying blockchain" })
            }
        }
    }
}
