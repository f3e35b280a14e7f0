//! Field and form validation.
//!
//! Pure rule evaluation over field snapshots. The form controller in
//! `cadastre-ui` decides when to evaluate and how to surface outcomes.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate_field, validate_fields, LAND_ID_FIELD, MIN_LAND_ID_LEN};
pub use rules::{FieldKind, FieldOutcome, FieldSnapshot, FieldViolation, FormOutcome};
