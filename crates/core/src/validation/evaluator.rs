//! Field rule evaluation — pure logic, no page access.

use regex::Regex;

use super::rules::{FieldKind, FieldOutcome, FieldSnapshot, FieldViolation, FormOutcome};

/// Name of the registry identifier field that carries its own length rule.
pub const LAND_ID_FIELD: &str = "land_id";

/// Minimum accepted length for a land identifier.
pub const MIN_LAND_ID_LEN: usize = 3;

/// Evaluate one field against the registry form rules, in order.
/// The first rule that fails wins; later rules are not consulted.
pub fn validate_field(field: &FieldSnapshot) -> FieldOutcome {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return FieldOutcome::invalid("This field is required");
    }

    if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return FieldOutcome::invalid("Please enter a valid email address");
    }

    if field.kind == FieldKind::Number && !value.is_empty() {
        match value.parse::<f64>() {
            Ok(number) if number >= 0.0 => {}
            _ => return FieldOutcome::invalid("Please enter a valid positive number"),
        }
    }

    if field.name == LAND_ID_FIELD && !value.is_empty() && value.chars().count() < MIN_LAND_ID_LEN {
        return FieldOutcome::invalid("Land ID must be at least 3 characters long");
    }

    FieldOutcome::Valid
}

/// Evaluate every field, collecting one violation per invalid field.
/// No short-circuit: each invalid field gets its own message.
pub fn validate_fields(fields: &[FieldSnapshot]) -> FormOutcome {
    let mut violations = Vec::new();

    for field in fields {
        if let FieldOutcome::Invalid { message } = validate_field(field) {
            violations.push(FieldViolation {
                field: field.name.clone(),
                message,
            });
        }
    }

    FormOutcome {
        is_valid: violations.is_empty(),
        violations,
    }
}

/// Local part and domain must be non-empty and whitespace-free, and the
/// domain must contain at least one dot.
fn is_valid_email(value: &str) -> bool {
    match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}
