//! Form validation wiring.
//!
//! Submit runs the full rule set over every required field and cancels
//! the submission when any fails; blur re-checks the single field; input
//! optimistically clears that field's inline error without re-checking.

use cadastre_core::validation::{validate_field, FieldKind, FieldOutcome, FieldSnapshot};
use cadastre_page::{EventKind, NodeId, Page, Runtime};

/// Border color applied to an invalid field.
const ERROR_BORDER: &str = "#dc3545";

/// Border color restored when a field is valid again.
const DEFAULT_BORDER: &str = "#e9ecef";

/// Install validation on every form currently in the page.
pub fn install(rt: &mut Runtime) {
    for form in rt.page.query_tag("form") {
        bind_form(rt, form);
    }
}

/// Wire submit/blur/input validation for one form.
pub fn bind_form(rt: &mut Runtime, form: NodeId) {
    rt.on(form, EventKind::Submit, move |rt, event| {
        if !validate_form(rt, event.target) {
            rt.prevent_default();
        }
    });

    for field in required_fields(&rt.page, form) {
        rt.on(field, EventKind::Blur, move |rt, _| {
            validate_field_node(rt, field);
        });
        rt.on(field, EventKind::Input, move |rt, _| {
            clear_field_error(rt, field);
        });
    }
}

/// Validate every required field in `form`; each invalid field keeps its
/// own inline message (no short-circuit). Returns whether the form may
/// submit.
pub fn validate_form(rt: &mut Runtime, form: NodeId) -> bool {
    let mut is_valid = true;
    for field in required_fields(&rt.page, form) {
        if !validate_field_node(rt, field) {
            is_valid = false;
        }
    }
    is_valid
}

/// Re-check one field, updating its inline error state.
pub fn validate_field_node(rt: &mut Runtime, field: NodeId) -> bool {
    let snapshot = snapshot(&rt.page, field);
    match validate_field(&snapshot) {
        FieldOutcome::Valid => {
            clear_field_error(rt, field);
            true
        }
        FieldOutcome::Invalid { message } => {
            show_field_error(rt, field, &message);
            false
        }
    }
}

/// Snapshot a field node into the pure validation input.
fn snapshot(page: &Page, field: NodeId) -> FieldSnapshot {
    FieldSnapshot {
        name: page.attr(field, "name").unwrap_or_default().to_string(),
        value: page.value(field).to_string(),
        required: page.has_attr(field, "required"),
        kind: FieldKind::from_attr(page.attr(field, "type").unwrap_or("text")),
    }
}

fn required_fields(page: &Page, form: NodeId) -> Vec<NodeId> {
    page.descendants(form)
        .into_iter()
        .filter(|&n| matches!(page.tag(n), "input" | "select" | "textarea"))
        .filter(|&n| page.has_attr(n, "required"))
        .collect()
}

fn show_field_error(rt: &mut Runtime, field: NodeId, message: &str) {
    clear_field_error(rt, field);
    rt.page.set_style(field, "border-color", ERROR_BORDER);

    let error = rt.page.create_element("div");
    rt.page.add_class(error, "field-error");
    rt.page.set_text(error, message);
    if let Some(parent) = rt.page.parent(field) {
        rt.page.append_child(parent, error);
    }
}

fn clear_field_error(rt: &mut Runtime, field: NodeId) {
    rt.page.set_style(field, "border-color", DEFAULT_BORDER);
    if let Some(parent) = rt.page.parent(field) {
        if let Some(error) = rt.page.child_by_class(parent, "field-error") {
            rt.page.remove(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A form with one wrapped, named field.
    fn form_with_field(rt: &mut Runtime, name: &str, attrs: &[(&str, &str)]) -> (NodeId, NodeId) {
        let body = rt.page.body();
        let form = rt.page.create_element("form");
        let wrapper = rt.page.create_element("div");
        let input = rt.page.create_element("input");
        rt.page.set_attr(input, "name", name);
        for (attr, value) in attrs {
            rt.page.set_attr(input, attr, value);
        }
        rt.page.append_child(body, form);
        rt.page.append_child(form, wrapper);
        rt.page.append_child(wrapper, input);
        (form, input)
    }

    fn field_error_text(rt: &Runtime, field: NodeId) -> Option<String> {
        let parent = rt.page.parent(field)?;
        let error = rt.page.child_by_class(parent, "field-error")?;
        Some(rt.page.text(error).to_string())
    }

    #[test]
    fn blur_surfaces_an_inline_error() {
        let mut rt = Runtime::new();
        let (form, input) = form_with_field(&mut rt, "owner_name", &[("required", "")]);
        bind_form(&mut rt, form);

        rt.blur(input);
        assert_eq!(
            field_error_text(&rt, input).as_deref(),
            Some("This field is required")
        );
        assert_eq!(rt.page.style(input, "border-color"), Some("#dc3545"));
    }

    #[test]
    fn input_clears_the_error_without_revalidating() {
        let mut rt = Runtime::new();
        let (form, input) = form_with_field(&mut rt, "owner_name", &[("required", "")]);
        bind_form(&mut rt, form);

        rt.blur(input);
        assert!(field_error_text(&rt, input).is_some());

        // Still empty, but the input event clears optimistically.
        rt.input(input);
        assert!(field_error_text(&rt, input).is_none());
        assert_eq!(rt.page.style(input, "border-color"), Some("#e9ecef"));
    }

    #[test]
    fn invalid_submit_is_cancelled() {
        let mut rt = Runtime::new();
        let (form, input) = form_with_field(&mut rt, "email", &[("required", ""), ("type", "email")]);
        bind_form(&mut rt, form);

        rt.page.set_value(input, "a@b");
        assert!(!rt.submit(form));
        assert_eq!(
            field_error_text(&rt, input).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn valid_submit_proceeds() {
        let mut rt = Runtime::new();
        let (form, input) = form_with_field(&mut rt, "email", &[("required", ""), ("type", "email")]);
        bind_form(&mut rt, form);

        rt.page.set_value(input, "a@b.com");
        assert!(rt.submit(form));
        assert!(field_error_text(&rt, input).is_none());
    }

    #[test]
    fn showing_an_error_twice_keeps_a_single_message() {
        let mut rt = Runtime::new();
        let (form, input) = form_with_field(&mut rt, "owner_name", &[("required", "")]);
        bind_form(&mut rt, form);

        rt.blur(input);
        rt.blur(input);

        let parent = rt.page.parent(input).expect("wrapper");
        let errors = rt
            .page
            .children(parent)
            .into_iter()
            .filter(|&n| rt.page.has_class(n, "field-error"))
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn every_invalid_field_gets_its_own_message() {
        let mut rt = Runtime::new();
        let body = rt.page.body();
        let form = rt.page.create_element("form");
        rt.page.append_child(body, form);
        let mut inputs = Vec::new();
        for name in ["owner_name", "land_id"] {
            let wrapper = rt.page.create_element("div");
            let input = rt.page.create_element("input");
            rt.page.set_attr(input, "name", name);
            rt.page.set_attr(input, "required", "");
            rt.page.append_child(form, wrapper);
            rt.page.append_child(wrapper, input);
            inputs.push(input);
        }
        bind_form(&mut rt, form);

        assert!(!rt.submit(form));
        for input in inputs {
            assert!(field_error_text(&rt, input).is_some());
        }
    }
}
