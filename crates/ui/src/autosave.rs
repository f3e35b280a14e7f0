//! Draft autosave for forms.
//!
//! Forms carrying a `data-autosave` attribute get their field values
//! persisted on every input event and restored once at bind time.
//! Install after [`crate::form::install`]: the draft is only cleared by a
//! submission that actually proceeds, so a validation-cancelled submit
//! keeps it.

use std::cell::RefCell;
use std::rc::Rc;

use cadastre_page::{EventKind, NodeId, Page, Runtime};
use cadastre_store::{Draft, DraftStore, KeyValue};

/// Install autosave on every `form[data-autosave]` currently in the page,
/// restoring any saved draft.
pub fn install<S: KeyValue + 'static>(rt: &mut Runtime, store: &Rc<RefCell<DraftStore<S>>>) {
    for form in rt.page.query_attr("data-autosave") {
        if rt.page.tag(form) == "form" {
            bind_form(rt, store, form);
        }
    }
}

/// Wire one form: restore, save-on-input, clear-on-proceeding-submit.
pub fn bind_form<S: KeyValue + 'static>(
    rt: &mut Runtime,
    store: &Rc<RefCell<DraftStore<S>>>,
    form: NodeId,
) {
    let Some(form_id) = rt.page.attr(form, "data-autosave").map(str::to_string) else {
        return;
    };

    restore(rt, &store.borrow(), form, &form_id);

    for field in form_fields(&rt.page, form) {
        let store = Rc::clone(store);
        let form_id = form_id.clone();
        rt.on(field, EventKind::Input, move |rt, _| {
            let draft = snapshot_form(&rt.page, form);
            store.borrow_mut().save(&form_id, &draft);
        });
    }

    let store = Rc::clone(store);
    rt.on(form, EventKind::Submit, move |rt, _| {
        if rt.default_prevented() {
            tracing::debug!(%form_id, "submission cancelled, keeping draft");
            return;
        }
        store.borrow_mut().clear(&form_id);
    });
}

/// Write each saved value back into the matching named field, silently
/// skipping names no longer present in the form.
fn restore<S: KeyValue>(rt: &mut Runtime, store: &DraftStore<S>, form: NodeId, form_id: &str) {
    let Some(draft) = store.load(form_id) else {
        return;
    };
    for (name, value) in draft {
        if let Some(field) = rt.page.find_named(form, &name) {
            rt.page.set_value(field, &value);
        }
    }
}

/// Current name→value mapping of the whole form.
fn snapshot_form(page: &Page, form: NodeId) -> Draft {
    let mut draft = Draft::new();
    for field in form_fields(page, form) {
        match page.attr(field, "name") {
            Some(name) if !name.is_empty() => {
                draft.insert(name.to_string(), page.value(field).to_string());
            }
            _ => {}
        }
    }
    draft
}

fn form_fields(page: &Page, form: NodeId) -> Vec<NodeId> {
    page.descendants(form)
        .into_iter()
        .filter(|&n| matches!(page.tag(n), "input" | "select" | "textarea"))
        .collect()
}
