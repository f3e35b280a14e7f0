//! Integration test driving a full registry page headlessly:
//! navigation highlight, alert lifecycle, form validation, table
//! sorting, tooltips, and toasts wired together the way the
//! application boots them.

use cadastre_core::notification::Severity;
use cadastre_page::{NodeId, Runtime};
use cadastre_ui::{install_all, Notifications};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct RegistryPage {
    rt: Runtime,
    nav_lands: NodeId,
    alert: NodeId,
    form: NodeId,
    land_id: NodeId,
    email: NodeId,
    table: NodeId,
    hash_badge: NodeId,
}

/// A page resembling the land listing: nav bar, one flash alert, a
/// transfer form, a sortable parcel table, and a tooltip'd hash badge.
fn build_page() -> RegistryPage {
    let mut rt = Runtime::new();
    let body = rt.page.body();

    let mut nav_lands = 0;
    for href in ["/", "/lands"] {
        let link = rt.page.create_element("a");
        rt.page.add_class(link, "nav-link");
        rt.page.set_attr(link, "href", href);
        rt.page.append_child(body, link);
        if href == "/lands" {
            nav_lands = link;
        }
    }

    let alert = rt.page.create_element("div");
    rt.page.add_class(alert, "alert");
    rt.page.set_text(alert, "Welcome back");
    rt.page.append_child(body, alert);

    let form = rt.page.create_element("form");
    rt.page.append_child(body, form);
    let field = |rt: &mut Runtime, name: &str, kind: &str| {
        let wrapper = rt.page.create_element("div");
        let input = rt.page.create_element("input");
        rt.page.set_attr(input, "name", name);
        rt.page.set_attr(input, "type", kind);
        rt.page.set_attr(input, "required", "");
        rt.page.append_child(form, wrapper);
        rt.page.append_child(wrapper, input);
        input
    };
    let land_id = field(&mut rt, "land_id", "text");
    let email = field(&mut rt, "owner_email", "email");

    let table = rt.page.create_element("table");
    rt.page.add_class(table, "data-table");
    rt.page.append_child(body, table);
    let thead = rt.page.create_element("thead");
    let header_row = rt.page.create_element("tr");
    rt.page.append_child(table, thead);
    rt.page.append_child(thead, header_row);
    let th = rt.page.create_element("th");
    rt.page.set_text(th, "Area");
    rt.page.append_child(header_row, th);
    let tbody = rt.page.create_element("tbody");
    rt.page.append_child(table, tbody);
    for area in ["10", "2", "33"] {
        let tr = rt.page.create_element("tr");
        let td = rt.page.create_element("td");
        rt.page.set_text(td, area);
        rt.page.append_child(tbody, tr);
        rt.page.append_child(tr, td);
    }

    let hash_badge = rt.page.create_element("span");
    rt.page.set_attr(hash_badge, "title", "Block hash");
    rt.page.append_child(body, hash_badge);

    install_all(&mut rt, "/lands");

    RegistryPage {
        rt,
        nav_lands,
        alert,
        form,
        land_id,
        email,
        table,
        hash_badge,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cadastre_ui=debug")
        .with_test_writer()
        .try_init();
}

fn inline_error(rt: &Runtime, field: NodeId) -> Option<String> {
    let parent = rt.page.parent(field)?;
    let error = rt.page.child_by_class(parent, "field-error")?;
    Some(rt.page.text(error).to_string())
}

fn column_texts(rt: &Runtime, table: NodeId) -> Vec<String> {
    let tbody = rt
        .page
        .descendants(table)
        .into_iter()
        .find(|&n| rt.page.tag(n) == "tbody")
        .expect("tbody");
    rt.page
        .children(tbody)
        .into_iter()
        .map(|row| {
            let cell = rt.page.children(row)[0];
            rt.page.text(cell).to_string()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn current_nav_link_is_highlighted() {
    init_tracing();
    let page = build_page();
    assert!(page.rt.page.has_class(page.nav_lands, "active"));
}

#[test]
fn flash_alert_expires_on_its_own() {
    init_tracing();
    let mut page = build_page();
    assert!(page.rt.page.contains(page.alert));

    page.rt.advance(5300);
    assert!(!page.rt.page.contains(page.alert));
}

#[test]
fn invalid_transfer_form_cannot_submit() {
    init_tracing();
    let mut page = build_page();

    page.rt.page.set_value(page.land_id, "ab");
    page.rt.page.set_value(page.email, "clerk@registry");

    assert!(!page.rt.submit(page.form));
    assert_eq!(
        inline_error(&page.rt, page.land_id).as_deref(),
        Some("Land ID must be at least 3 characters long")
    );
    assert_eq!(
        inline_error(&page.rt, page.email).as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn corrected_form_submits() {
    init_tracing();
    let mut page = build_page();

    page.rt.page.set_value(page.land_id, "ab");
    page.rt.page.set_value(page.email, "clerk@registry");
    assert!(!page.rt.submit(page.form));

    // Typing clears the stale errors immediately.
    page.rt.page.set_value(page.land_id, "LR-001");
    page.rt.input(page.land_id);
    assert!(inline_error(&page.rt, page.land_id).is_none());

    page.rt.page.set_value(page.email, "clerk@registry.gov");
    page.rt.input(page.email);

    assert!(page.rt.submit(page.form));
    assert!(inline_error(&page.rt, page.land_id).is_none());
    assert!(inline_error(&page.rt, page.email).is_none());
}

#[test]
fn parcel_table_sorts_and_reverses() {
    init_tracing();
    let mut page = build_page();
    let header = page
        .rt
        .page
        .descendants(page.table)
        .into_iter()
        .find(|&n| page.rt.page.tag(n) == "th")
        .expect("header");

    page.rt.click(header);
    assert_eq!(column_texts(&page.rt, page.table), vec!["2", "10", "33"]);

    page.rt.click(header);
    assert_eq!(column_texts(&page.rt, page.table), vec!["33", "10", "2"]);
}

#[test]
fn hash_badge_tooltip_appears_and_disappears() {
    init_tracing();
    let mut page = build_page();

    page.rt.pointer_enter(page.hash_badge);
    assert_eq!(page.rt.page.query_class("custom-tooltip").len(), 1);
    assert!(!page.rt.page.has_attr(page.hash_badge, "title"));

    page.rt.pointer_leave(page.hash_badge);
    assert!(page.rt.page.query_class("custom-tooltip").is_empty());
    assert_eq!(page.rt.page.attr(page.hash_badge, "title"), Some("Block hash"));
}

#[test]
fn toast_announces_a_recorded_transfer() {
    init_tracing();
    let mut page = build_page();
    let center = Notifications::new();

    let handle = center.notify(
        &mut page.rt,
        "Transfer recorded",
        Severity::Success,
        5000,
    );
    assert!(center.is_live(handle));

    page.rt.advance(5300);
    assert!(!center.is_live(handle));
    assert!(page.rt.page.query_class("notification").is_empty());
}

#[test]
fn unknown_severity_label_renders_as_info() {
    init_tracing();
    let mut page = build_page();
    let center = Notifications::new();

    cadastre_ui::notify(&mut page.rt, &center, "hello", "catastrophic", 0);
    let toast = page.rt.page.query_class("notification")[0];
    assert!(page.rt.page.has_class(toast, "notification-info"));
}
