//! Sortable data tables.
//!
//! Header clicks toggle the column's direction and physically reorder the
//! body rows. Exactly one column carries a sort indicator at a time.

use cadastre_core::table::{sorted_order, SortDirection};
use cadastre_page::{EventKind, NodeId, Page, Runtime};

/// Install sorting on every `.data-table` currently in the page.
pub fn install(rt: &mut Runtime) {
    for table in rt.page.query_class("data-table") {
        bind_table(rt, table);
    }
}

/// Make each non-empty header of `table` clickable, with a neutral sort
/// glyph.
pub fn bind_table(rt: &mut Runtime, table: NodeId) {
    for (index, header) in header_cells(&rt.page, table).into_iter().enumerate() {
        if rt.page.text(header).trim().is_empty() {
            continue;
        }
        rt.page.set_style(header, "cursor", "pointer");

        let icon = rt.page.create_element("i");
        rt.page.add_class(icon, "fas");
        rt.page.add_class(icon, "fa-sort");
        rt.page.set_style(icon, "margin-left", "0.5rem");
        rt.page.set_style(icon, "opacity", "0.5");
        rt.page.append_child(header, icon);

        rt.on(header, EventKind::Click, move |rt, _| {
            sort_table(rt, table, index);
        });
    }
}

/// Sort `table` by the column at `column_index`, toggling direction from
/// the column's previous state.
pub fn sort_table(rt: &mut Runtime, table: NodeId, column_index: usize) {
    let headers = header_cells(&rt.page, table);
    let Some(&header) = headers.get(column_index) else {
        return;
    };

    let previous = if rt.page.has_class(header, "sort-asc") {
        Some(SortDirection::Ascending)
    } else if rt.page.has_class(header, "sort-desc") {
        Some(SortDirection::Descending)
    } else {
        None
    };
    let direction = SortDirection::toggled(previous);

    // Single active column: reset every header before marking the new one.
    for &h in &headers {
        rt.page.remove_class(h, "sort-asc");
        rt.page.remove_class(h, "sort-desc");
        if let Some(icon) = sort_icon(&rt.page, h) {
            rt.page.remove_class(icon, "fa-sort-up");
            rt.page.remove_class(icon, "fa-sort-down");
            rt.page.add_class(icon, "fa-sort");
            rt.page.set_style(icon, "opacity", "0.5");
        }
    }

    let (class, glyph) = match direction {
        SortDirection::Ascending => ("sort-asc", "fa-sort-up"),
        SortDirection::Descending => ("sort-desc", "fa-sort-down"),
    };
    rt.page.add_class(header, class);
    if let Some(icon) = sort_icon(&rt.page, header) {
        rt.page.remove_class(icon, "fa-sort");
        rt.page.add_class(icon, glyph);
        rt.page.set_style(icon, "opacity", "1");
    }

    let Some(tbody) = rt
        .page
        .descendants(table)
        .into_iter()
        .find(|&n| rt.page.tag(n) == "tbody")
    else {
        return;
    };
    let rows: Vec<NodeId> = rt
        .page
        .children(tbody)
        .into_iter()
        .filter(|&r| rt.page.tag(r) == "tr")
        .collect();
    let cells: Vec<String> = rows
        .iter()
        .map(|&row| cell_text(&rt.page, row, column_index))
        .collect();

    // Re-appending in sorted order moves each row to the back.
    for index in sorted_order(&cells, direction) {
        rt.page.append_child(tbody, rows[index]);
    }
}

fn header_cells(page: &Page, table: NodeId) -> Vec<NodeId> {
    page.descendants(table)
        .into_iter()
        .filter(|&n| page.tag(n) == "th")
        .collect()
}

fn sort_icon(page: &Page, header: NodeId) -> Option<NodeId> {
    page.child_by_tag(header, "i")
}

fn cell_text(page: &Page, row: NodeId, column: usize) -> String {
    page.children(row)
        .get(column)
        .map(|&cell| page.text(cell).trim().to_string())
        .unwrap_or_default()
}
