//! Active-link highlighting for the top navigation.

use cadastre_page::Runtime;

/// Mark every `.nav-link` whose `href` equals `current_path` as active.
pub fn install(rt: &mut Runtime, current_path: &str) {
    for link in rt.page.query_class("nav-link") {
        if rt.page.attr(link, "href") == Some(current_path) {
            rt.page.add_class(link, "active");
        }
    }
}
