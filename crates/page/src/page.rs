//! The page tree.

use std::collections::BTreeMap;

use crate::element::{Element, NodeId, Rect};

/// In-memory document tree the controllers operate on.
///
/// Nodes are created detached and become visible to queries once attached
/// under the body. [`Page::remove`] drops the whole subtree from the
/// registry and is idempotent: removing a node twice is a no-op, as is any
/// accessor or mutator against a node that no longer exists.
#[derive(Debug)]
pub struct Page {
    nodes: BTreeMap<NodeId, Element>,
    body: NodeId,
    next_id: NodeId,
}

impl Page {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(0, Element::new("body"));
        Self {
            nodes,
            body: 0,
            next_id: 1,
        }
    }

    /// The root element every attached node descends from.
    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Number of nodes in the registry, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, Element::new(tag));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first (appending an attached node moves it).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) || parent == child {
            return;
        }
        // Refuse to create a cycle: `child` must not be an ancestor of
        // `parent`.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return;
            }
            cursor = self.parent(node);
        }
        self.detach(child);
        if let Some(element) = self.nodes.get_mut(&child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.nodes.get_mut(&parent) {
            element.children.push(child);
        }
    }

    /// Remove `node` and its entire subtree from the registry. No-op when
    /// the node is already gone.
    pub fn remove(&mut self, node: NodeId) {
        if !self.contains(node) || node == self.body {
            return;
        }
        self.detach(node);
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(element) = self.nodes.remove(&current) {
                stack.extend(element.children);
            }
        }
    }

    /// Drop every child of `node`, keeping the node itself.
    pub fn clear_children(&mut self, node: NodeId) {
        for child in self.children(node) {
            self.remove(child);
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|e| e.parent)
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map(|e| e.tag.as_str()).unwrap_or("")
    }

    // ---- attributes ----

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.attrs.remove(name);
        }
    }

    // ---- classes ----

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.classes.remove(class);
        }
    }

    // ---- inline style ----

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn remove_style(&mut self, node: NodeId, property: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.style.remove(property);
        }
    }

    // ---- text, value, state ----

    pub fn text(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.text = text.to_string();
        }
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.nodes
            .get(&node)
            .map(|e| e.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.value = value.to_string();
        }
    }

    pub fn disabled(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|e| e.disabled)
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.disabled = disabled;
        }
    }

    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(&node).and_then(|e| e.rect)
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(element) = self.nodes.get_mut(&node) {
            element.rect = Some(rect);
        }
    }

    // ---- queries (attached nodes, document order) ----

    /// Every attached node carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// Every attached node carrying attribute `name`, in document order.
    pub fn query_attr(&self, name: &str) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|&n| self.has_attr(n, name))
            .collect()
    }

    /// Every attached node with the given tag, in document order.
    pub fn query_tag(&self, tag: &str) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|&n| self.tag(n) == tag)
            .collect()
    }

    /// Depth-first descendants of `node`, excluding the node itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node);
        stack.reverse();
        while let Some(current) = stack.pop() {
            out.push(current);
            let mut children = self.children(current);
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// First descendant of `scope` whose `name` attribute equals `name`.
    pub fn find_named(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&n| self.attr(n, "name") == Some(name))
    }

    /// First direct child of `parent` carrying `class`.
    pub fn child_by_class(&self, parent: NodeId, class: &str) -> Option<NodeId> {
        self.children(parent)
            .into_iter()
            .find(|&n| self.has_class(n, class))
    }

    /// First direct child of `parent` with the given tag.
    pub fn child_by_tag(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.children(parent)
            .into_iter()
            .find(|&n| self.tag(n) == tag)
    }

    // ---- internals ----

    fn attached(&self) -> Vec<NodeId> {
        let mut out = vec![self.body];
        out.extend(self.descendants(self.body));
        out
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(element) = self.nodes.get_mut(&parent) {
            element.children.retain(|&c| c != node);
        }
        if let Some(element) = self.nodes.get_mut(&node) {
            element.parent = None;
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_elements_are_detached_until_appended() {
        let mut page = Page::new();
        let div = page.create_element("div");
        page.add_class(div, "alert");
        assert!(page.query_class("alert").is_empty());

        let body = page.body();
        page.append_child(body, div);
        assert_eq!(page.query_class("alert"), vec![div]);
    }

    #[test]
    fn append_moves_an_attached_node() {
        let mut page = Page::new();
        let body = page.body();
        let a = page.create_element("div");
        let b = page.create_element("div");
        let child = page.create_element("span");
        page.append_child(body, a);
        page.append_child(body, b);
        page.append_child(a, child);

        page.append_child(b, child);
        assert_eq!(page.children(a), Vec::<NodeId>::new());
        assert_eq!(page.children(b), vec![child]);
        assert_eq!(page.parent(child), Some(b));
    }

    #[test]
    fn remove_drops_the_subtree_and_is_idempotent() {
        let mut page = Page::new();
        let body = page.body();
        let outer = page.create_element("div");
        let inner = page.create_element("span");
        page.append_child(body, outer);
        page.append_child(outer, inner);

        page.remove(outer);
        assert!(!page.contains(outer));
        assert!(!page.contains(inner));

        // Second removal must not fail.
        page.remove(outer);
        assert_eq!(page.node_count(), 1);
    }

    #[test]
    fn accessors_on_missing_nodes_are_inert() {
        let mut page = Page::new();
        let ghost = page.create_element("div");
        page.remove(ghost);
        // Detached-never-attached nodes are still in the registry; a
        // removed one is not. Neither path may panic.
        assert_eq!(page.text(9999), "");
        assert_eq!(page.attr(9999, "title"), None);
        page.set_text(9999, "x");
        page.add_class(9999, "y");
    }

    #[test]
    fn queries_walk_in_document_order() {
        let mut page = Page::new();
        let body = page.body();
        let first = page.create_element("tr");
        let second = page.create_element("tr");
        page.append_child(body, first);
        page.append_child(body, second);
        assert_eq!(page.query_tag("tr"), vec![first, second]);
    }

    #[test]
    fn find_named_is_scoped_to_the_subtree() {
        let mut page = Page::new();
        let body = page.body();
        let form = page.create_element("form");
        let input = page.create_element("input");
        let stray = page.create_element("input");
        page.set_attr(input, "name", "email");
        page.set_attr(stray, "name", "email");
        page.append_child(body, form);
        page.append_child(form, input);
        page.append_child(body, stray);

        assert_eq!(page.find_named(form, "email"), Some(input));
        assert_eq!(page.find_named(form, "missing"), None);
    }

    #[test]
    fn clear_children_keeps_the_node() {
        let mut page = Page::new();
        let body = page.body();
        let button = page.create_element("button");
        let icon = page.create_element("i");
        page.append_child(body, button);
        page.append_child(button, icon);

        page.clear_children(button);
        assert!(page.contains(button));
        assert!(!page.contains(icon));
    }
}
