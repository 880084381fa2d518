// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types and the shared node store

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Shared node storage owned by a document and borrowed by every handle
pub(crate) type NodeStore = Arc<RwLock<HashMap<NodeId, NodeData>>>;

/// Unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Document type node (<!DOCTYPE>)
    DocumentType,
}

/// Internal node data
#[derive(Debug)]
pub struct NodeData {
    pub node_type: NodeType,
    /// Lowercase tag name (elements only)
    pub tag_name: Option<String>,
    /// Character data (text and comment nodes)
    pub text: Option<String>,
    pub attributes: HashMap<String, String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Value typed by the user into a form control.
    /// `None` means the control still shows its markup default.
    pub dirty_value: Option<String>,
}

impl NodeData {
    fn empty(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text: None,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
            dirty_value: None,
        }
    }

    /// Create a new element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into().to_lowercase()),
            ..Self::empty(NodeType::Element)
        }
    }

    /// Create a new text node data
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::empty(NodeType::Text)
        }
    }

    /// Create a new comment node data
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::empty(NodeType::Comment)
        }
    }

    /// Create a doctype node data
    pub fn doctype() -> Self {
        Self::empty(NodeType::DocumentType)
    }

    /// Create a new document node data
    pub fn document() -> Self {
        Self::empty(NodeType::Document)
    }
}

/// A reference to a node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    nodes: NodeStore,
}

impl Node {
    pub(crate) fn new(id: NodeId, nodes: NodeStore) -> Self {
        Self { id, nodes }
    }

    fn read<T>(&self, f: impl FnOnce(&NodeData) -> T) -> Option<T> {
        self.nodes.read().get(&self.id).map(f)
    }

    fn write<T>(&self, f: impl FnOnce(&mut NodeData) -> T) -> Option<T> {
        self.nodes.write().get_mut(&self.id).map(f)
    }

    fn handle(&self, id: NodeId) -> Node {
        Node::new(id, self.nodes.clone())
    }

    /// Get the node type. Detached ids read as text so they never match selectors.
    pub fn node_type(&self) -> NodeType {
        self.read(|n| n.node_type).unwrap_or(NodeType::Text)
    }

    /// Get the tag name in lowercase
    pub fn local_name(&self) -> Option<String> {
        self.read(|n| n.tag_name.clone()).flatten()
    }

    /// Get text content of this node and all descendants
    pub fn text_content(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        collect_text(&nodes, self.id, &mut out);
        out
    }

    /// Set text content (replaces all children with a single text node)
    pub fn set_text_content(&self, content: impl Into<String>) {
        let content = content.into();
        let mut nodes = self.nodes.write();

        let Some(node) = nodes.get_mut(&self.id) else {
            return;
        };
        if node.node_type == NodeType::Text {
            node.text = Some(content);
            return;
        }

        let old_children = std::mem::take(&mut node.children);
        let text_id = NodeId::new();
        node.children.push(text_id);

        for child in old_children {
            remove_subtree(&mut nodes, child);
        }

        let mut text = NodeData::text(content);
        text.parent = Some(self.id);
        nodes.insert(text_id, text);
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.read(|n| n.attributes.get(&name.to_lowercase()).cloned())
            .flatten()
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into().to_lowercase(), value.into());
        self.write(|n| n.attributes.insert(name, value));
    }

    /// Remove an attribute
    pub fn remove_attribute(&self, name: &str) {
        self.write(|n| n.attributes.remove(&name.to_lowercase()));
    }

    /// Check if has an attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.read(|n| n.attributes.contains_key(&name.to_lowercase()))
            .unwrap_or(false)
    }

    /// Get the user-entered value of a form control, if any
    pub fn dirty_value(&self) -> Option<String> {
        self.read(|n| n.dirty_value.clone()).flatten()
    }

    /// Set or clear the user-entered value of a form control
    pub fn set_dirty_value(&self, value: Option<String>) {
        self.write(|n| n.dirty_value = value);
    }

    /// Get parent node
    pub fn parent(&self) -> Option<Node> {
        self.read(|n| n.parent).flatten().map(|id| self.handle(id))
    }

    /// Get child nodes
    pub fn children(&self) -> Vec<Node> {
        self.read(|n| n.children.clone())
            .unwrap_or_default()
            .into_iter()
            .map(|id| self.handle(id))
            .collect()
    }

    /// Position of this node among its parent's children
    fn sibling_position(&self) -> Option<(Vec<NodeId>, usize)> {
        let nodes = self.nodes.read();
        let parent = nodes.get(&self.id)?.parent?;
        let siblings = nodes.get(&parent)?.children.clone();
        let pos = siblings.iter().position(|&id| id == self.id)?;
        Some((siblings, pos))
    }

    /// Get next sibling
    pub fn next_sibling(&self) -> Option<Node> {
        let (siblings, pos) = self.sibling_position()?;
        siblings.get(pos + 1).map(|&id| self.handle(id))
    }

    /// Get previous sibling
    pub fn prev_sibling(&self) -> Option<Node> {
        let (siblings, pos) = self.sibling_position()?;
        pos.checked_sub(1)
            .and_then(|p| siblings.get(p))
            .map(|&id| self.handle(id))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    /// Append a child node, detaching it from any previous parent
    pub fn append_child(&self, child: &Node) {
        let mut nodes = self.nodes.write();

        if let Some(old_parent) = nodes.get(&child.id).and_then(|d| d.parent) {
            if let Some(data) = nodes.get_mut(&old_parent) {
                data.children.retain(|&id| id != child.id);
            }
        }
        if let Some(data) = nodes.get_mut(&child.id) {
            data.parent = Some(self.id);
        }
        if let Some(data) = nodes.get_mut(&self.id) {
            data.children.push(child.id);
        }
    }

    /// Get inner HTML
    pub fn inner_html(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        if let Some(node) = nodes.get(&self.id) {
            for &child in &node.children {
                serialize(&nodes, child, &mut out);
            }
        }
        out
    }

    /// Get outer HTML
    pub fn outer_html(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        serialize(&nodes, self.id, &mut out);
        out
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn collect_text(nodes: &HashMap<NodeId, NodeData>, id: NodeId, out: &mut String) {
    let Some(node) = nodes.get(&id) else {
        return;
    };
    match node.node_type {
        NodeType::Text => out.push_str(node.text.as_deref().unwrap_or("")),
        NodeType::Element | NodeType::Document => {
            for &child in &node.children {
                collect_text(nodes, child, out);
            }
        }
        NodeType::Comment | NodeType::DocumentType => {}
    }
}

fn remove_subtree(nodes: &mut HashMap<NodeId, NodeData>, id: NodeId) {
    if let Some(data) = nodes.remove(&id) {
        for child in data.children {
            remove_subtree(nodes, child);
        }
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn serialize(nodes: &HashMap<NodeId, NodeData>, id: NodeId, out: &mut String) {
    let Some(node) = nodes.get(&id) else {
        return;
    };
    match node.node_type {
        NodeType::Text => out.push_str(&escape_text(node.text.as_deref().unwrap_or(""))),
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.text.as_deref().unwrap_or(""));
            out.push_str("-->");
        }
        NodeType::DocumentType => out.push_str("<!DOCTYPE html>"),
        NodeType::Document => {
            for &child in &node.children {
                serialize(nodes, child, out);
            }
        }
        NodeType::Element => {
            let tag = node.tag_name.as_deref().unwrap_or("div");
            out.push('<');
            out.push_str(tag);

            // Sorted so output is stable across runs
            let mut attrs: Vec<_> = node.attributes.iter().collect();
            attrs.sort();
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }
            for &child in &node.children {
                serialize(nodes, child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(data: NodeData) -> (NodeId, NodeStore) {
        let id = NodeId::new();
        let mut map = HashMap::new();
        map.insert(id, data);
        (id, Arc::new(RwLock::new(map)))
    }

    #[test]
    fn test_node_id() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_node_data() {
        let element = NodeData::element("DIV");
        assert_eq!(element.tag_name.as_deref(), Some("div"));
        assert_eq!(element.node_type, NodeType::Element);

        let text = NodeData::text("Hello");
        assert_eq!(text.text.as_deref(), Some("Hello"));
        assert_eq!(text.node_type, NodeType::Text);
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let (id, store) = store_with(NodeData::element("span"));
        let span = Node::new(id, store.clone());

        span.set_text_content("2025");
        span.set_text_content("2026");

        assert_eq!(span.text_content(), "2026");
        assert_eq!(span.children().len(), 1);
        // The first text node was dropped from the store
        assert_eq!(store.read().len(), 2);
    }

    #[test]
    fn test_serialize_escapes_text() {
        let (id, store) = store_with(NodeData::element("p"));
        let p = Node::new(id, store);
        p.set_attribute("title", "a \"b\"");
        p.set_text_content("<b> & co");

        assert_eq!(
            p.outer_html(),
            "<p title=\"a &quot;b&quot;\">&lt;b&gt; &amp; co</p>"
        );
    }

    #[test]
    fn test_siblings() {
        let (id, store) = store_with(NodeData::element("ul"));
        let ul = Node::new(id, store.clone());
        let mut items = Vec::new();
        for _ in 0..3 {
            let li_id = NodeId::new();
            store.write().insert(li_id, NodeData::element("li"));
            let li = Node::new(li_id, store.clone());
            ul.append_child(&li);
            items.push(li);
        }

        assert!(items[0].prev_sibling().is_none());
        assert_eq!(items[0].next_sibling(), Some(items[1].clone()));
        assert_eq!(items[2].prev_sibling(), Some(items[1].clone()));
        assert!(items[2].next_sibling().is_none());
    }
}
