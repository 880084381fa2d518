// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::element::Element;
use super::node::{Node, NodeData, NodeId, NodeStore};
use super::selector::Selector;
use crate::error::{Error, Result};

/// HTML Document representation
#[derive(Debug, Clone)]
pub struct Document {
    root_id: NodeId,
    pub(crate) nodes: NodeStore,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        let root_id = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root_id, NodeData::document());

        Self {
            root_id,
            nodes: Arc::new(RwLock::new(nodes)),
        }
    }

    /// Get the root node
    pub fn root(&self) -> Node {
        Node::new(self.root_id, self.nodes.clone())
    }

    /// Get the document title
    pub fn title(&self) -> String {
        self.query_selector("title")
            .map(|t| t.text_content().trim().to_string())
            .unwrap_or_default()
    }

    /// Get the <body> element
    pub fn body(&self) -> Option<Element> {
        self.query_selector("body")
    }

    /// Every element in document order
    pub fn elements(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut stack: Vec<Node> = self.root().children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            if let Some(elem) = Element::new(node) {
                out.push(elem);
            }
        }
        out
    }

    /// Query selector - find first matching element
    pub fn query_selector(&self, selector: &str) -> Option<Element> {
        let sel = Selector::parse(selector).ok()?;
        self.elements().into_iter().find(|e| sel.matches(&e.node))
    }

    /// Query selector all - find all matching elements
    pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        Selector::parse(selector)
            .map(|sel| {
                self.elements()
                    .into_iter()
                    .filter(|e| sel.matches(&e.node))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.elements()
            .into_iter()
            .find(|e| e.get_attribute("id").as_deref() == Some(id))
    }

    /// Get element by ID, failing when the markup lacks it
    pub fn require_id(&self, id: &str) -> Result<Element> {
        self.get_element_by_id(id)
            .ok_or_else(|| Error::missing_id(id))
    }

    /// Get elements by class name
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Create a new detached element
    pub fn create_element(&self, tag: &str) -> Element {
        let id = NodeId::new();
        self.nodes.write().insert(id, NodeData::element(tag));
        Element {
            node: Node::new(id, self.nodes.clone()),
        }
    }

    /// Get the document's HTML
    pub fn outer_html(&self) -> String {
        self.root().outer_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_create_element() {
        let doc = Document::new();
        let div = doc.create_element("DIV");
        assert_eq!(div.local_name(), "div");
    }

    #[test]
    fn test_get_element_by_id() {
        let doc = parse_html("<html><body><div id='test'>Hello</div></body></html>").unwrap();
        let elem = doc.get_element_by_id("test");
        assert!(elem.is_some());
        assert_eq!(elem.unwrap().text_content(), "Hello");
    }

    #[test]
    fn test_require_id_missing() {
        let doc = parse_html("<p>nothing here</p>").unwrap();
        let err = doc.require_id("hamburger").unwrap_err();
        assert!(err.is_missing_element());
    }

    #[test]
    fn test_elements_in_document_order() {
        let doc = parse_html(
            r#"<div class="carousel-dot" data-index="0"></div>
               <section><div class="carousel-dot" data-index="1"></div></section>
               <div class="carousel-dot" data-index="2"></div>"#,
        )
        .unwrap();

        let indices: Vec<_> = doc
            .get_elements_by_class_name("carousel-dot")
            .iter()
            .filter_map(|d| d.get_attribute("data-index"))
            .collect();
        assert_eq!(indices, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_title() {
        let doc = parse_html("<html><head><title> Studio </title></head></html>").unwrap();
        assert_eq!(doc.title(), "Studio");
    }
}
