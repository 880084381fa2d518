// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations
//!
//! Class lists, inline styles and form-control values: the presentation
//! state the page script reads and mutates.

use super::node::{Node, NodeType};
use super::selector::Selector;

/// Element node with extended operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub node: Node,
}

impl Element {
    /// Wrap a node, returning `None` for non-element nodes
    pub fn new(node: Node) -> Option<Self> {
        if node.node_type() == NodeType::Element {
            Some(Self { node })
        } else {
            None
        }
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> String {
        self.node.local_name().unwrap_or_default()
    }

    /// Get element ID
    pub fn id(&self) -> Option<String> {
        self.node.get_attribute("id")
    }

    /// Get class list as vector
    pub fn class_list(&self) -> Vec<String> {
        self.node
            .get_attribute("class")
            .map(|c| c.split_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Check if element has a class
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().iter().any(|c| c == class)
    }

    /// Add a class
    pub fn add_class(&self, class: &str) {
        let mut classes = self.class_list();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
            self.node.set_attribute("class", classes.join(" "));
        }
    }

    /// Remove a class
    pub fn remove_class(&self, class: &str) {
        let classes = self.class_list();
        if classes.iter().any(|c| c == class) {
            let kept: Vec<_> = classes.into_iter().filter(|c| c != class).collect();
            self.node.set_attribute("class", kept.join(" "));
        }
    }

    /// Flip a class, returning whether it is present afterwards
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add or remove a class depending on `on`
    pub fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Inline style declarations in source order
    pub fn style(&self) -> Vec<(String, String)> {
        self.node
            .get_attribute("style")
            .map(|s| parse_style(&s))
            .unwrap_or_default()
    }

    /// Read one inline style property
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.style()
            .into_iter()
            .find(|(prop, _)| prop.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Set one inline style property, keeping the others in place
    pub fn set_style_property(&self, name: &str, value: &str) {
        let mut decls = self.style();
        match decls.iter_mut().find(|(prop, _)| prop.eq_ignore_ascii_case(name)) {
            Some(decl) => decl.1 = value.to_string(),
            None => decls.push((name.to_lowercase(), value.to_string())),
        }

        let css: Vec<String> = decls
            .iter()
            .map(|(prop, value)| format!("{}: {};", prop, value))
            .collect();
        self.node.set_attribute("style", css.join(" "));
    }

    /// Get an attribute
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.node.get_attribute(name)
    }

    /// Set an attribute
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.node.set_attribute(name, value);
    }

    /// Check if has attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.node.has_attribute(name)
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        self.node.text_content()
    }

    /// Set text content
    pub fn set_text_content(&self, content: impl Into<String>) {
        self.node.set_text_content(content);
    }

    /// Get outer HTML
    pub fn outer_html(&self) -> String {
        self.node.outer_html()
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element> {
        self.node.parent().and_then(Element::new)
    }

    /// Get child elements (only element nodes)
    pub fn children(&self) -> Vec<Element> {
        self.node
            .children()
            .into_iter()
            .filter_map(Element::new)
            .collect()
    }

    /// Query selector - first matching descendant
    pub fn query_selector(&self, selector: &str) -> Option<Element> {
        let sel = Selector::parse(selector).ok()?;
        self.descendants().into_iter().find(|e| sel.matches(&e.node))
    }

    /// Query selector all - matching descendants in document order
    pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        match Selector::parse(selector) {
            Ok(sel) => self
                .descendants()
                .into_iter()
                .filter(|e| sel.matches(&e.node))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// All descendant elements in document order, excluding self
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut stack: Vec<Element> = self.children().into_iter().rev().collect();
        while let Some(elem) = stack.pop() {
            stack.extend(elem.children().into_iter().rev());
            out.push(elem);
        }
        out
    }

    /// Check if element matches a selector
    pub fn matches(&self, selector: &str) -> bool {
        Selector::parse(selector)
            .map(|sel| sel.matches(&self.node))
            .unwrap_or(false)
    }

    /// Get closest ancestor-or-self matching selector
    pub fn closest(&self, selector: &str) -> Option<Element> {
        let sel = Selector::parse(selector).ok()?;
        let mut current = Some(self.clone());
        while let Some(elem) = current {
            if sel.matches(&elem.node) {
                return Some(elem);
            }
            current = elem.parent_element();
        }
        None
    }

    /// Check if element is a form control with a value
    pub fn is_form_control(&self) -> bool {
        matches!(self.local_name().as_str(), "input" | "textarea" | "select")
    }

    /// The value a control shows before the user touches it
    pub fn default_value(&self) -> Option<String> {
        match self.local_name().as_str() {
            "input" => Some(self.get_attribute("value").unwrap_or_default()),
            "textarea" => Some(self.text_content()),
            "select" => {
                let options = self.query_selector_all("option");
                let chosen = options
                    .iter()
                    .find(|o| o.has_attribute("selected"))
                    .or_else(|| options.first());
                Some(chosen.map(option_value).unwrap_or_default())
            }
            _ => None,
        }
    }

    /// Current value of a form control (`None` for other elements)
    pub fn value(&self) -> Option<String> {
        if !self.is_form_control() {
            return None;
        }
        self.node.dirty_value().or_else(|| self.default_value())
    }

    /// Set the current value of a form control, as typing or choosing would
    pub fn set_value(&self, value: impl Into<String>) {
        if self.is_form_control() {
            self.node.set_dirty_value(Some(value.into()));
        }
    }

    /// Reset a form control, or every control inside a form
    pub fn reset(&self) {
        if self.is_form_control() {
            self.node.set_dirty_value(None);
        }
        for control in self.descendants().iter().filter(|e| e.is_form_control()) {
            control.node.set_dirty_value(None);
        }
    }

    /// Get the form this element belongs to
    pub fn form(&self) -> Option<Element> {
        self.closest("form")
    }
}

impl std::ops::Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

fn option_value(option: &Element) -> String {
    option
        .get_attribute("value")
        .unwrap_or_else(|| option.text_content().trim().to_string())
}

fn parse_style(css: &str) -> Vec<(String, String)> {
    css.split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            if prop.is_empty() {
                return None;
            }
            Some((prop.to_lowercase(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    #[test]
    fn test_element_class_list() {
        let doc = parse_html("<div class=\"foo bar baz\">test</div>").unwrap();
        let div = doc.query_selector("div").unwrap();
        let classes = div.class_list();
        assert!(classes.contains(&"foo".to_string()));
        assert!(classes.contains(&"bar".to_string()));
        assert!(classes.contains(&"baz".to_string()));
    }

    #[test]
    fn test_toggle_class() {
        let doc = parse_html("<ul id=\"menu\" class=\"nav-menu\"></ul>").unwrap();
        let menu = doc.get_element_by_id("menu").unwrap();

        assert!(menu.toggle_class("active"));
        assert_eq!(menu.get_attribute("class").as_deref(), Some("nav-menu active"));
        assert!(!menu.toggle_class("active"));
        assert_eq!(menu.get_attribute("class").as_deref(), Some("nav-menu"));
    }

    #[test]
    fn test_remove_missing_class_leaves_attribute_alone() {
        let doc = parse_html("<header id=\"header\"></header>").unwrap();
        let header = doc.get_element_by_id("header").unwrap();
        header.remove_class("scrolled");
        assert!(!header.has_attribute("class"));
    }

    #[test]
    fn test_style_property_update() {
        let doc = parse_html("<div id=\"t\" style=\"color: red; transform: none\"></div>").unwrap();
        let div = doc.get_element_by_id("t").unwrap();

        div.set_style_property("transform", "translateX(-100%)");
        div.set_style_property("display", "block");

        assert_eq!(
            div.style_property("transform").as_deref(),
            Some("translateX(-100%)")
        );
        assert_eq!(div.style_property("color").as_deref(), Some("red"));
        assert_eq!(
            div.get_attribute("style").as_deref(),
            Some("color: red; transform: translateX(-100%); display: block;")
        );
    }

    #[test]
    fn test_control_values_and_reset() {
        let html = r#"
            <form id="f">
                <input id="name" value="preset">
                <textarea id="message">hello</textarea>
                <select id="service">
                    <option value="">Select</option>
                    <option value="web">Web</option>
                </select>
            </form>
        "#;
        let doc = parse_html(html).unwrap();
        let name = doc.get_element_by_id("name").unwrap();
        let message = doc.get_element_by_id("message").unwrap();
        let service = doc.get_element_by_id("service").unwrap();

        assert_eq!(name.value().as_deref(), Some("preset"));
        assert_eq!(message.value().as_deref(), Some("hello"));
        assert_eq!(service.value().as_deref(), Some(""));

        name.set_value("Jane");
        message.set_value("typed");
        service.set_value("web");
        assert_eq!(service.value().as_deref(), Some("web"));

        doc.get_element_by_id("f").unwrap().reset();
        assert_eq!(name.value().as_deref(), Some("preset"));
        assert_eq!(message.value().as_deref(), Some("hello"));
        assert_eq!(service.value().as_deref(), Some(""));
    }

    #[test]
    fn test_non_control_has_no_value() {
        let doc = parse_html("<div id=\"d\">x</div>").unwrap();
        let div = doc.get_element_by_id("d").unwrap();
        div.set_value("ignored");
        assert!(div.value().is_none());
    }

    #[test]
    fn test_closest_form() {
        let doc = parse_html("<form id=\"f\"><p><input id=\"i\"></p></form>").unwrap();
        let input = doc.get_element_by_id("i").unwrap();
        assert_eq!(input.form().and_then(|f| f.id()).as_deref(), Some("f"));
    }
}
