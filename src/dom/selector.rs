// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! CSS Selector parsing and matching
//!
//! The subset page scripts actually use: compound selectors made of tag, id,
//! class, attribute and a few pseudo-classes, joined into comma lists.
//! Combinators are not supported.

use crate::error::{Error, Result};

use super::node::Node;

/// A parsed selector list (`a, b, c`); matches if any member matches
#[derive(Debug, Clone)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

/// A compound selector (`input.big[required]`); matches if every part matches
#[derive(Debug, Clone)]
struct Compound {
    parts: Vec<SelectorPart>,
}

/// A part of a selector
#[derive(Debug, Clone)]
pub enum SelectorPart {
    /// Universal selector (*)
    Universal,
    /// Tag name
    Tag(String),
    /// ID selector (#id)
    Id(String),
    /// Class selector (.class)
    Class(String),
    /// Attribute selector ([attr], [attr=value], etc.)
    Attribute(AttributeSelector),
    /// Pseudo-class (:first-child, etc.)
    PseudoClass(PseudoClass),
}

/// Attribute selector
#[derive(Debug, Clone)]
pub struct AttributeSelector {
    pub name: String,
    pub operator: Option<AttributeOperator>,
    pub value: Option<String>,
}

/// Attribute selector operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOperator {
    /// [attr=value]
    Equals,
    /// [attr~=value]
    Includes,
    /// [attr^=value]
    Prefix,
    /// [attr$=value]
    Suffix,
    /// [attr*=value]
    Substring,
}

/// Pseudo-class selectors
#[derive(Debug, Clone)]
pub enum PseudoClass {
    FirstChild,
    LastChild,
    Checked,
    Disabled,
    Not(Box<Selector>),
}

impl Selector {
    /// Parse a CSS selector string
    pub fn parse(selector: &str) -> Result<Self> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(Error::selector(selector, "Empty selector"));
        }

        let alternatives = split_top_level(trimmed)
            .into_iter()
            .map(|part| SelectorParser::new(part).parse_compound())
            .collect::<std::result::Result<Vec<_>, String>>()
            .map_err(|reason| Error::selector(selector, reason))?;

        Ok(Self { alternatives })
    }

    /// Check if a node matches this selector
    pub fn matches(&self, node: &Node) -> bool {
        node.is_element() && self.alternatives.iter().any(|c| c.matches(node))
    }
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        self.parts.iter().all(|part| part_matches(part, node))
    }
}

fn part_matches(part: &SelectorPart, node: &Node) -> bool {
    match part {
        SelectorPart::Universal => true,
        SelectorPart::Tag(tag) => node
            .local_name()
            .map(|n| n.eq_ignore_ascii_case(tag))
            .unwrap_or(false),
        SelectorPart::Id(id) => node.get_attribute("id").as_deref() == Some(id.as_str()),
        SelectorPart::Class(class) => node
            .get_attribute("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false),
        SelectorPart::Attribute(attr) => attribute_matches(attr, node),
        SelectorPart::PseudoClass(pseudo) => pseudo_matches(pseudo, node),
    }
}

fn attribute_matches(attr: &AttributeSelector, node: &Node) -> bool {
    let Some(value) = node.get_attribute(&attr.name) else {
        return false;
    };
    let (Some(op), Some(target)) = (attr.operator, attr.value.as_deref()) else {
        return true;
    };

    match op {
        AttributeOperator::Equals => value == target,
        AttributeOperator::Includes => value.split_whitespace().any(|w| w == target),
        AttributeOperator::Prefix => value.starts_with(target),
        AttributeOperator::Suffix => value.ends_with(target),
        AttributeOperator::Substring => value.contains(target),
    }
}

fn pseudo_matches(pseudo: &PseudoClass, node: &Node) -> bool {
    let element_sibling = |mut sibling: Option<Node>, forward: bool| {
        while let Some(s) = sibling {
            if s.is_element() {
                return true;
            }
            sibling = if forward { s.next_sibling() } else { s.prev_sibling() };
        }
        false
    };

    match pseudo {
        PseudoClass::FirstChild => !element_sibling(node.prev_sibling(), false),
        PseudoClass::LastChild => !element_sibling(node.next_sibling(), true),
        PseudoClass::Checked => {
            node.has_attribute("checked") || node.has_attribute("selected")
        }
        PseudoClass::Disabled => node.has_attribute("disabled"),
        PseudoClass::Not(sel) => !sel.matches(node),
    }
}

/// Split on commas that are not nested inside brackets or parentheses
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts
}

/// Compound selector parser
struct SelectorParser {
    input: Vec<char>,
    pos: usize,
}

type ParseResult<T> = std::result::Result<T, String>;

impl SelectorParser {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn parse_compound(&mut self) -> ParseResult<Compound> {
        let mut parts = Vec::new();

        while let Some(c) = self.peek() {
            let part = match c {
                '#' => {
                    self.advance();
                    SelectorPart::Id(self.read_identifier()?)
                }
                '.' => {
                    self.advance();
                    SelectorPart::Class(self.read_identifier()?)
                }
                '[' => SelectorPart::Attribute(self.parse_attribute()?),
                ':' => SelectorPart::PseudoClass(self.parse_pseudo()?),
                '*' => {
                    self.advance();
                    SelectorPart::Universal
                }
                c if c.is_alphabetic() || c == '_' || c == '-' => {
                    SelectorPart::Tag(self.read_identifier()?.to_lowercase())
                }
                c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                    return Err("Combinators are not supported".into());
                }
                c => return Err(format!("Unexpected character '{}'", c)),
            };
            parts.push(part);
        }

        if parts.is_empty() {
            return Err("Empty compound selector".into());
        }
        Ok(Compound { parts })
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        self.pos += 1;
        c
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> ParseResult<String> {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                result.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if result.is_empty() {
            return Err("Expected identifier".into());
        }
        Ok(result)
    }

    fn parse_attribute(&mut self) -> ParseResult<AttributeSelector> {
        self.advance(); // '['
        self.skip_whitespace();
        let name = self.read_identifier()?.to_lowercase();
        self.skip_whitespace();

        let mut operator = None;
        let mut value = None;

        if let Some(c) = self.peek().filter(|&c| c != ']') {
            self.advance();
            let op = match c {
                '=' => AttributeOperator::Equals,
                '~' => AttributeOperator::Includes,
                '^' => AttributeOperator::Prefix,
                '$' => AttributeOperator::Suffix,
                '*' => AttributeOperator::Substring,
                _ => return Err(format!("Unknown operator: {}", c)),
            };
            if op != AttributeOperator::Equals {
                self.expect('=')?;
            }
            operator = Some(op);

            self.skip_whitespace();
            value = Some(self.read_string_or_ident()?);
            self.skip_whitespace();
        }

        self.expect(']')?;
        Ok(AttributeSelector {
            name,
            operator,
            value,
        })
    }

    fn parse_pseudo(&mut self) -> ParseResult<PseudoClass> {
        self.advance(); // ':'
        let name = self.read_identifier()?;

        match name.to_lowercase().as_str() {
            "first-child" => Ok(PseudoClass::FirstChild),
            "last-child" => Ok(PseudoClass::LastChild),
            "checked" => Ok(PseudoClass::Checked),
            "disabled" => Ok(PseudoClass::Disabled),
            "not" => {
                let inner = self.parse_function_arg()?;
                let sel = Selector::parse(&inner).map_err(|e| e.to_string())?;
                Ok(PseudoClass::Not(Box::new(sel)))
            }
            other => Err(format!("Unsupported pseudo-class :{}", other)),
        }
    }

    fn parse_function_arg(&mut self) -> ParseResult<String> {
        self.expect('(')?;
        let mut depth = 1;
        let mut result = String::new();

        while let Some(c) = self.advance() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(result.trim().to_string());
                    }
                }
                _ => {}
            }
            result.push(c);
        }
        Err("Unclosed '('".into())
    }

    fn read_string_or_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.advance();
                let mut result = String::new();
                loop {
                    match self.advance() {
                        Some(c) if c == quote => return Ok(result),
                        Some('\\') => {
                            if let Some(escaped) = self.advance() {
                                result.push(escaped);
                            }
                        }
                        Some(c) => result.push(c),
                        None => return Err("Unterminated string".into()),
                    }
                }
            }
            _ => self.read_identifier(),
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("Expected '{}', got '{}'", expected, c)),
            None => Err(format!("Expected '{}', got EOF", expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_selector_parsing() {
        assert!(Selector::parse("div").is_ok());
        assert!(Selector::parse(".class").is_ok());
        assert!(Selector::parse("#id").is_ok());
        assert!(Selector::parse("[attr]").is_ok());
        assert!(Selector::parse("[data-index='2']").is_ok());
        assert!(Selector::parse("div.class#id").is_ok());
        assert!(Selector::parse("input, textarea, select").is_ok());
    }

    #[test]
    fn test_rejected_selectors() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("nav a").is_err());
        assert!(Selector::parse("ul > li").is_err());
        assert!(Selector::parse("div,").is_err());
        assert!(Selector::parse(":hover").is_err());
    }

    #[test]
    fn test_selector_list_matches_any() {
        let doc = parse_html(
            r#"<form><input id="a"><textarea id="b"></textarea><select id="c"></select><button id="d"></button></form>"#,
        )
        .unwrap();
        let ids: Vec<_> = doc
            .query_selector_all("input, textarea, select")
            .iter()
            .filter_map(|e| e.id())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_attribute_and_pseudo() {
        let doc = parse_html(
            r#"<div><span class="carousel-dot active" data-index="0"></span><span class="carousel-dot" data-index="1"></span></div>"#,
        )
        .unwrap();

        let second = doc.query_selector("[data-index=\"1\"]").unwrap();
        assert!(!second.has_class("active"));

        let first = doc.query_selector(".carousel-dot:first-child").unwrap();
        assert_eq!(first.get_attribute("data-index").as_deref(), Some("0"));

        let inactive = doc.query_selector_all(".carousel-dot:not(.active)");
        assert_eq!(inactive.len(), 1);
    }
}
