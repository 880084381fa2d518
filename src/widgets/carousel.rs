// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Slide carousel
//!
//! A cyclic index over a fixed number of slides. The track is shifted by
//! whole slide widths and exactly one indicator dot carries the active
//! class.

use crate::config::ScriptConfig;
use crate::dom::{Document, Element};
use crate::error::{Error, Result};

/// Carousel state bound to its track, buttons and dots
#[derive(Debug, Clone)]
pub struct Carousel {
    track: Element,
    prev: Element,
    next: Element,
    dots: Vec<Element>,
    slide_count: usize,
    current: usize,
    active_class: String,
}

impl Carousel {
    /// Resolve the carousel markup. At least one slide is required.
    pub fn mount(doc: &Document, config: &ScriptConfig) -> Result<Self> {
        let slide_count = doc
            .get_elements_by_class_name(&config.classes.carousel_slide)
            .len();
        if slide_count == 0 {
            return Err(Error::missing_selector(&format!(
                ".{}",
                config.classes.carousel_slide
            )));
        }

        Ok(Self {
            track: doc.require_id(&config.ids.carousel_track)?,
            prev: doc.require_id(&config.ids.carousel_prev)?,
            next: doc.require_id(&config.ids.carousel_next)?,
            dots: doc.get_elements_by_class_name(&config.classes.carousel_dot),
            slide_count,
            current: 0,
            active_class: config.classes.active.clone(),
        })
    }

    /// Index of the visible slide
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Show slide `index`.
    ///
    /// Out-of-range requests wrap by one step: anything below zero lands on
    /// the last slide, anything past the end lands on the first.
    pub fn go_to_slide(&mut self, index: isize) -> usize {
        let last = self.slide_count - 1;
        let index = if index < 0 {
            last
        } else if index as usize > last {
            0
        } else {
            index as usize
        };

        self.track
            .set_style_property("transform", &format!("translateX(-{}%)", index * 100));
        for dot in &self.dots {
            dot.remove_class(&self.active_class);
        }
        if let Some(dot) = self.dots.get(index) {
            dot.add_class(&self.active_class);
        }

        self.current = index;
        tracing::debug!(slide = index, "Carousel moved");
        index
    }

    /// Previous button
    pub fn prev(&mut self) -> usize {
        self.go_to_slide(self.current as isize - 1)
    }

    /// Next button, and the autoplay tick
    pub fn next(&mut self) -> usize {
        self.go_to_slide(self.current as isize + 1)
    }

    /// Indicator dot clicked: jump to its `data-index`
    pub fn jump_to_dot(&mut self, dot: &Element) -> Option<usize> {
        let raw = dot.get_attribute("data-index").unwrap_or_default();
        match parse_int_prefix(&raw) {
            Some(index) => Some(self.go_to_slide(index)),
            None => {
                tracing::warn!(data_index = %raw, "Ignoring carousel dot without a numeric index");
                None
            }
        }
    }

    /// Whether `element` is the previous button
    pub fn is_prev(&self, element: &Element) -> bool {
        &self.prev == element
    }

    /// Whether `element` is the next button
    pub fn is_next(&self, element: &Element) -> bool {
        &self.next == element
    }

    /// Whether `element` is an indicator dot
    pub fn is_dot(&self, element: &Element) -> bool {
        self.dots.contains(element)
    }

    /// Current inline transform of the track
    pub fn transform(&self) -> Option<String> {
        self.track.style_property("transform")
    }
}

/// Leading decimal integer, the way `parseInt(s, 10)` reads attribute text
fn parse_int_prefix(raw: &str) -> Option<isize> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: isize = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn carousel_html(slides: usize) -> String {
        let mut html = String::from(
            r#"<button id="carousel-prev">‹</button><div id="carousel-track">"#,
        );
        for i in 0..slides {
            html.push_str(&format!(r#"<div class="carousel-slide">Slide {}</div>"#, i));
        }
        html.push_str(r#"</div><button id="carousel-next">›</button><div class="dots">"#);
        for i in 0..slides {
            let active = if i == 0 { " active" } else { "" };
            html.push_str(&format!(
                r#"<span class="carousel-dot{}" data-index="{}"></span>"#,
                active, i
            ));
        }
        html.push_str("</div>");
        html
    }

    fn mounted(slides: usize) -> (Document, Carousel) {
        let doc = parse_html(&carousel_html(slides)).unwrap();
        let carousel = Carousel::mount(&doc, &ScriptConfig::default()).unwrap();
        (doc, carousel)
    }

    fn active_dots(doc: &Document) -> Vec<String> {
        doc.query_selector_all(".carousel-dot.active")
            .iter()
            .filter_map(|d| d.get_attribute("data-index"))
            .collect()
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let (_doc, mut carousel) = mounted(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_index_always_in_range() {
        let (_doc, mut carousel) = mounted(4);
        for i in -10isize..=10 {
            let landed = carousel.go_to_slide(i);
            assert!(landed < carousel.slide_count(), "{} -> {}", i, landed);
            assert_eq!(landed, carousel.current());
        }
        assert_eq!(carousel.go_to_slide(isize::MIN), 3);
        assert_eq!(carousel.go_to_slide(isize::MAX), 0);
    }

    #[test]
    fn test_track_and_single_active_dot() {
        let (doc, mut carousel) = mounted(3);
        carousel.go_to_slide(2);

        assert_eq!(carousel.transform().as_deref(), Some("translateX(-200%)"));
        assert_eq!(active_dots(&doc), vec!["2"]);

        carousel.go_to_slide(0);
        assert_eq!(carousel.transform().as_deref(), Some("translateX(-0%)"));
        assert_eq!(active_dots(&doc), vec!["0"]);
    }

    #[test]
    fn test_single_slide() {
        let (_doc, mut carousel) = mounted(1);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_dot_jump() {
        let (doc, mut carousel) = mounted(3);
        let dot = doc.query_selector("[data-index=\"2\"]").unwrap();
        assert!(carousel.is_dot(&dot));
        assert_eq!(carousel.jump_to_dot(&dot), Some(2));
    }

    #[test]
    fn test_dot_without_index_is_ignored() {
        let (doc, mut carousel) = mounted(3);
        carousel.go_to_slide(1);
        let dot = doc.query_selector("[data-index=\"2\"]").unwrap();
        dot.set_attribute("data-index", "two");

        assert_eq!(carousel.jump_to_dot(&dot), None);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("2"), Some(2));
        assert_eq!(parse_int_prefix(" 3px"), Some(3));
        assert_eq!(parse_int_prefix("-1"), Some(-1));
        assert_eq!(parse_int_prefix("+4"), Some(4));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("x1"), None);
    }

    #[test]
    fn test_requires_slides() {
        let doc = parse_html(
            r#"<div id="carousel-track"></div><button id="carousel-prev"></button><button id="carousel-next"></button>"#,
        )
        .unwrap();
        let err = Carousel::mount(&doc, &ScriptConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Missing element: .carousel-slide");
    }
}
