// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header scroll effect

use crate::config::ScriptConfig;
use crate::dom::Document;

/// Marks the header once the page scrolls past a threshold
#[derive(Debug, Clone)]
pub struct ScrollWatcher {
    header_id: String,
    class: String,
    threshold: f64,
}

impl ScrollWatcher {
    pub fn new(config: &ScriptConfig) -> Self {
        Self {
            header_id: config.ids.header.clone(),
            class: config.classes.scrolled.clone(),
            threshold: config.scroll_threshold,
        }
    }

    /// Whether offset `y` counts as scrolled (strictly past the threshold)
    pub fn is_past(&self, y: f64) -> bool {
        y > self.threshold
    }

    /// Apply the scroll state for offset `y`. The header is looked up on
    /// every event; pages without one are left alone.
    pub fn on_scroll(&self, doc: &Document, y: f64) -> Option<bool> {
        let Some(header) = doc.get_element_by_id(&self.header_id) else {
            tracing::debug!(id = %self.header_id, "No header to mark on scroll");
            return None;
        };
        let scrolled = self.is_past(y);
        header.set_class(&self.class, scrolled);
        Some(scrolled)
    }
}
