// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Mobile navigation toggle

use crate::config::ScriptConfig;
use crate::dom::{Document, Element};
use crate::error::Result;

/// Hamburger button, the menu it opens, and the links that close it
#[derive(Debug, Clone)]
pub struct NavToggle {
    hamburger: Element,
    menu: Element,
    links: Vec<Element>,
    active_class: String,
    open_icon: String,
    closed_icon: String,
}

impl NavToggle {
    /// Resolve the hamburger, menu and every nav link
    pub fn mount(doc: &Document, config: &ScriptConfig) -> Result<Self> {
        Ok(Self {
            hamburger: doc.require_id(&config.ids.hamburger)?,
            menu: doc.require_id(&config.ids.nav_menu)?,
            links: doc.get_elements_by_class_name(&config.classes.nav_link),
            active_class: config.classes.active.clone(),
            open_icon: config.menu_open_icon.clone(),
            closed_icon: config.menu_closed_icon.clone(),
        })
    }

    /// Whether `element` is the hamburger button
    pub fn is_trigger(&self, element: &Element) -> bool {
        &self.hamburger == element
    }

    /// Whether `element` is one of the menu links
    pub fn is_link(&self, element: &Element) -> bool {
        self.links.contains(element)
    }

    /// Hamburger clicked: flip the menu and relabel the icon
    pub fn toggle(&self) -> bool {
        let open = self.menu.toggle_class(&self.active_class);
        self.hamburger.set_text_content(if open {
            &self.open_icon
        } else {
            &self.closed_icon
        });
        tracing::debug!(open, "Navigation toggled");
        open
    }

    /// Menu link clicked: always close
    pub fn close(&self) {
        self.menu.remove_class(&self.active_class);
        self.hamburger.set_text_content(self.closed_icon.as_str());
    }

    /// Whether the menu is currently shown
    pub fn is_open(&self) -> bool {
        self.menu.has_class(&self.active_class)
    }

    /// Current hamburger label
    pub fn icon(&self) -> String {
        self.hamburger.text_content()
    }
}
