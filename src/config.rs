// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Script configuration
//!
//! Every hook the script needs from the markup (ids, class names) plus the
//! few tunables. Defaults match the stock site template; a JSON file can
//! override any subset.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::form::FieldKind;

/// Element ids the script binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub hamburger: String,
    pub nav_menu: String,
    pub header: String,
    pub carousel_track: String,
    pub carousel_prev: String,
    pub carousel_next: String,
    pub contact_form: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub service: String,
    pub message: String,
    /// Appended to a control id to find its error slot
    pub error_suffix: String,
    pub year: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            hamburger: "hamburger".into(),
            nav_menu: "nav-menu".into(),
            header: "header".into(),
            carousel_track: "carousel-track".into(),
            carousel_prev: "carousel-prev".into(),
            carousel_next: "carousel-next".into(),
            contact_form: "contact-form".into(),
            name: FieldKind::Name.id().into(),
            email: FieldKind::Email.id().into(),
            subject: FieldKind::Subject.id().into(),
            service: FieldKind::Service.id().into(),
            message: FieldKind::Message.id().into(),
            error_suffix: "-error".into(),
            year: "year".into(),
        }
    }
}

impl ElementIds {
    /// Id of a contact form control
    pub fn field(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Subject => &self.subject,
            FieldKind::Service => &self.service,
            FieldKind::Message => &self.message,
        }
    }

    /// Id of the element that shows a field's error
    pub fn field_error(&self, kind: FieldKind) -> String {
        format!("{}{}", self.field(kind), self.error_suffix)
    }
}

/// CSS class names the script reads or toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub nav_link: String,
    pub carousel_slide: String,
    pub carousel_dot: String,
    /// Open menu and current carousel dot
    pub active: String,
    /// Header past the scroll threshold
    pub scrolled: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            nav_link: "nav-link".into(),
            carousel_slide: "carousel-slide".into(),
            carousel_dot: "carousel-dot".into(),
            active: "active".into(),
            scrolled: "scrolled".into(),
        }
    }
}

/// Page script configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub ids: ElementIds,
    pub classes: ClassNames,
    /// Vertical offset past which the header counts as scrolled
    pub scroll_threshold: f64,
    /// Carousel autoplay period
    pub autoplay_interval_ms: u64,
    /// Hamburger label while the menu is open
    pub menu_open_icon: String,
    /// Hamburger label while the menu is closed
    pub menu_closed_icon: String,
    /// Alert text after an accepted contact form
    pub confirmation_message: String,
    /// Footer year; `None` uses the local calendar year at mount
    pub footer_year: Option<i32>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            scroll_threshold: 50.0,
            autoplay_interval_ms: 5000,
            menu_open_icon: "✕".into(),
            menu_closed_icon: "☰".into(),
            confirmation_message: "Thank you for your message! We will get back to you soon."
                .into(),
            footer_year: None,
        }
    }
}

impl ScriptConfig {
    /// Create a new script config
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the script cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(Error::config(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        if self.autoplay_interval_ms == 0 {
            return Err(Error::config("autoplay_interval_ms must be positive"));
        }
        Ok(())
    }

    /// Carousel autoplay period as a duration
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Set scroll threshold
    pub fn scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Set carousel autoplay period
    pub fn autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    /// Pin the footer year
    pub fn footer_year(mut self, year: i32) -> Self {
        self.footer_year = Some(year);
        self
    }

    /// Set confirmation alert text
    pub fn confirmation_message(mut self, message: impl Into<String>) -> Self {
        self.confirmation_message = message.into();
        self
    }
}
