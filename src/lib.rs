// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Pagewire - Page Enhancement Script on a Pure Rust DOM
//!
//! The behaviour layer of a small marketing site, mounted on an html5ever
//! DOM instead of a browser, so it can be driven from tests and the CLI.
//!
//! ## Features
//!
//! - Navigation toggle: hamburger opens/closes the menu, links close it
//! - Scroll watcher: header gets a `scrolled` class past 50px
//! - Carousel: prev/next/dot controls with wrap-around and 5s autoplay
//! - Contact form: sanitization, per-field rules, inline errors, live checks
//! - Virtual clock: autoplay and timers advance without sleeping
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use pagewire::{Page, ScriptConfig, UiEvent};
//!
//! fn main() -> pagewire::Result<()> {
//!     let html = std::fs::read_to_string("demos/site.html")?;
//!     let mut page = Page::from_html(&html, ScriptConfig::default())?;
//!
//!     page.dispatch(&UiEvent::click_id("hamburger"))?;
//!     page.advance(Duration::from_secs(10));
//!
//!     println!("{:?}", page.state());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod page;
pub mod runtime;
pub mod widgets;

// Re-exports for convenience

// Page
pub use page::{Page, PageState};

// Configuration
pub use config::{ClassNames, ElementIds, ScriptConfig};

// DOM
pub use dom::{parse_html, Document, Element, Node};

// Errors
pub use error::{Error, Result};

// Forms
pub use form::{sanitize_input, ContactForm, FieldKind, FormField, SubmitOutcome};

// Runtime
pub use runtime::{Dialog, DialogKind, DispatchOutcome, ReplayStep, TimerQueue, UiEvent};

// Widgets
pub use widgets::{Carousel, NavToggle, ScrollWatcher};

/// Pagewire version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
