// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page controller
//!
//! `Page` is the mounted script: it resolves every element handle once,
//! owns the widgets, the contact form and the timer queue, and routes UI
//! events to them. Nothing is global, so a test can mount as many pages as
//! it likes.

use std::time::Duration;

use chrono::Datelike;
use serde::Serialize;

use crate::config::ScriptConfig;
use crate::dom::{parse_html, Document, Element, Selector};
use crate::error::{Error, Result};
use crate::form::{ContactForm, FieldKind, SubmitOutcome};
use crate::runtime::{Dialog, DispatchOutcome, TimerQueue, UiEvent};
use crate::widgets::{Carousel, NavToggle, ScrollWatcher};

/// Work the page schedules on its own clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    CarouselAdvance,
}

/// Serializable summary of the page's presentation state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    pub menu_open: bool,
    pub menu_icon: String,
    pub header_scrolled: bool,
    pub scroll_y: f64,
    pub current_slide: usize,
    pub slide_count: usize,
    pub visible_errors: Vec<FieldKind>,
    pub dialogs: Vec<Dialog>,
    pub elapsed_ms: u64,
    pub footer_year: i32,
}

/// A document with the enhancement script mounted on it
#[derive(Debug)]
pub struct Page {
    document: Document,
    config: ScriptConfig,
    nav: NavToggle,
    scroll: ScrollWatcher,
    carousel: Carousel,
    contact: ContactForm,
    timers: TimerQueue<TimerTask>,
    dialogs: Vec<Dialog>,
    last_submission: Option<SubmitOutcome>,
    scroll_y: f64,
    footer_year: i32,
}

impl Page {
    /// Mount the script: bind every element, start carousel autoplay and
    /// write the footer year.
    pub fn mount(document: Document, config: ScriptConfig) -> Result<Self> {
        config.validate()?;

        let nav = NavToggle::mount(&document, &config)?;
        let scroll = ScrollWatcher::new(&config);
        let carousel = Carousel::mount(&document, &config)?;
        let contact = ContactForm::mount(&document, &config.ids)?;
        let year_slot = document.require_id(&config.ids.year)?;

        let mut timers = TimerQueue::new();
        timers.set_interval(TimerTask::CarouselAdvance, config.autoplay_interval());

        let footer_year = config
            .footer_year
            .unwrap_or_else(|| chrono::Local::now().year());
        year_slot.set_text_content(footer_year.to_string());

        tracing::info!(
            slides = carousel.slide_count(),
            autoplay_ms = config.autoplay_interval_ms,
            "Page script mounted"
        );

        Ok(Self {
            document,
            config,
            nav,
            scroll,
            carousel,
            contact,
            timers,
            dialogs: Vec::new(),
            last_submission: None,
            scroll_y: 0.0,
            footer_year,
        })
    }

    /// Parse `html` and mount the script on it
    pub fn from_html(html: &str, config: ScriptConfig) -> Result<Self> {
        Self::mount(parse_html(html)?, config)
    }

    /// The underlying document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The configuration the page was mounted with
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavToggle {
        &self.nav
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Dialogs opened so far, oldest first
    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    /// Outcome of the most recent contact form submission
    pub fn last_submission(&self) -> Option<&SubmitOutcome> {
        self.last_submission.as_ref()
    }

    /// Time since mount on the page clock
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    /// Deliver one UI event
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<DispatchOutcome> {
        tracing::debug!(event = event.kind(), "Dispatching");
        match event {
            UiEvent::Click { selector } => {
                Selector::parse(selector)?;
                let target = self
                    .document
                    .query_selector(selector)
                    .ok_or_else(|| Error::missing_selector(selector))?;
                Ok(self.click(&target))
            }
            UiEvent::Scroll { y } => Ok(self.scroll_to(*y)),
            UiEvent::Input { id, value } | UiEvent::Change { id, value } => {
                let target = self.document.require_id(id)?;
                Ok(self.edit(&target, value, event.kind()))
            }
            UiEvent::Submit { id } => {
                let form = self.document.require_id(id)?;
                Ok(self.submit(&form))
            }
        }
    }

    /// Click `target`. Handlers run for the target and then each ancestor,
    /// after which a submit button submits its form.
    pub fn click(&mut self, target: &Element) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        let mut current = Some(target.clone());
        while let Some(element) = current {
            if self.nav.is_trigger(&element) {
                self.nav.toggle();
                outcome.ran();
            }
            if self.nav.is_link(&element) {
                self.nav.close();
                outcome.ran();
            }
            if self.carousel.is_prev(&element) {
                self.carousel.prev();
                outcome.ran();
            }
            if self.carousel.is_next(&element) {
                self.carousel.next();
                outcome.ran();
            }
            if self.carousel.is_dot(&element) {
                self.carousel.jump_to_dot(&element);
                outcome.ran();
            }
            current = element.parent_element();
        }

        if !outcome.default_prevented {
            if let Some(form) = submitter_form(target) {
                outcome.merge(self.submit(&form));
            }
        }
        outcome
    }

    /// Scroll the window to vertical offset `y`
    pub fn scroll_to(&mut self, y: f64) -> DispatchOutcome {
        self.scroll_y = y;
        let mut outcome = DispatchOutcome::default();
        if self.scroll.on_scroll(&self.document, y).is_some() {
            outcome.ran();
        }
        outcome
    }

    /// Type into (`input`) or choose in (`change`) a form control
    pub fn edit(&mut self, target: &Element, value: &str, event: &str) -> DispatchOutcome {
        target.set_value(value);

        let mut outcome = DispatchOutcome::default();
        if let Some(kind) = self.contact.field_for(target) {
            if kind.live_event() == event {
                self.contact.live_validate(kind);
                outcome.ran();
            }
        }
        outcome
    }

    /// Submit `form`. The contact form is always intercepted; it confirms
    /// and resets only when every field passes.
    pub fn submit(&mut self, form: &Element) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        if form != self.contact.element() {
            return outcome;
        }
        outcome.ran();
        outcome.default_prevented = true;

        let submission = self.contact.submit();
        if submission.accepted() {
            self.dialogs.push(Dialog::alert(
                self.config.confirmation_message.clone(),
                self.timers.now(),
            ));
            self.contact.reset();
        }
        self.last_submission = Some(submission);
        outcome
    }

    fn run_task(&mut self, task: TimerTask) {
        match task {
            TimerTask::CarouselAdvance => {
                self.carousel.next();
            }
        }
    }

    /// Move the page clock forward, firing due timers in order.
    /// Returns how many fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.timers.advance(by);
        let fired = due.len();
        for task in due {
            self.run_task(task);
        }
        fired
    }

    /// Let the page run for `duration` of wall-clock time, sleeping on the
    /// tokio clock between timer deadlines.
    pub async fn run_for(&mut self, duration: Duration) -> usize {
        let deadline = self.timers.now() + duration;
        let mut fired = 0;

        while let Some(wait) = self.timers.time_until_next() {
            if self.timers.now() + wait > deadline {
                break;
            }
            tokio::time::sleep(wait).await;
            fired += self.advance(wait);
        }

        let rest = deadline.saturating_sub(self.timers.now());
        tokio::time::sleep(rest).await;
        fired + self.advance(rest)
    }

    /// Current presentation state
    pub fn state(&self) -> PageState {
        let header_scrolled = self
            .document
            .get_element_by_id(&self.config.ids.header)
            .map(|h| h.has_class(&self.config.classes.scrolled))
            .unwrap_or(false);

        PageState {
            menu_open: self.nav.is_open(),
            menu_icon: self.nav.icon(),
            header_scrolled,
            scroll_y: self.scroll_y,
            current_slide: self.carousel.current(),
            slide_count: self.carousel.slide_count(),
            visible_errors: self.contact.visible_errors(),
            dialogs: self.dialogs.clone(),
            elapsed_ms: self.timers.now().as_millis() as u64,
            footer_year: self.footer_year,
        }
    }
}

/// The form a click on `target` submits, if `target` is a submit control
fn submitter_form(target: &Element) -> Option<Element> {
    let control = target.closest("button, input")?;
    let kind = control
        .get_attribute("type")
        .map(|t| t.trim().to_ascii_lowercase());
    let submits = match control.local_name().as_str() {
        "button" => kind.as_deref().map_or(true, |t| t == "submit"),
        _ => kind.as_deref() == Some("submit"),
    };
    if submits {
        control.form()
    } else {
        None
    }
}
