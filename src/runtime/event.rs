// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! UI events dispatched into a mounted page, and what dispatch reports back

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A user interaction, as the browser would deliver it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Click on the first element matching `selector`
    Click { selector: String },
    /// Window scrolled to vertical offset `y`
    Scroll { y: f64 },
    /// User typed into a text control: `value` is its new content
    Input { id: String, value: String },
    /// User picked a value in a select control
    Change { id: String, value: String },
    /// Form submission (Enter key or submit button)
    Submit { id: String },
}

impl UiEvent {
    /// Browser event name
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Click { .. } => "click",
            UiEvent::Scroll { .. } => "scroll",
            UiEvent::Input { .. } => "input",
            UiEvent::Change { .. } => "change",
            UiEvent::Submit { .. } => "submit",
        }
    }

    /// Click on an element by id
    pub fn click_id(id: &str) -> Self {
        UiEvent::Click {
            selector: format!("#{}", id),
        }
    }
}

/// One entry of a recorded interaction script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    /// Let the page's clock run
    Wait { wait_ms: u64 },
    Event(UiEvent),
}

impl ReplayStep {
    /// Duration of a wait step
    pub fn wait(&self) -> Option<Duration> {
        match self {
            ReplayStep::Wait { wait_ms } => Some(Duration::from_millis(*wait_ms)),
            ReplayStep::Event(_) => None,
        }
    }
}

/// Result of dispatching one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    /// Number of script handlers that ran
    pub handlers_run: usize,
    /// A handler called `preventDefault()`
    pub default_prevented: bool,
}

impl DispatchOutcome {
    pub(crate) fn ran(&mut self) {
        self.handlers_run += 1;
    }

    pub(crate) fn merge(&mut self, other: DispatchOutcome) {
        self.handlers_run += other.handlers_run;
        self.default_prevented |= other.default_prevented;
    }

    /// Whether any handler reacted
    pub fn handled(&self) -> bool {
        self.handlers_run > 0
    }
}

/// Kind of modal dialog a script opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Alert,
}

/// A modal dialog captured instead of being shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialog {
    pub kind: DialogKind,
    pub message: String,
    /// Page clock when the dialog opened
    #[serde(rename = "at_ms", serialize_with = "serialize_millis")]
    pub at: Duration,
}

impl Dialog {
    /// Create an alert dialog record
    pub fn alert(message: impl Into<String>, at: Duration) -> Self {
        Self {
            kind: DialogKind::Alert,
            message: message.into(),
            at,
        }
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}
