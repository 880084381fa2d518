// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Contact form fields and their validation rules

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::sanitize::FORM_WHITESPACE;

lazy_static! {
    static ref NAME_PATTERN: Regex =
        Regex::new(&format!(r"^[a-zA-Z{ws}]{{2,50}}$", ws = FORM_WHITESPACE)).unwrap();
    static ref EMAIL_PATTERN: Regex = Regex::new(&format!(
        r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$",
        ws = FORM_WHITESPACE
    ))
    .unwrap();
}

const SUBJECT_LEN: (usize, usize) = (5, 100);
const MESSAGE_LEN: (usize, usize) = (10, 1000);

/// Letters and spaces only, 2 to 50 characters
pub fn validate_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_subject(subject: &str) -> bool {
    within(subject, SUBJECT_LEN)
}

/// A service must be chosen; the placeholder option has an empty value
pub fn validate_service(service: &str) -> bool {
    !service.is_empty()
}

pub fn validate_message(message: &str) -> bool {
    within(message, MESSAGE_LEN)
}

/// Lengths are counted in UTF-16 code units, as a browser reports them
fn within(value: &str, (min, max): (usize, usize)) -> bool {
    (min..=max).contains(&value.encode_utf16().count())
}

/// The fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Service,
    Message,
}

impl FieldKind {
    /// All fields in form order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Subject,
        FieldKind::Service,
        FieldKind::Message,
    ];

    /// Field name, also the default id of its control
    pub fn id(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Subject => "subject",
            FieldKind::Service => "service",
            FieldKind::Message => "message",
        }
    }

    /// Check an already-sanitized value
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldKind::Name => validate_name(value),
            FieldKind::Email => validate_email(value),
            FieldKind::Subject => validate_subject(value),
            FieldKind::Service => validate_service(value),
            FieldKind::Message => validate_message(value),
        }
    }

    /// Inline error text shown when validation fails
    pub fn error_message(&self) -> &'static str {
        match self {
            FieldKind::Name => {
                "Please enter a valid name (2-50 characters, letters and spaces only)"
            }
            FieldKind::Email => "Please enter a valid email address",
            FieldKind::Subject => "Subject must be between 5 and 100 characters",
            FieldKind::Service => "Please select a service",
            FieldKind::Message => "Message must be between 10 and 1000 characters",
        }
    }

    /// DOM event that triggers live validation
    pub fn live_event(&self) -> &'static str {
        match self {
            FieldKind::Service => "change",
            _ => "input",
        }
    }

    /// Whether an empty value skips the live error.
    ///
    /// Text fields stay quiet until the user has typed something; for the
    /// service select, choosing the empty placeholder is itself the mistake.
    pub fn empty_is_quiet(&self) -> bool {
        !matches!(self, FieldKind::Service)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}
