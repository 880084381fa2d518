// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for pagewire
//!
//! Validation failures are never errors: they surface as inline messages on
//! the page. This enum covers the things that stop a script from mounting or
//! a CLI run from completing.

use thiserror::Error;

/// Result type alias for pagewire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pagewire
#[derive(Error, Debug)]
pub enum Error {
    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Markup lacks an element the script binds to
    #[error("Missing element: {what}")]
    MissingElement { what: String },

    /// Selector parsing error
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Field name not known to the contact form
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing element error for an element id
    pub fn missing_id(id: &str) -> Self {
        Error::MissingElement {
            what: format!("#{}", id),
        }
    }

    /// Create a missing element error for a selector that matched nothing
    pub fn missing_selector(selector: &str) -> Self {
        Error::MissingElement {
            what: selector.to_string(),
        }
    }

    /// Create a selector error
    pub fn selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Selector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if the page markup is missing something the script needs
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Error::MissingElement { .. })
    }

    /// Check if this came from reading or decoding input files
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Serialization(_) | Error::HtmlParse(_)
        )
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
