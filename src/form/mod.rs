// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Contact form validation and sanitization
//!
//! - `sanitize_input` strips markup before any rule sees a value
//! - per-field rules (name/email patterns, subject/message lengths,
//!   service selection)
//! - `ContactForm` wires the rules to the form's controls and error slots

mod contact;
mod rules;
mod sanitize;

pub use contact::{ContactForm, FormField, SubmitOutcome};
pub use rules::{
    validate_email, validate_message, validate_name, validate_service, validate_subject,
    FieldKind,
};
pub use sanitize::sanitize_input;
