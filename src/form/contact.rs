// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Contact form controller
//!
//! Owns handles to the form, its five controls and their error slots.
//! Submission gates on every rule; live validation reacts per field.

use serde::Serialize;

use super::rules::FieldKind;
use super::sanitize::sanitize_input;
use crate::config::ElementIds;
use crate::dom::{Document, Element};
use crate::error::Result;

/// Snapshot of one field at validation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub kind: FieldKind,
    /// Value as the user entered it
    pub raw: String,
    /// Value after sanitization, the one the rules saw
    pub sanitized: String,
    pub valid: bool,
    /// Id of the element that shows this field's error
    pub error_slot: String,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub fields: Vec<FormField>,
}

impl SubmitOutcome {
    /// Whether every field passed
    pub fn accepted(&self) -> bool {
        self.fields.iter().all(|f| f.valid)
    }

    /// Fields that failed, in form order
    pub fn invalid_fields(&self) -> Vec<FieldKind> {
        self.fields
            .iter()
            .filter(|f| !f.valid)
            .map(|f| f.kind)
            .collect()
    }

    /// Sanitized value of a field
    pub fn value(&self, kind: FieldKind) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.sanitized.as_str())
    }
}

#[derive(Debug, Clone)]
struct FieldSlot {
    kind: FieldKind,
    control: Element,
    error: Element,
    error_id: String,
}

impl FieldSlot {
    fn snapshot(&self) -> FormField {
        let raw = self.control.value().unwrap_or_default();
        let sanitized = sanitize_input(&raw);
        FormField {
            kind: self.kind,
            valid: self.kind.validate(&sanitized),
            raw,
            sanitized,
            error_slot: self.error_id.clone(),
        }
    }

    fn show_error(&self) {
        self.error.set_text_content(self.kind.error_message());
        self.error.set_style_property("display", "block");
    }

    fn hide_error(&self) {
        self.error.set_style_property("display", "none");
    }

    fn error_visible(&self) -> bool {
        self.error.style_property("display").as_deref() == Some("block")
    }
}

/// The contact form bound to its markup
#[derive(Debug, Clone)]
pub struct ContactForm {
    form: Element,
    fields: Vec<FieldSlot>,
}

impl ContactForm {
    /// Resolve the form, each control and each error slot
    pub fn mount(doc: &Document, ids: &ElementIds) -> Result<Self> {
        let form = doc.require_id(&ids.contact_form)?;
        let fields = FieldKind::ALL
            .into_iter()
            .map(|kind| -> Result<FieldSlot> {
                let error_id = ids.field_error(kind);
                Ok(FieldSlot {
                    kind,
                    control: doc.require_id(ids.field(kind))?,
                    error: doc.require_id(&error_id)?,
                    error_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { form, fields })
    }

    /// The `<form>` element
    pub fn element(&self) -> &Element {
        &self.form
    }

    fn slot(&self, kind: FieldKind) -> &FieldSlot {
        // mount() filled one slot per kind, in ALL order
        &self.fields[kind as usize]
    }

    /// Which field, if any, `element` is the control of
    pub fn field_for(&self, element: &Element) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|slot| &slot.control == element)
            .map(|slot| slot.kind)
    }

    /// Control element of a field
    pub fn control(&self, kind: FieldKind) -> &Element {
        &self.slot(kind).control
    }

    /// Handle a submit: sanitize and check every field, show an error for
    /// each failure. The caller confirms and resets on acceptance.
    pub fn submit(&self) -> SubmitOutcome {
        for slot in &self.fields {
            slot.hide_error();
        }

        let fields: Vec<FormField> = self.fields.iter().map(FieldSlot::snapshot).collect();
        for (slot, field) in self.fields.iter().zip(&fields) {
            if !field.valid {
                slot.show_error();
            }
        }

        let outcome = SubmitOutcome { fields };
        if outcome.accepted() {
            tracing::info!("Contact form accepted");
        } else {
            tracing::info!(invalid = ?outcome.invalid_fields(), "Contact form rejected");
        }
        outcome
    }

    /// Re-check one field after the user edited it
    pub fn live_validate(&self, kind: FieldKind) -> FormField {
        let slot = self.slot(kind);
        let field = slot.snapshot();
        let quiet = field.sanitized.is_empty() && kind.empty_is_quiet();

        if field.valid || quiet {
            slot.hide_error();
        } else {
            slot.show_error();
        }
        tracing::debug!(field = %kind, valid = field.valid, "Live validation");
        field
    }

    /// Whether a field's error is currently displayed
    pub fn error_visible(&self, kind: FieldKind) -> bool {
        self.slot(kind).error_visible()
    }

    /// Fields whose error is currently displayed
    pub fn visible_errors(&self) -> Vec<FieldKind> {
        self.fields
            .iter()
            .filter(|slot| slot.error_visible())
            .map(|slot| slot.kind)
            .collect()
    }

    /// Put every control back to its markup default
    pub fn reset(&self) {
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dom::parse_html;

    const FORM_HTML: &str = r#"
        <form id="contact-form">
            <input id="name" type="text"><span id="name-error" class="error"></span>
            <input id="email" type="email"><span id="email-error" class="error"></span>
            <input id="subject" type="text"><span id="subject-error" class="error"></span>
            <select id="service">
                <option value="">Select a service</option>
                <option value="web-design">Web Design</option>
                <option value="branding">Branding</option>
            </select><span id="service-error" class="error"></span>
            <textarea id="message"></textarea><span id="message-error" class="error"></span>
            <button type="submit">Send</button>
        </form>
    "#;

    fn mounted() -> (Document, ContactForm) {
        let doc = parse_html(FORM_HTML).unwrap();
        let form = ContactForm::mount(&doc, &ElementIds::default()).unwrap();
        (doc, form)
    }

    fn fill_valid(form: &ContactForm) {
        form.control(FieldKind::Name).set_value("John Smith");
        form.control(FieldKind::Email).set_value("john@example.com");
        form.control(FieldKind::Subject).set_value("Project inquiry");
        form.control(FieldKind::Service).set_value("branding");
        form.control(FieldKind::Message).set_value("I would like a new logo.");
    }

    #[test]
    fn test_mount_requires_error_slots() {
        let html = FORM_HTML.replace("id=\"email-error\"", "id=\"mail-error\"");
        let doc = parse_html(&html).unwrap();
        let err = ContactForm::mount(&doc, &ElementIds::default()).unwrap_err();
        assert_eq!(err.to_string(), "Missing element: #email-error");
    }

    #[test]
    fn test_mount_with_custom_field_ids() {
        let html = FORM_HTML
            .replace("id=\"email\"", "id=\"contact-email\"")
            .replace("id=\"email-error\"", "id=\"contact-email-error\"");
        let doc = parse_html(&html).unwrap();
        let ids = ElementIds {
            email: "contact-email".into(),
            ..ElementIds::default()
        };
        let form = ContactForm::mount(&doc, &ids).unwrap();

        let email = doc.get_element_by_id("contact-email").unwrap();
        assert_eq!(form.field_for(&email), Some(FieldKind::Email));

        email.set_value("nope");
        let field = form.live_validate(FieldKind::Email);
        assert_eq!(field.error_slot, "contact-email-error");
        assert!(form.error_visible(FieldKind::Email));
    }

    #[test]
    fn test_valid_submission() {
        let (_doc, form) = mounted();
        fill_valid(&form);

        let outcome = form.submit();
        assert!(outcome.accepted());
        assert!(form.visible_errors().is_empty());
        assert_eq!(outcome.value(FieldKind::Service), Some("branding"));
    }

    #[test]
    fn test_single_invalid_field_shows_only_its_error() {
        let (doc, form) = mounted();
        fill_valid(&form);
        form.control(FieldKind::Email).set_value("a@b");

        let outcome = form.submit();
        assert!(!outcome.accepted());
        assert_eq!(outcome.invalid_fields(), vec![FieldKind::Email]);
        assert_eq!(form.visible_errors(), vec![FieldKind::Email]);

        let slot = doc.get_element_by_id("email-error").unwrap();
        assert_eq!(slot.text_content(), "Please enter a valid email address");
    }

    #[test]
    fn test_resubmit_clears_fixed_errors() {
        let (_doc, form) = mounted();
        let first = form.submit();
        assert_eq!(first.invalid_fields().len(), 5);
        assert_eq!(form.visible_errors().len(), 5);

        fill_valid(&form);
        form.control(FieldKind::Subject).set_value("Hey");
        form.submit();
        assert_eq!(form.visible_errors(), vec![FieldKind::Subject]);
    }

    #[test]
    fn test_submit_validates_sanitized_values() {
        let (_doc, form) = mounted();
        fill_valid(&form);
        form.control(FieldKind::Name)
            .set_value("  <b>Jane</b> Doe<script>x()</script> ");

        let outcome = form.submit();
        assert!(outcome.accepted());
        let name = &outcome.fields[0];
        assert_eq!(name.sanitized, "Jane Doe");
        assert_eq!(name.raw, "  <b>Jane</b> Doe<script>x()</script> ");
    }

    #[test]
    fn test_markup_only_message_fails_length() {
        let (_doc, form) = mounted();
        fill_valid(&form);
        form.control(FieldKind::Message)
            .set_value("<script>alert('a long payload')</script>");

        assert_eq!(form.submit().invalid_fields(), vec![FieldKind::Message]);
    }

    #[test]
    fn test_live_validation_quiet_when_empty() {
        let (_doc, form) = mounted();

        form.control(FieldKind::Name).set_value("J");
        form.live_validate(FieldKind::Name);
        assert!(form.error_visible(FieldKind::Name));

        form.control(FieldKind::Name).set_value("   ");
        form.live_validate(FieldKind::Name);
        assert!(!form.error_visible(FieldKind::Name));

        form.control(FieldKind::Name).set_value("Jo");
        let field = form.live_validate(FieldKind::Name);
        assert!(field.valid);
        assert!(!form.error_visible(FieldKind::Name));
    }

    #[test]
    fn test_live_service_reports_placeholder() {
        let (_doc, form) = mounted();
        form.control(FieldKind::Service).set_value("");
        form.live_validate(FieldKind::Service);
        assert!(form.error_visible(FieldKind::Service));

        form.control(FieldKind::Service).set_value("web-design");
        form.live_validate(FieldKind::Service);
        assert!(!form.error_visible(FieldKind::Service));
    }

    #[test]
    fn test_hidden_error_keeps_text() {
        let (doc, form) = mounted();
        form.control(FieldKind::Subject).set_value("Hey");
        form.live_validate(FieldKind::Subject);
        form.control(FieldKind::Subject).set_value("Hello there");
        form.live_validate(FieldKind::Subject);

        let slot = doc.get_element_by_id("subject-error").unwrap();
        assert_eq!(slot.style_property("display").as_deref(), Some("none"));
        assert_eq!(
            slot.text_content(),
            "Subject must be between 5 and 100 characters"
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (_doc, form) = mounted();
        fill_valid(&form);
        form.reset();

        for kind in FieldKind::ALL {
            assert_eq!(form.control(kind).value().as_deref(), Some(""), "{}", kind);
        }
    }

    #[test]
    fn test_field_for_control() {
        let (doc, form) = mounted();
        let message = doc.get_element_by_id("message").unwrap();
        assert_eq!(form.field_for(&message), Some(FieldKind::Message));
        assert_eq!(form.field_for(form.element()), None);
    }
}
