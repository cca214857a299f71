//! # Contact Form
//!
//! Field values, validation, and the submit lifecycle. The transport lives
//! behind [`ContactSubmitter`](crate::submission::ContactSubmitter); this
//! module only decides *whether* to submit and what to show afterwards.
//!
//! ```text
//! editing ──submit──▶ invalid? ──yes──▶ per-field errors (no callback)
//!                        │
//!                        no
//!                        ▼
//!                    submitting ──ok──▶ fields cleared, "sent" notice
//!                        │
//!                        └──err──▶ fields kept, generic failure notice
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimal `local@domain.tld` shape. Not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const SENT_NOTICE: &str = "Thanks! We'll be in touch shortly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    /// Form order, top to bottom.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = BTreeMap::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, "Email is invalid");
    }

    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required");
    }

    FieldErrors(errors)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Sent => SENT_NOTICE,
            Notice::Failed => GENERIC_FAILURE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    /// A submission is in flight; the submit control is disabled.
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a field's value. Editing clears that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validate and, if everything passes, mark the form as submitting.
    ///
    /// Returns the values to hand to the submitter, or `None` when the form
    /// is invalid or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.submitting {
            return None;
        }
        self.notice = None;
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(self.fields.clone())
    }

    /// Settle an in-flight submission.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.fields.clear();
            self.notice = Some(Notice::Sent);
        } else {
            self.notice = Some(Notice::Failed);
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Send" }
    }
}
