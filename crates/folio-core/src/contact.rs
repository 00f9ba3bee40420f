//! Contact form state machine.
//!
//! Sending is delegated to an external email relay; this module only decides
//! whether a submission may start, what gets sent, and which of the four UI
//! states the form is in.

use crate::constants::CONTACT_RECIPIENT;
use crate::error::{FolioError, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Sending => "sending",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Relay credentials, baked in at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or(PLACEHOLDER_SERVICE_ID),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(PLACEHOLDER_TEMPLATE_ID),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(PLACEHOLDER_PUBLIC_KEY),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub params: TemplateParams,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    config: EmailConfig,
}

impl ContactForm {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Idle,
            config,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let f = &self.fields;
        if f.name.trim().is_empty() {
            return Err(FolioError::MissingField("name"));
        }
        if f.email.trim().is_empty() {
            return Err(FolioError::MissingField("email"));
        }
        if f.message.trim().is_empty() {
            return Err(FolioError::MissingField("message"));
        }
        if !looks_like_email(f.email.trim()) {
            return Err(FolioError::InvalidEmail(f.email.clone()));
        }
        Ok(())
    }

    /// Start a submission: Idle -> Sending. Nothing changes on error.
    pub fn submit(&mut self) -> Result<EmailRequest> {
        if self.status != FormStatus::Idle {
            return Err(FolioError::NotIdle);
        }
        self.validate()?;
        self.status = FormStatus::Sending;
        Ok(EmailRequest {
            service_id: self.config.service_id.to_owned(),
            template_id: self.config.template_id.to_owned(),
            public_key: self.config.public_key.to_owned(),
            params: TemplateParams {
                from_name: self.fields.name.trim().to_owned(),
                from_email: self.fields.email.trim().to_owned(),
                message: self.fields.message.clone(),
                to_email: CONTACT_RECIPIENT.to_owned(),
            },
        })
    }

    /// Record the relay outcome. Only meaningful while Sending.
    pub fn complete<E: std::fmt::Display>(&mut self, outcome: std::result::Result<(), E>) {
        if self.status != FormStatus::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.fields = ContactFields::default();
            }
            Err(e) => {
                log::error!("[contact] send failed: {}", e);
                self.status = FormStatus::Error;
            }
        }
    }

    /// Return to Idle after the result has been shown.
    pub fn reset(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            FormStatus::Idle => "Send Message",
            FormStatus::Sending => "Sending...",
            FormStatus::Success => "Message Sent!",
            FormStatus::Error => "Failed to send. Please try again.",
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
