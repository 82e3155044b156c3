//! The contact form.
//!
//! Submission validates that every field is filled and acknowledges
//! locally. Nothing is sent anywhere.

use serde::{Deserialize, Serialize};

use crate::notice::Notice;

/// A required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One or more required fields were empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", join(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// The notice shown when validation fails.
    pub fn notice(&self) -> Notice {
        Notice::destructive("Missing Information", "Please fill in all required fields.")
    }
}

/// Local acknowledgment of a submitted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// The notice shown after a successful submit.
    pub fn notice(&self) -> Notice {
        Notice::new(
            "Message Sent!",
            "Thank you for reaching out. I'll get back to you soon.",
        )
    }
}

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Fields that are still empty, in form order.
    pub fn missing(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.missing().len() == 3
    }

    /// Validates and, on success, takes the values and clears the form.
    ///
    /// On failure the form is left exactly as it was.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }
        let form = std::mem::take(self);
        log::info!("contact message accepted ({} chars)", form.message.chars().count());
        Ok(Submission {
            name: form.name,
            email: form.email,
            message: form.message,
        })
    }
}
