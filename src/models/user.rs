//! Account and sign-in types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// User
// =============================================================================

/// Signed-in user, as returned by `/me` and `/users/sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Session state for the current browser tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// `/me` has not answered yet
    #[default]
    Unknown,
    SignedIn(User),
    SignedOut,
    /// `/me` failed for a reason other than missing credentials
    Failed(String),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Name shown in the header.
    pub fn display_name(&self) -> String {
        self.user()
            .map(|u| {
                if u.name.is_empty() {
                    u.email.clone()
                } else {
                    u.name.clone()
                }
            })
            .unwrap_or_else(|| "guest".to_string())
    }
}

// =============================================================================
// Sign-in Form
// =============================================================================

/// Body of `POST /users/sign-in`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl SignInInput {
    pub const EMAIL: &'static str = "email";
    pub const PASSWORD: &'static str = "password";
}

// =============================================================================
// Field Errors
// =============================================================================

/// A single field-level error: `{ "message": ..., "type": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldError {
    pub message: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl FieldError {
    pub fn new(message: impl Into<String>, kind: &str) -> Self {
        Self {
            message: message.into(),
            kind: Some(kind.to_string()),
        }
    }
}

/// Field name to error, as carried in the backend's `errors` object.
///
/// Keys that are not form fields (the backend uses `root`) are treated as
/// form-level messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    /// Key used for errors that belong to the whole form.
    pub const FORM: &'static str = "root";

    pub fn new() -> Self {
        Self::default()
    }

    /// A single form-level error.
    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(Self::FORM, FieldError::new(message, "server"));
        errors
    }

    pub fn insert(&mut self, field: &str, error: FieldError) {
        self.0.insert(field.to_string(), error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    /// Message for a field, if any.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(|e| e.message.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Remove the error for one field (after the user edits it).
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Messages whose keys are not among `fields`, in key order.
    pub fn unattached<'a>(&'a self, fields: &'a [&str]) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(|(key, _)| !fields.contains(&key.as_str()))
            .map(|(_, e)| e.message.as_str())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Error body sent by the backend on a rejected request.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorResponse {
    pub errors: FieldErrors,
}
