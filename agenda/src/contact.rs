use serde::Serialize;

use crate::error::{AgendaError, Result};

/// Separator between fields of a persisted contact line.
pub const FIELD_DELIMITER: char = ';';

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check required fields and that every field fits on a single
    /// delimiter-separated line.
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("phone", &self.phone)?;
        if let Some(email) = &self.email {
            require_field("email", email)?;
            if !email.contains('@') {
                return Err(AgendaError::Validation(format!(
                    "email '{email}' must contain '@'"
                )));
            }
        }
        Ok(())
    }

    /// Uppercased first character of the name, used as the index bucket key.
    ///
    /// Returns `None` only for an empty name, which never passes validation.
    pub fn letter(&self) -> Option<char> {
        self.name.chars().next().map(letter_key)
    }
}

/// Fold a character to the key used by the first-letter index.
///
/// Characters whose uppercase form expands to several characters (e.g. `ß`)
/// are kept as-is so every name maps to exactly one bucket.
pub fn letter_key(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn require_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgendaError::Validation(format!("{field} must not be blank")));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| *c == FIELD_DELIMITER || *c == '\n' || *c == '\r')
    {
        return Err(AgendaError::Validation(format!(
            "{field} must not contain {bad:?}"
        )));
    }
    Ok(())
}
