//! Presence checks for incoming drafts.

use crate::error::DomainError;

/// Collects the names of required fields that are absent or empty.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take a required text field, recording it as missing when absent or empty.
    pub(crate) fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.is_empty() => value,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Take a required field of any type with its own notion of emptiness.
    pub(crate) fn present<T>(
        &mut self,
        name: &'static str,
        value: Option<T>,
        is_empty: impl Fn(&T) -> bool,
    ) -> Option<T> {
        match value {
            Some(value) if !is_empty(&value) => Some(value),
            _ => {
                self.missing.push(name);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), DomainError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "All fields are required (missing: {})",
                self.missing.join(", ")
            )))
        }
    }
}
