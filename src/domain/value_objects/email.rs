//! Email value object
//!
//! Validation is intentionally shallow: an address is accepted when it
//! contains `@` and the part after the first `@` contains `.`. Behavioral
//! compatibility with the reference rules matters more here than RFC
//! correctness.

use std::fmt;

use crate::error::{BarkyardError, BarkyardResult};

/// A validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and wrap a raw address.
    pub fn new(raw: impl Into<String>) -> BarkyardResult<Self> {
        let raw = raw.into();
        let valid = matches!(raw.split_once('@'), Some((_, domain)) if domain.contains('.'));
        if valid {
            Ok(Self(raw))
        } else {
            Err(BarkyardError::InvalidEmail { email: raw })
        }
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
