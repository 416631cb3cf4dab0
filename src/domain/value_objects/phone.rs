//! Phone value object
//!
//! Accepts exactly the `###-###-####` shape: three hyphen-separated groups
//! of lengths 3, 3, and 4, all digits.

use std::fmt;

use crate::error::{BarkyardError, BarkyardResult};

/// A validated phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Validate and wrap a raw phone number.
    pub fn new(raw: impl Into<String>) -> BarkyardResult<Self> {
        let raw = raw.into();
        if Self::is_valid(&raw) {
            Ok(Self(raw))
        } else {
            Err(BarkyardError::InvalidPhone { phone: raw })
        }
    }

    fn is_valid(raw: &str) -> bool {
        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 3 {
            return false;
        }
        parts[0].len() == 3
            && parts[1].len() == 3
            && parts[2].len() == 4
            && parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
