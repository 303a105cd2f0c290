//! Country identification

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A country taking part in the exposure notification network
///
/// Identified by its ISO 3166-1 alpha-2 code. Codes are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country {
    code: String,
}

impl Country {
    /// Create a country from a two-letter code
    ///
    /// Lowercase input is accepted and normalized. Anything other than
    /// exactly two ASCII letters is rejected.
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_country_code(code));
        }

        Ok(Self {
            code: code.to_ascii_uppercase(),
        })
    }

    /// The uppercase two-letter code
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl TryFrom<String> for Country {
    type Error = ValidationError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(&code)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.code
    }
}
