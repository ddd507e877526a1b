//! Search query validation

use thiserror::Error;

pub const MIN_QUERY_CHARS: usize = 3;

/// Returned when the text in the search field cannot be submitted
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter at least {min} characters to search.")]
    TooShort { min: usize, actual: usize },
}

/// Whether the search button should be enabled for this input
pub fn can_submit(raw: &str) -> bool {
    raw.trim().chars().count() >= MIN_QUERY_CHARS
}

/// A trimmed query that passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let actual = trimmed.chars().count();
        if actual < MIN_QUERY_CHARS {
            return Err(ValidationError::TooShort {
                min: MIN_QUERY_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
