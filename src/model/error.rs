//! Errors a recommendation provider can return

use thiserror::Error;

/// The only failure text users ever see; the variant is for the logs
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search for music. Please try again.";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not reach recommendation service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("recommendation service returned HTTP {status}")]
    Provider { status: u16 },

    #[error("invalid recommendation response: {0}")]
    InvalidResponse(String),
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "transport",
            SearchError::Provider { .. } => "provider",
            SearchError::InvalidResponse(_) => "invalid_response",
        }
    }
}
