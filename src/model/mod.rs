//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (focus, panels, search state, UI state)
//! - `song`: The canonical song record every provider produces
//! - `query`: Query trimming and length validation
//! - `error`: Search failures and their user-facing message
//! - `catalog`: Built-in sample catalog and its ranking function
//! - `provider`: The provider trait and the catalog-backed provider
//! - `recommend_client`: HTTP client for the recommendation service
//! - `app_model`: Main application model with state management methods

mod types;
mod song;
mod query;
mod error;
mod catalog;
mod provider;
mod recommend_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, Panel, SearchState, UiState};

pub use song::{Release, Song};

pub use query::Query;

pub use provider::{CatalogProvider, RecommendationProvider};

pub use recommend_client::HttpRecommendationClient;

pub use app_model::AppModel;

#[cfg(test)]
pub use song::SongScore;

#[cfg(test)]
pub use error::{SearchError, SEARCH_FAILED_MESSAGE};

#[cfg(test)]
pub use catalog::{rank, CATALOG};
