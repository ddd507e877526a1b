//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! validates queries and runs searches against the recommendation provider.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Query submission and the search task

mod input;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, RecommendationProvider};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) provider: Arc<dyn RecommendationProvider>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, provider: Arc<dyn RecommendationProvider>) -> Self {
        Self { model, provider }
    }
}
