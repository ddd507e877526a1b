//! Recommendation providers: the seam between the UI and whatever produces songs

use std::time::Duration;

use futures::future::BoxFuture;

use super::catalog::{rank, CATALOG};
use super::error::SearchError;
use super::query::Query;
use super::song::Song;

/// Something that turns a query into an ordered list of songs
pub trait RecommendationProvider: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    fn recommend<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Vec<Song>, SearchError>>;
}

/// Ranks queries against the built-in catalog after a simulated delay
#[derive(Clone, Debug)]
pub struct CatalogProvider {
    latency: Duration,
}

impl CatalogProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl RecommendationProvider for CatalogProvider {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn recommend<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Vec<Song>, SearchError>> {
        Box::pin(async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            Ok(rank(query.as_str(), CATALOG))
        })
    }
}
