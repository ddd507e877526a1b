//! Query submission and the search task

use tokio::task::JoinHandle;

use crate::model::Query;
use super::AppController;

impl AppController {
    /// Validate the search field and start a search.
    ///
    /// Returns the spawned search task, or `None` when the query was rejected.
    pub async fn submit_query(&self) -> Option<JoinHandle<()>> {
        let model = self.model.lock().await;
        let raw = model.get_query().await;

        match Query::parse(&raw) {
            Ok(query) => {
                let seq = model.begin_search().await;
                drop(model);
                Some(self.spawn_search(seq, query))
            }
            Err(e) => {
                tracing::info!(error = %e, "Query rejected");
                model.reject_query(&e).await;
                None
            }
        }
    }

    /// The search button only reacts while it is enabled
    pub async fn activate_search_button(&self) -> Option<JoinHandle<()>> {
        let enabled = self.model.lock().await.is_search_enabled().await;
        if !enabled {
            return None;
        }
        self.submit_query().await
    }

    fn spawn_search(&self, seq: u64, query: Query) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.run_search(seq, query).await;
        })
    }

    async fn run_search(&self, seq: u64, query: Query) {
        let provider = self.provider.name();
        tracing::info!(seq, provider, query_len = query.as_str().chars().count(), "Search started");

        // The model lock must not be held here, the UI keeps drawing while we wait
        let outcome = self.provider.recommend(&query).await;
        crate::log_search_result!(provider, outcome);

        let model = self.model.lock().await;
        model.finish_search(seq, outcome).await;
    }
}
