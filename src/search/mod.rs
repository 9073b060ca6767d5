//! Hosted full-text search.
//!
//! Handlers only see the [`SearchIndex`] trait; production wires in
//! [`algolia::AlgoliaClient`], tests swap in a stub.

pub mod algolia;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::search::SearchQuery;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search index answered {status}: {body}")]
    Status { status: u16, body: String },
}

#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Runs `query` against `index` and returns the index's response body as is.
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<serde_json::Value, SearchError>;
}
