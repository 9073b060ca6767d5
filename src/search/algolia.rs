use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use super::{SearchError, SearchIndex};
use crate::config::SearchConfig;
use crate::types::search::SearchQuery;

pub struct AlgoliaClient {
    client: Client,
    host: String,
    application_id: String,
    api_key: String,
}

#[derive(Serialize)]
struct QueryBody {
    params: String,
}

impl AlgoliaClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = ClientBuilder::new()
            .user_agent("reporter-api/1.0 (+reqwest)")
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .build()?;

        let host = config
            .host
            .clone()
            .unwrap_or_else(|| format!("https://{}-dsn.algolia.net", config.application_id));

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn query_url(&self, index: &str) -> String {
        format!("{}/1/indexes/{}/query", self.host, urlencoding::encode(index))
    }
}

/// Url-encoded `params` string for the Algolia query endpoint.
pub fn encode_params(query: &SearchQuery) -> String {
    let mut params = vec![format!("query={}", urlencoding::encode(&query.keywords))];
    if let Some(filters) = &query.filters {
        params.push(format!("filters={}", urlencoding::encode(filters)));
    }
    if let Some(hits) = query.hits_per_page {
        params.push(format!("hitsPerPage={hits}"));
    }
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }
    params.join("&")
}

#[async_trait]
impl SearchIndex for AlgoliaClient {
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<serde_json::Value, SearchError> {
        let url = self.query_url(index);
        debug!(index, keywords = %query.keywords, "search request");

        let res = self
            .client
            .post(&url)
            .header("X-Algolia-Application-Id", &self.application_id)
            .header("X-Algolia-API-Key", &self.api_key) // never logged
            .json(&QueryBody { params: encode_params(query) })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(index, status = status.as_u16(), "search index returned an error");
            return Err(SearchError::Status { status: status.as_u16(), body });
        }

        Ok(res.json().await?)
    }
}
