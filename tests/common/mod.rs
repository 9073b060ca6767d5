#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reporter_api::config::{EnvConfig, SearchConfig};
use reporter_api::db::database_service::DatabaseService;
use reporter_api::search::{SearchError, SearchIndex};
use reporter_api::types::search::SearchQuery;
use sea_orm::ConnectOptions;

pub mod client;

pub const TEST_ADMIN_KEY: &str = "test_admin_key";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh in-memory SQLite database with all migrations applied.
    pub async fn new() -> TestContext {
        // One connection only: every pooled connection would get its own empty in-memory db.
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(options)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(), // Not used in tests
        admin_key: TEST_ADMIN_KEY.to_string(),
        activation_ttl_minutes: 15,
        search: SearchConfig {
            application_id: "test".to_string(),
            api_key: "test".to_string(),
            host: None,
        },
    }
}

/// Records every query and answers with a canned body, or fails when `fail` is set.
#[derive(Default)]
pub struct StubSearch {
    pub calls: Mutex<Vec<(String, SearchQuery)>>,
    pub fail: bool,
}

#[async_trait]
impl SearchIndex for StubSearch {
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<serde_json::Value, SearchError> {
        self.calls.lock().unwrap().push((index.to_string(), query.clone()));
        if self.fail {
            return Err(SearchError::Status { status: 503, body: "unavailable".to_string() });
        }
        Ok(serde_json::json!({
            "hits": [{ "objectID": "1", "title": query.keywords }],
            "nbHits": 1,
            "page": query.page.unwrap_or(0),
            "index": index,
        }))
    }
}

/// Status and JSON body of a call, whether the handler answered or a middleware
/// rejected the request before it got there.
pub async fn status_and_json<B>(
    res: Result<actix_web::dev::ServiceResponse<B>, actix_web::Error>,
) -> (actix_web::http::StatusCode, serde_json::Value)
where
    B: actix_web::body::MessageBody,
{
    match res {
        Ok(resp) => {
            let status = resp.status();
            let bytes = actix_web::test::read_body(resp).await;
            (status, serde_json::from_slice(&bytes).expect("json body"))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = actix_web::body::to_bytes(resp.into_body())
                .await
                .expect("readable error body");
            (status, serde_json::from_slice(&bytes).expect("json error body"))
        }
    }
}

// Test data helpers
pub mod test_data {
    use reporter_api::types::oauth::OAuthProfile;
    use reporter_api::types::reporter_account::DBReporterAccountCreate;

    pub fn google_profile(external_id: &str) -> OAuthProfile {
        OAuthProfile {
            kind: "google".to_string(),
            external_id: external_id.to_string(),
            email: Some("reader@gmail.com".to_string()),
            name: Some("Ada Lovelace".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            gender: Some("female".to_string()),
            picture: Some("https://example.com/ada.png".to_string()),
        }
    }

    pub fn reporter_account(email: &str) -> DBReporterAccountCreate {
        DBReporterAccountCreate {
            account: email.to_string(),
            password: "hashed-password".to_string(),
            active: false,
            activate_token: String::new(),
            act_exp_time: None,
        }
    }
}
