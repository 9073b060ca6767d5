use actix_web::{web, App};
use std::sync::Arc;
use reporter_api::db::database_service::DatabaseService;
use reporter_api::search::SearchIndex;

use super::{get_test_config, StubSearch};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub search: Arc<StubSearch>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        Self::with_search(db, StubSearch::default())
    }

    pub fn with_search(db: Arc<DatabaseService>, search: StubSearch) -> Self {
        TestClient { db, search: Arc::new(search) }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let search: Arc<dyn SearchIndex> = self.search.clone();
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(search))
            .app_data(web::Data::new(get_test_config()))
            .configure(reporter_api::routes::configure_routes)
    }
}
