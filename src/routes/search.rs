use std::sync::Arc;

use actix_web::{get, web};

use crate::search::SearchIndex;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::search::{RSearch, SearchQuery, AUTHORS_INDEX, POSTS_INDEX};

async fn run_search(
    search: &dyn SearchIndex,
    index: &str,
    params: RSearch,
) -> ApiResult<serde_json::Value> {
    let query = SearchQuery::from(params);
    let hits = search.search(index, &query).await?;
    Ok(ApiResponse::Ok(hits))
}

#[get("/authors")]
pub async fn search_authors(
    search: web::Data<Arc<dyn SearchIndex>>,
    params: web::Query<RSearch>,
) -> ApiResult<serde_json::Value> {
    run_search(&**search.get_ref(), AUTHORS_INDEX, params.into_inner()).await
}

#[get("/posts")]
pub async fn search_posts(
    search: web::Data<Arc<dyn SearchIndex>>,
    params: web::Query<RSearch>,
) -> ApiResult<serde_json::Value> {
    run_search(&**search.get_ref(), POSTS_INDEX, params.into_inner()).await
}
