use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

#[get("")]
pub async fn ping(
    _req: actix_web::HttpRequest
) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response { status: "ok".to_string() }))
}
