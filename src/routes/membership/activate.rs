use std::sync::Arc;

use actix_web::{get, web};

use super::normalize_email;
use crate::db::database_service::DatabaseService;
use crate::types::reporter_account::RActivate;
use crate::types::response::{ApiResponse, ApiResult, Success};
use crate::types::user::UserRes;

#[get("")]
pub async fn activate(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<RActivate>,
) -> ApiResult<Success<UserRes>> {
    let RActivate { email, token } = query.into_inner();
    let user = db.activate(&normalize_email(&email), token.trim()).await?;
    Ok(ApiResponse::Ok(Success::new(user.into())))
}
