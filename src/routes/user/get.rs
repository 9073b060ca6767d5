use std::sync::Arc;

use actix_web::{get, web};

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, Success};
use crate::types::user::UserRes;

#[get("/{user_id}")]
pub async fn get_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Success<UserRes>> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(Success::new(user.into())))
}
