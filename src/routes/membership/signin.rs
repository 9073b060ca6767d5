use std::sync::Arc;

use actix_web::{post, web};
use chrono::Duration;
use tracing::info;
use validator::Validate;

use super::normalize_email;
use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::reporter_account::{RSignIn, SignInOutcome, SignInRes};
use crate::types::response::{ApiResponse, ApiResult, Success};

#[post("")]
pub async fn signin(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RSignIn>,
) -> ApiResult<Success<SignInRes>> {
    let mut body = body.into_inner();
    body.email = normalize_email(&body.email);
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ttl = Duration::minutes(config.activation_ttl_minutes);
    // The raw token goes out through the mail service, not through this response.
    let (outcome, _token) = db.issue_activation(&body.email, ttl).await?;
    info!(email = %body.email, ?outcome, "Activation token issued");

    let res = Success::new(SignInRes { email: body.email, destination: body.destination });
    Ok(match outcome {
        SignInOutcome::Created => ApiResponse::Created(res),
        SignInOutcome::Refreshed => ApiResponse::Ok(res),
    })
}
