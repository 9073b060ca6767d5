use actix_web::{dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::EnvConfig;
use crate::types::error::AppError;

/// Bearer validator for operator-only routes: the token must equal `ADMIN_KEY`.
/// A missing or malformed header is rejected the same way as a wrong token.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let allowed = match (credentials, req.app_data::<web::Data<EnvConfig>>()) {
        (Some(credentials), Some(config)) => {
            !config.admin_key.is_empty() && credentials.token() == config.admin_key
        }
        _ => false,
    };

    if allowed {
        Ok(req)
    } else {
        Err((AppError::Unauthorized.into(), req))
    }
}
