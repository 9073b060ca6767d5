use crate::types::error::AppError;
use crate::utils::webutils::validate_admin_token;
use actix_web::{http::header, middleware::DefaultHeaders, web};

pub mod membership;
pub mod ping;
pub mod search;
pub mod user;

fn cache_control(value: &'static str) -> DefaultHeaders {
    DefaultHeaders::new().add((header::CACHE_CONTROL, value))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::with_fn(validate_admin_token);

    // Malformed paths, query strings and bodies answer with the regular error envelope.
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/v1")
            .service(web::scope("/ping").service(ping::ping))
            .service(
                web::scope("/signin")
                    .service(membership::signin::signin)
                    .wrap(cache_control("no-store"))
            )
            .service(
                web::scope("/activate")
                    .service(membership::activate::activate)
                    .wrap(cache_control("no-store"))
            )
            .service(
                web::scope("/users")
                    .service(user::get::get_user)
                    .wrap(admin_auth)
                    .wrap(cache_control("no-store"))
            )
            .service(
                web::scope("/search")
                    .service(search::search_authors)
                    .service(search::search_posts)
                    .wrap(cache_control("public,max-age=3600"))
            )
    );
}
