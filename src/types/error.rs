use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use sea_orm::{DbErr, SqlErr};

use crate::search::SearchError;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Db(_) => "DB_ERROR",
            Self::Search(_) => "SEARCH_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) = &err {
            return AppError::NotFound;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::BadRequest("Related record missing".to_string())
            }
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Search(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Infra failures stay generic on the wire; the detail goes to the log.
        let message = match self {
            Self::Validation(msg) | Self::BadRequest(msg) => msg.as_str(),
            Self::Db(_) | Self::Search(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                self.kind()
            }
            _ => self.kind(),
        };
        HttpResponse::build(self.status_code())
            .json(ErrorBody { status: "error", message })
    }
}
