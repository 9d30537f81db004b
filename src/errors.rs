use actix_session::SessionInsertError;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("session error: {0}")]
    Session(#[from] SessionInsertError),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);

        HttpResponse::InternalServerError()
            .content_type("text/plain")
            .body("Internal server error")
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not a valid port: {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name} must be a positive number of workers, got {value:?}")]
    InvalidWorkers { name: &'static str, value: String },

    #[error("{name} must be at least 64 bytes long, got {len}")]
    SessionKeyTooShort { name: &'static str, len: usize },
}
