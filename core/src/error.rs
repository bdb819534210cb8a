use crate::metadata::error::DatabaseError;
use crate::types::songs::SongParamError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidParameter(#[from] SongParamError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            e => {
                tracing::debug!("Rejected request: {}", e);
                e.to_string()
            }
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
