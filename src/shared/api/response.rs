// src/shared/api/response.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
struct ApiErrorBody {
    error: ApiError,
}

/// Response helpers: successes carry the resource representation directly,
/// client errors carry a `{code, message}` body, not-found replies are empty.
pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn ok_empty() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    pub fn created<T: Serialize>(location: &str, data: T) -> HttpResponse {
        HttpResponse::Created()
            .insert_header((header::LOCATION, location))
            .json(data)
    }

    pub fn not_found() -> HttpResponse {
        HttpResponse::NotFound().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiErrorBody {
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
