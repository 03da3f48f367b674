//! Error types for pixmon-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Não encontrado: {resource}")]
    NotFound { resource: String },

    #[error("Requisição inválida: {message}")]
    BadRequest { message: String },

    #[error("Erro interno do servidor")]
    InternalError,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = ApiError::NotFound {
            resource: "transação txn_999".to_string(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let res = ApiError::BadRequest {
            message: "parâmetro inválido".to_string(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
