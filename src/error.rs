use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Input rejected at the request boundary, before any computation or storage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("No items provided")]
    EmptyItems,
    #[error("{field} must be >= 0 (got {value})")]
    NegativeNutrient { field: &'static str, value: f64 },
    #[error("grams must be > 0 (got {value})")]
    NonPositiveGrams { value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("limit must be >= 1 (got {value})")]
    InvalidLimit { value: i64 },
}

impl ValidationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ValidationError::EmptyItems => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Failure reported by the document store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
    #[error("document encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("document {id} in {collection} could not be decoded: {source}")]
    Decode {
        collection: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(e) => (e.status(), e.to_string()),
            ApiError::Store(e) => {
                error!(error = %e, "document store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Document store unavailable".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items_is_bad_request() {
        let resp = ApiError::from(ValidationError::EmptyItems).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn range_errors_are_unprocessable() {
        let err = ValidationError::NegativeNutrient {
            field: "calories_per_100g",
            value: -1.0,
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "calories_per_100g must be >= 0 (got -1)");
    }

    #[test]
    fn store_errors_are_internal() {
        let err = StoreError::Backend(sqlx::Error::PoolTimedOut);
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
