//! Error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// One invalid request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the field lives, e.g. `["query", "limit"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn query(field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self::at("query", field, msg, kind)
    }

    pub fn path(field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self::at("path", field, msg, kind)
    }

    fn at(location: &str, field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec![location.to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Errors a handler can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// 422 with field-level detail.
    Validation(Vec<FieldError>),
    /// 404 with a message.
    NotFound(String),
    /// 500 with a message.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": fields })))
                    .into_response()
            }
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Internal(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": detail })))
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_shape() {
        let response = ApiError::Validation(vec![FieldError::query(
            "limit",
            "Input should be less than or equal to 100",
            "less_than_equal",
        )])
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["detail"][0]["loc"][0], "query");
        assert_eq!(body["detail"][0]["loc"][1], "limit");
        assert_eq!(body["detail"][0]["type"], "less_than_equal");
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let response = ApiError::NotFound("Product not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Product not found");
    }

    #[tokio::test]
    async fn test_internal_shape() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "boom");
    }
}
