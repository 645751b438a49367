//! `application/problem+json` error documents.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use horizon_shared::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

/// Content type of problem documents.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Detail shown for server-side failures instead of the internal message.
const SERVER_ERROR_DETAIL: &str =
    "An error occurred while processing this request. The failure has been logged.";

/// A problem document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Problem type slug (e.g. `not_found`).
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short human-readable summary of the type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Extension members.
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl Problem {
    /// Creates a problem without detail or extensions.
    pub fn new(problem_type: impl Into<String>, title: impl Into<String>, status: u16) -> Self {
        Self {
            problem_type: problem_type.into(),
            title: title.into(),
            status,
            detail: None,
            extras: Map::new(),
        }
    }

    /// Sets the detail member.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Adds an extension member.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

impl From<&AppError> for Problem {
    fn from(err: &AppError) -> Self {
        let (problem_type, title) = match err {
            AppError::NotFound(_) => ("not_found", "Resource Missing"),
            AppError::Validation(_) => ("bad_request", "Bad Request"),
            AppError::BusinessRule(_) => ("business_rule_violation", "Business Rule Violation"),
            AppError::Database(_) | AppError::Internal(_) => ("server_error", "Internal Server Error"),
        };

        let detail = if err.status_code() >= 500 {
            SERVER_ERROR_DETAIL
        } else {
            err.detail()
        };

        Self::new(problem_type, title, err.status_code())
            .with_detail(detail)
            .with_extra("code", err.error_code())
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)], Json(self)).into_response()
    }
}

/// Handler error that renders as a problem document.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E: Into<AppError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.status_code() >= 500 {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        }
        Problem::from(&self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_problem_eq;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError(AppError::NotFound("account GXYZ".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            PROBLEM_CONTENT_TYPE
        );

        assert_problem_eq(
            &body_of(response).await,
            r#"{
                "type": "not_found",
                "title": "Resource Missing",
                "status": 404,
                "detail": "account GXYZ",
                "code": "NOT_FOUND"
            }"#,
        );
    }

    #[tokio::test]
    async fn test_server_error_hides_internal_message() {
        let response = ApiError(AppError::Database("connection refused".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert!(!body.contains("connection refused"));
        let problem: Problem = serde_json::from_str(&body).unwrap();
        assert_eq!(problem.problem_type, "server_error");
        assert_eq!(problem.detail.as_deref(), Some(SERVER_ERROR_DETAIL));
    }

    #[tokio::test]
    async fn test_module_errors_convert() {
        let limit = horizon_core::stats::StatsError::LimitExceeded {
            limit: horizon_core::stats::Limit::DailyOutcome,
            total: horizon_shared::Amount::from_raw(2),
            max: horizon_shared::Amount::from_raw(1),
        };
        let response = ApiError::from(limit).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let problem: Problem = serde_json::from_str(&body_of(response).await).unwrap();
        assert_eq!(problem.problem_type, "business_rule_violation");
        assert_eq!(problem.extras["code"], "BUSINESS_RULE_VIOLATION");
    }

    #[test]
    fn test_every_app_error_maps_to_a_problem_type() {
        let cases = [
            (AppError::NotFound("x".into()), "not_found", 404),
            (AppError::Validation("x".into()), "bad_request", 400),
            (AppError::BusinessRule("x".into()), "business_rule_violation", 422),
            (AppError::Database("x".into()), "server_error", 500),
            (AppError::Internal("x".into()), "server_error", 500),
        ];
        for (err, problem_type, status) in cases {
            let problem = Problem::from(&err);
            assert_eq!(problem.problem_type, problem_type);
            assert_eq!(problem.status, status);
            assert_eq!(problem.extras["code"], err.error_code());
        }
    }

    #[test]
    fn test_problem_round_trip_keeps_extras() {
        let problem = Problem::new("bad_request", "Bad Request", 400)
            .with_extra("invalid_field", "cursor");
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["invalid_field"], "cursor");
        assert!(json.get("detail").is_none());

        let back: Problem = serde_json::from_value(json).unwrap();
        assert_eq!(back, problem);
    }
}
