//! Waitlist API endpoint
//!
//! - POST /api/waitlist - Register interest with an email address
//!
//! Registrations are validated and logged; nothing is stored.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use std::sync::Arc;

use super::email::{email_domain, normalize_email};
use super::submitter::{WaitlistRequest, WaitlistResponse};
use super::waitlist::WaitlistError;

/// Waitlist API state
#[derive(Debug, Clone)]
pub struct WaitlistApiState {
    /// When false, valid registrations are answered with `accepted: false`
    pub accepting: bool,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Convert WaitlistError to API response
impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let status = match self {
            WaitlistError::MissingEmail | WaitlistError::InvalidFormat => StatusCode::BAD_REQUEST,
            WaitlistError::SubmissionFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ApiError::new(self.to_string(), self.code());

        (status, Json(body)).into_response()
    }
}

/// Create the waitlist API router
pub fn waitlist_router(state: WaitlistApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/waitlist", post(join_waitlist_handler))
        .with_state(state)
}

/// POST /api/waitlist
/// Register an email address on the waitlist
async fn join_waitlist_handler(
    State(state): State<Arc<WaitlistApiState>>,
    Json(request): Json<WaitlistRequest>,
) -> Result<Json<WaitlistResponse>, WaitlistError> {
    let email = normalize_email(&request.email).inspect_err(|e| {
        tracing::debug!("Waitlist registration rejected: {}", e.code());
    })?;

    let domain = email_domain(email).unwrap_or_default();

    if !state.accepting {
        tracing::info!("Waitlist closed, declining registration from @{}", domain);
        return Ok(Json(WaitlistResponse { accepted: false }));
    }

    tracing::info!("Waitlist registration accepted from @{}", domain);

    Ok(Json(WaitlistResponse { accepted: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post_json(router: Router, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/waitlist")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn open() -> Router {
        waitlist_router(WaitlistApiState { accepting: true })
    }

    #[tokio::test]
    async fn test_valid_email_is_accepted() {
        let (status, body) =
            post_json(open(), json!({ "email": "dev@example.com" }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "accepted": true }));
    }

    #[tokio::test]
    async fn test_whitespace_is_trimmed() {
        let (status, body) =
            post_json(open(), json!({ "email": "  dev@example.com\n" }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accepted"], true);
    }

    #[tokio::test]
    async fn test_empty_email_is_rejected() {
        let (status, body) = post_json(open(), json!({ "email": "" }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_EMAIL");
        assert_eq!(body["error"], "Email is required");
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        for email in ["abc", "a@b", "a@@b.com"] {
            let (status, body) = post_json(open(), json!({ "email": email }).to_string()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "email: {email}");
            assert_eq!(body["code"], "INVALID_EMAIL");
        }
    }

    #[tokio::test]
    async fn test_closed_waitlist_declines() {
        let router = waitlist_router(WaitlistApiState { accepting: false });
        let (status, body) =
            post_json(router, json!({ "email": "dev@example.com" }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "accepted": false }));
    }

    #[tokio::test]
    async fn test_closed_waitlist_still_validates() {
        let router = waitlist_router(WaitlistApiState { accepting: false });
        let (status, _) = post_json(router, json!({ "email": "nope" }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let (status, _) = post_json(open(), "{not json".to_string()).await;
        assert!(status.is_client_error());

        let (status, _) = post_json(open(), json!({ "mail": "x" }).to_string()).await;
        assert!(status.is_client_error());
    }

    #[test]
    fn test_error_into_response_status() {
        assert_eq!(
            WaitlistError::MissingEmail.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WaitlistError::InvalidFormat.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WaitlistError::SubmissionFailed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
