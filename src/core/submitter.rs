//! Outbound waitlist registration
//!
//! [`WaitlistSubmitter`] is the seam between the form state machine and the
//! network. Two implementations ship:
//! - [`SimulatedSubmitter`]: waits a fixed delay and always succeeds
//! - [`HttpSubmitter`]: `POST {endpoint}` with `{"email": ...}`, bounded by a timeout
//!
//! [`WaitlistClient`] picks one of them from [`WaitlistSettings`].

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::settings::{SubmitMode, WaitlistSettings};

/// Why a submission call did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("registration was not accepted")]
    NotAccepted,

    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

/// Request body of `POST /api/waitlist`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitlistRequest {
    pub email: String,
}

/// Response body of `POST /api/waitlist`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitlistResponse {
    pub accepted: bool,
}

/// Something that can register an email on the waitlist
pub trait WaitlistSubmitter {
    fn submit(&self, email: &str) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in for a real backend: waits, then succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl WaitlistSubmitter for SimulatedSubmitter {
    fn submit(&self, _email: &str) -> impl Future<Output = Result<(), SubmitError>> {
        let delay = self.delay;
        async move {
            sleep(delay).await;
            Ok(())
        }
    }
}

/// Posts the email to a waitlist endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSubmitter {
    pub endpoint: String,
    pub timeout: Duration,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl WaitlistSubmitter for HttpSubmitter {
    fn submit(&self, email: &str) -> impl Future<Output = Result<(), SubmitError>> {
        let request = WaitlistRequest {
            email: email.to_string(),
        };
        async move {
            let response = with_timeout(post_waitlist(&self.endpoint, &request), self.timeout)
                .await?;
            if response.accepted {
                Ok(())
            } else {
                Err(SubmitError::NotAccepted)
            }
        }
    }
}

/// Browser build: `fetch` through gloo-net
#[cfg(not(feature = "ssr"))]
async fn post_waitlist(
    endpoint: &str,
    request: &WaitlistRequest,
) -> Result<WaitlistResponse, SubmitError> {
    use gloo_net::http::Request;

    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }

    response
        .json::<WaitlistResponse>()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))
}

/// Server build: reqwest
#[cfg(feature = "ssr")]
async fn post_waitlist(
    endpoint: &str,
    request: &WaitlistRequest,
) -> Result<WaitlistResponse, SubmitError> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::Status(status.as_u16()));
    }

    response
        .json::<WaitlistResponse>()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))
}

/// Race `future` against a timer; a timeout becomes [`SubmitError::Timeout`].
pub async fn with_timeout<T, F>(future: F, timeout: Duration) -> Result<T, SubmitError>
where
    F: Future<Output = Result<T, SubmitError>>,
{
    #[cfg(any(feature = "ssr", feature = "hydrate"))]
    {
        use futures::future::{Either, select};

        let future = std::pin::pin!(future);
        let timer = std::pin::pin!(sleep(timeout));
        match select(future, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(SubmitError::Timeout(timeout.as_millis() as u64)),
        }
    }

    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        let _ = timeout;
        future.await
    }
}

/// Platform timer: tokio on the server, `setTimeout` in the browser.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "ssr")]
    tokio::time::sleep(duration).await;

    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    let _ = duration;
}

/// Submitter selected by [`WaitlistSettings::mode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistClient {
    Simulated(SimulatedSubmitter),
    Http(HttpSubmitter),
}

impl From<&WaitlistSettings> for WaitlistClient {
    fn from(settings: &WaitlistSettings) -> Self {
        match settings.mode {
            SubmitMode::Simulated => WaitlistClient::Simulated(SimulatedSubmitter::new(
                Duration::from_millis(settings.simulated_delay_ms),
            )),
            SubmitMode::Http => WaitlistClient::Http(HttpSubmitter::new(
                settings.endpoint.clone(),
                Duration::from_millis(settings.timeout_ms),
            )),
        }
    }
}

impl Default for WaitlistClient {
    fn default() -> Self {
        Self::from(&WaitlistSettings::default())
    }
}

impl WaitlistSubmitter for WaitlistClient {
    fn submit(&self, email: &str) -> impl Future<Output = Result<(), SubmitError>> {
        async move {
            match self {
                WaitlistClient::Simulated(s) => s.submit(email).await,
                WaitlistClient::Http(h) => h.submit(email).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use std::time::Instant;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn http(base: &str, timeout_ms: u64) -> HttpSubmitter {
        HttpSubmitter::new(
            format!("{}/api/waitlist", base),
            Duration::from_millis(timeout_ms),
        )
    }

    #[tokio::test]
    async fn test_simulated_always_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(20));
        let started = Instant::now();

        assert_eq!(submitter.submit("dev@example.com").await, Ok(()));
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_http_accepted() {
        let router = Router::new().route(
            "/api/waitlist",
            post(|Json(req): Json<WaitlistRequest>| async move {
                Json(WaitlistResponse {
                    accepted: req.email == "dev@example.com",
                })
            }),
        );
        let base = serve(router).await;

        assert_eq!(http(&base, 5_000).submit("dev@example.com").await, Ok(()));
    }

    #[tokio::test]
    async fn test_http_not_accepted() {
        let router = Router::new().route(
            "/api/waitlist",
            post(|| async { Json(WaitlistResponse { accepted: false }) }),
        );
        let base = serve(router).await;

        assert_eq!(
            http(&base, 5_000).submit("dev@example.com").await,
            Err(SubmitError::NotAccepted)
        );
    }

    #[tokio::test]
    async fn test_http_server_error() {
        let router = Router::new().route(
            "/api/waitlist",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let base = serve(router).await;

        assert_eq!(
            http(&base, 5_000).submit("dev@example.com").await,
            Err(SubmitError::Status(503))
        );
    }

    #[tokio::test]
    async fn test_http_timeout() {
        let router = Router::new().route(
            "/api/waitlist",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(WaitlistResponse { accepted: true })
            }),
        );
        let base = serve(router).await;

        assert_eq!(
            http(&base, 50).submit("dev@example.com").await,
            Err(SubmitError::Timeout(50))
        );
    }

    #[tokio::test]
    async fn test_http_unreachable() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = http(&format!("http://{}", addr), 5_000)
            .submit("dev@example.com")
            .await;

        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let ok = with_timeout(async { Ok::<_, SubmitError>(7) }, Duration::from_secs(1)).await;
        assert_eq!(ok, Ok(7));

        let err = with_timeout(
            async { Err::<(), _>(SubmitError::Status(500)) },
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(err, Err(SubmitError::Status(500)));
    }

    #[test]
    fn test_client_from_settings() {
        let settings = WaitlistSettings::default();
        assert_eq!(
            WaitlistClient::from(&settings),
            WaitlistClient::Simulated(SimulatedSubmitter::new(Duration::from_millis(800)))
        );

        let settings = WaitlistSettings {
            mode: SubmitMode::Http,
            endpoint: "https://example.com/waitlist".to_string(),
            timeout_ms: 2_500,
            simulated_delay_ms: 0,
        };
        assert_eq!(
            WaitlistClient::from(&settings),
            WaitlistClient::Http(HttpSubmitter::new(
                "https://example.com/waitlist",
                Duration::from_millis(2_500)
            ))
        );
    }

    #[tokio::test]
    async fn test_client_dispatches_simulated() {
        let client = WaitlistClient::Simulated(SimulatedSubmitter::new(Duration::ZERO));
        assert_eq!(client.submit("dev@example.com").await, Ok(()));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SubmitError::Status(502).to_string(),
            "server responded with status 502"
        );
        assert_eq!(
            SubmitError::Timeout(10_000).to_string(),
            "request timed out after 10000 ms"
        );
    }
}
