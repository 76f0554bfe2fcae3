use std::time::Duration;

use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use thiserror::Error;
use tracing::debug;

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Failure to get a response out of the transport
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Failure raised by a middleware layer
    #[error(transparent)]
    Middleware(#[from] reqwest_middleware::Error),

    /// Failure raised by a custom transport
    #[error("{0}")]
    Other(String),
}

/// A fully built request, ready to be executed
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute target URL
    pub url: Url,
    /// Headers, including authentication
    pub headers: HeaderMap,
    /// JSON encoded body, `None` for an empty body
    pub body: Option<Vec<u8>>,
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Executes HTTP requests on behalf of a [`crate::Client`].
///
/// Implementations must be safe to share between tasks. Timeouts, proxies and
/// retries belong here, not in the client.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the status and body of the response
    async fn execute(&self, request: TransportRequest)
        -> Result<TransportResponse, TransportError>;
}

/// Builds the transport used when none is supplied: a pooled `reqwest` client
/// with tracing middleware.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised
pub fn default_transport(timeout: Duration) -> Result<ClientWithMiddleware, TransportError> {
    let reqwest_client = Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .user_agent(format!("youverify-rs/{}", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build())
}

#[async_trait::async_trait]
impl HttpTransport for ClientWithMiddleware {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        debug!("Sending {} request to: {}", request.method, request.url);

        let mut builder = self
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

/// A bare `reqwest` client, for callers that manage their own pool and timeouts
#[async_trait::async_trait]
impl HttpTransport for Client {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let client = ClientWithMiddleware::from(self.clone());
        HttpTransport::execute(&client, request).await
    }
}

/// Test doubles
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::sync::{Arc, Mutex};

    use http::StatusCode;

    use super::{HttpTransport, TransportError, TransportRequest, TransportResponse};

    /// Transport that records every request and answers with a canned response
    #[derive(Clone)]
    pub struct MockTransport {
        status: StatusCode,
        body: Vec<u8>,
        fail_with: Option<String>,
        requests: Arc<Mutex<Vec<TransportRequest>>>,
    }

    impl MockTransport {
        /// Answers every request with `status` and `body`
        ///
        /// # Panics
        ///
        /// If `status` is not a valid HTTP status code
        #[must_use]
        pub fn respond(status: u16, body: impl Into<Vec<u8>>) -> Self {
            Self {
                status: StatusCode::from_u16(status).expect("invalid mock status code"),
                body: body.into(),
                fail_with: None,
                requests: Arc::default(),
            }
        }

        /// Fails every request with a transport error
        #[must_use]
        pub fn fail(message: impl Into<String>) -> Self {
            Self {
                fail_with: Some(message.into()),
                ..Self::respond(200, Vec::new())
            }
        }

        /// Requests received so far
        ///
        /// # Panics
        ///
        /// If the request log lock is poisoned
        #[must_use]
        pub fn requests(&self) -> Vec<TransportRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Number of requests received so far
        #[must_use]
        pub fn calls(&self) -> usize {
            self.requests().len()
        }
    }

    #[async_trait::async_trait]
    impl HttpTransport for MockTransport {
        async fn execute(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.requests
                .lock()
                .map_err(|e| TransportError::Other(e.to_string()))?
                .push(request);

            if let Some(message) = &self.fail_with {
                return Err(TransportError::Other(message.clone()));
            }

            Ok(TransportResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }
}
