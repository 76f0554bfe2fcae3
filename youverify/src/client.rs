use std::fmt;
use std::sync::Arc;

use http::{
    header::{self, HeaderName, HeaderValue},
    HeaderMap, Method,
};
use reqwest::Url;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{
    config::{ClientConfig, Environment},
    error::YouverifyError,
    kyc::Kyc,
    status::{check_status, SUCCESS_DESCRIPTION},
    transport::{default_transport, HttpTransport, TransportRequest, TransportResponse},
};

/// Authenticated handle to the Youverify API.
///
/// Cloning is cheap: clones share the transport and carry the same
/// immutable configuration, so one client can serve concurrent requests.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    secret_token: String,
    auth_header: HeaderName,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Creates a client for the live (`is_live`) or sandbox API.
    ///
    /// The token is not validated; a blank token is sent as is.
    #[must_use]
    pub fn initialize(
        is_live: bool,
        secret_token: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: Environment::from_is_live(is_live).base_url().to_string(),
            secret_token: secret_token.into(),
            auth_header: HeaderName::from_static("token"),
            transport,
        }
    }

    /// Creates a client with the built-in `reqwest` transport
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built or the auth header name is invalid
    pub fn new(config: ClientConfig) -> Result<Self, YouverifyError> {
        let transport = default_transport(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client that sends requests through `transport`
    ///
    /// # Errors
    ///
    /// Returns an error if the auth header name is invalid
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, YouverifyError> {
        let auth_header = HeaderName::from_bytes(config.auth_header.as_bytes())
            .map_err(|e| YouverifyError::InvalidHeader(format!("{}: {e}", config.auth_header)))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            secret_token: config.secret_token,
            auth_header,
            transport,
        })
    }

    /// Base URL every path is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Know Your Customer operations
    #[must_use]
    pub const fn kyc(&self) -> Kyc<'_> {
        Kyc::new(self)
    }

    /// Sends a request and returns the raw response whatever its status.
    ///
    /// `path` is relative to the base URL. Pass `None::<&()>` for an empty body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or no response is received
    pub async fn send_raw<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<TransportResponse, YouverifyError>
    where
        B: Serialize + ?Sized,
    {
        let target = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        let url = Url::parse(&target).map_err(|source| YouverifyError::InvalidUrl {
            url: target.clone(),
            source,
        })?;

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(YouverifyError::Serialization)?;

        let request = TransportRequest {
            method,
            url,
            headers: self.headers()?,
            body,
        };

        debug!(method = %request.method, url = %request.url, "Sending request to Youverify");

        self.transport.execute(request).await.map_err(|e| {
            warn!(url = %target, "Youverify request failed: {e}");
            e.into()
        })
    }

    /// Sends a request and decodes the JSON response into `T`.
    ///
    /// Documented failure statuses short-circuit with a [`crate::StatusError`]
    /// before the body is looked at. Any other status is decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a documented
    /// failure status, or the body does not decode into `T`
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, YouverifyError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_raw(method, path, body).await?;

        if let Err(err) = check_status(response.status) {
            warn!(status = %response.status, path, "{err}");
            return Err(err.into());
        }

        debug!(status = %response.status, path, "{SUCCESS_DESCRIPTION}");

        serde_json::from_slice(&response.body).map_err(|source| YouverifyError::Decode {
            status: response.status,
            source,
        })
    }

    fn headers(&self) -> Result<HeaderMap, YouverifyError> {
        let mut token = HeaderValue::from_str(&self.secret_token)
            .map_err(|e| YouverifyError::InvalidHeader(format!("secret token: {e}")))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(self.auth_header.clone(), token);
        Ok(headers)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("auth_header", &self.auth_header)
            .field("secret_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
