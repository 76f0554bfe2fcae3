// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;

/// A request as seen by the stub server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Stub of the Youverify API.
///
/// Answers every request with the configured status and body, except
/// `/v2/api/status/{code}` which answers with `code` and a non-JSON body.
#[derive(Clone)]
pub struct StubApi {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubApi {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Serves the stub on an ephemeral port and returns the base URL to configure
    pub async fn serve(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let router = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}/v2/api/")
    }
}

async fn handle(
    State(stub): State<StubApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri.path().to_string();
    stub.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        headers,
        body,
    });

    if let Some(code) = path
        .strip_prefix("/v2/api/status/")
        .and_then(|code| code.parse::<u16>().ok())
    {
        let status = StatusCode::from_u16(code).unwrap();
        return (
            status,
            [(header::CONTENT_TYPE, "text/html")],
            "<html>upstream error</html>".to_string(),
        );
    }

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

/// Returns an address nothing listens on
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v2/api/")
}
