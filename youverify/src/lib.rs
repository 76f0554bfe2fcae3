//! Client for the Youverify identity verification API (KYC, KYB, AML).
//!
//! A [`Client`] carries the base URL, the secret token and an
//! [`HttpTransport`]. Every operation builds a JSON request, sends it with the
//! `Token` header, maps documented failure statuses to [`StatusError`] and
//! decodes the body into a typed response.
//!
//! ```no_run
//! # async fn run() -> Result<(), youverify::YouverifyError> {
//! use youverify::{types::BankVerificationNumberRequest, Client, ClientConfig, Environment};
//!
//! let client = Client::new(ClientConfig::new(Environment::Sandbox, "secret-token"))?;
//! let response = client
//!     .kyc()
//!     .nigeria()
//!     .bank_verification_number(&BankVerificationNumberRequest::new("11111111111"))
//!     .await?;
//! println!("{:?}", response.data().and_then(|d| d.first_name.as_deref()));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]

/// HTTP client and request dispatch
pub mod client;

/// Configuration and environment selection
pub mod config;

/// Error types
pub mod error;

/// Know Your Customer operations
pub mod kyc;

/// Documented failure status codes
pub mod status;

/// Pluggable HTTP transport
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, ConfigError, Environment};
pub use error::YouverifyError;
pub use status::StatusError;
pub use transport::{
    default_transport, HttpTransport, TransportError, TransportRequest, TransportResponse,
};

/// Request and response payloads
pub use youverify_types as types;
