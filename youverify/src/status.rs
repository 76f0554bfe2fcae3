//! Known failure status codes returned by the Youverify API

use http::StatusCode;
use strum::{EnumIter, FromRepr};
use thiserror::Error;

/// Description of a successful response
pub const SUCCESS_DESCRIPTION: &str = "[Successful] - Your request was successful.";

/// Failure status codes the API documents, keyed by their numeric value.
///
/// Responses carrying any of these codes are never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, FromRepr, EnumIter)]
#[repr(u16)]
pub enum StatusError {
    /// 400
    #[error("[Bad request] - Most likely an invalid syntax. Check all parameters.")]
    BadRequest = 400,

    /// 401
    #[error(
        "[Unauthorized] - You are unauthorized for this request. Contact support@youverify.co."
    )]
    Unauthorized = 401,

    /// 402
    #[error("[Payment Required] - You balance is most likely low and you are required to top up your balance.")]
    PaymentRequired = 402,

    /// 404
    #[error("[Not found] - URL not recognized. Check to confirm the right URL.")]
    NotFound = 404,

    /// 405
    #[error(
        "[Method not found] - The request is disabled. Check the URL or rollback recent upgrades."
    )]
    MethodNotAllowed = 405,

    /// 408
    #[error("[Request timeout] - Your request took longer than it should have. Check your internet connection.")]
    RequestTimeout = 408,

    /// 424
    #[error("[Failed Dependency] - Third Party service Failure.")]
    FailedDependency = 424,

    /// 429
    #[error("[Too many requests] - You have sent too many requests that has exceeded the rate limit. You need to wait a while.")]
    TooManyRequests = 429,

    /// 500
    #[error("[Server error] - This is a very rare occurrence where the server is unable to process a request properly. Contact support@youverify.co")]
    InternalServerError = 500,

    /// 502
    #[error("[Server error] - This is a very rare occurrence where the server is unable to process a request properly. Contact support@youverify.co")]
    BadGateway = 502,

    /// 503
    #[error("[Server error] - This is a very rare occurrence where the server is unable to process a request properly. Contact support@youverify.co")]
    ServiceUnavailable = 503,

    /// 504
    #[error("[Server error] - This is a very rare occurrence where the server is unable to process a request properly. Contact support@youverify.co")]
    GatewayTimeout = 504,
}

impl StatusError {
    /// Looks up the error for a status code. Codes outside the documented set return `None`.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Option<Self> {
        Self::from_repr(status.as_u16())
    }

    /// The status code this error stands for
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Whether the provider suggests the request may succeed later
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            Self::RequestTimeout
                | Self::TooManyRequests
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::GatewayTimeout
        )
    }
}

/// Fails with the documented error when `status` is a known failure code
///
/// # Errors
///
/// Returns the [`StatusError`] matching `status`
pub fn check_status(status: StatusCode) -> Result<(), StatusError> {
    match StatusError::from_status(status) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
