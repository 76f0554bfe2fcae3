//! Wire payloads for the Youverify identity verification API.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bank Verification Number payloads
pub mod bvn;

pub use bvn::{
    BankVerificationNumberRequest, BankVerificationNumberResponse, BvnAddress, BvnRecord,
    BvnRequester,
};

/// Free-form metadata attached to a verification request and echoed back by the provider.
pub type Metadata = BTreeMap<String, Value>;

/// Envelope shared by every verification endpoint.
///
/// `data` carries the endpoint specific record. It is absent when the provider
/// omits it or sends `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse<T> {
    /// Whether the provider considers the verification successful
    #[serde(default)]
    pub success: bool,
    /// Status code echoed in the body by the provider
    pub status_code: Option<u16>,
    /// Human readable message from the provider
    pub message: Option<String>,
    /// Endpoint specific payload
    pub data: Option<T>,
    /// Hypermedia links, passed through untouched
    pub links: Option<Vec<Value>>,
}

impl<T> VerificationResponse<T> {
    /// Returns the record if the provider sent one.
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
