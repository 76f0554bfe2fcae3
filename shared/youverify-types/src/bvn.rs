use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Metadata, VerificationResponse};

/// Request body for a Nigerian Bank Verification Number lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankVerificationNumberRequest {
    /// The BVN to verify
    #[serde(rename = "id")]
    pub bvn: String,
    /// Caller metadata, returned untouched in the verification record. Always sent, `{}` when empty.
    #[serde(default)]
    pub metadata: Metadata,
    /// The subject must have consented. Lookups without consent are rejected locally.
    pub is_subject_consent: bool,
    /// Request the premium record
    #[serde(rename = "premiumBVN", default)]
    pub premium_bvn: bool,
}

impl BankVerificationNumberRequest {
    /// Creates a consented, non-premium request for the given BVN.
    #[must_use]
    pub fn new(bvn: impl Into<String>) -> Self {
        Self {
            bvn: bvn.into(),
            metadata: Metadata::new(),
            is_subject_consent: true,
            premium_bvn: false,
        }
    }

    /// Requests the premium record.
    #[must_use]
    pub const fn premium(mut self, premium_bvn: bool) -> Self {
        self.premium_bvn = premium_bvn;
        self
    }

    /// Attaches a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Response of a BVN lookup.
pub type BankVerificationNumberResponse = VerificationResponse<BvnRecord>;

/// Verification record returned for a BVN.
///
/// Upstream records are frequently incomplete, so every field is optional.
/// Fields the provider documents loosely are kept as raw JSON values. Keys
/// not modelled here are collected in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BvnRecord {
    pub id: Option<String>,
    pub parent_id: Option<Value>,
    pub status: Option<String>,
    pub reason: Option<Value>,
    pub data_validation: Option<bool>,
    pub selfie_validation: Option<bool>,
    pub first_name: Option<String>,
    pub middle_name: Option<Value>,
    pub last_name: Option<String>,
    /// Base64 encoded portrait
    pub image: Option<String>,
    pub enrollment_branch: Option<Value>,
    pub enrollment_institution: Option<Value>,
    pub mobile: Option<String>,
    pub date_of_birth: Option<String>,
    pub is_consent: Option<bool>,
    pub id_number: Option<String>,
    pub nin: Option<String>,
    /// Spelling follows the provider's field name
    pub should_retrived_nin: Option<bool>,
    pub business_id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub all_validation_passed: Option<bool>,
    pub requested_at: Option<String>,
    pub requested_by_id: Option<String>,
    pub country: Option<String>,
    pub created_at: Option<String>,
    pub last_modified_at: Option<String>,
    pub email: Option<Value>,
    pub registration_date: Option<String>,
    pub gender: Option<String>,
    pub level_of_account: Option<Value>,
    pub address: Option<BvnAddress>,
    pub title: Option<Value>,
    pub marital_status: Option<Value>,
    pub lga_of_origin: Option<Value>,
    pub other_mobile: Option<Value>,
    pub state_of_origin: Option<Value>,
    pub watch_listed: Option<Value>,
    pub name_on_card: Option<Value>,
    pub full_details: Option<bool>,
    pub metadata: Option<Value>,
    pub requested_by: Option<BvnRequester>,
    /// Fields returned by the provider that are not modelled above
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Address block of a BVN record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BvnAddress {
    pub town: Option<Value>,
    pub lga: Option<Value>,
    pub state: Option<Value>,
    pub address_line: Option<Value>,
}

/// Account that issued the lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BvnRequester {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub id: Option<String>,
}
