use http::Method;
use tracing::instrument;
use youverify_types::{BankVerificationNumberRequest, BankVerificationNumberResponse};

use crate::{Client, YouverifyError};

/// Path of the BVN lookup, relative to the API base URL
const BVN_PATH: &str = "identity/ng/bvn";

/// Nigerian identity lookups
#[derive(Debug, Clone, Copy)]
pub struct Nigeria<'a> {
    client: &'a Client,
}

impl<'a> Nigeria<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Verifies a Bank Verification Number.
    ///
    /// # Arguments
    /// * `request` - The BVN to verify. `is_subject_consent` must be `true`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The subject has not consented (no request is sent)
    /// - The request cannot be sent or no response is received
    /// - The API answers with a documented failure status
    /// - The response does not decode
    #[instrument(skip_all, fields(premium = request.premium_bvn))]
    pub async fn bank_verification_number(
        &self,
        request: &BankVerificationNumberRequest,
    ) -> Result<BankVerificationNumberResponse, YouverifyError> {
        if !request.is_subject_consent {
            return Err(YouverifyError::SubjectConsentRequired);
        }

        self.client.send(Method::POST, BVN_PATH, Some(request)).await
    }
}
