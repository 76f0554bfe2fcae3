//! Know Your Customer endpoints, grouped by country.

use crate::Client;

/// Nigerian identity lookups
pub mod nigeria;

pub use nigeria::Nigeria;

/// Entry point for KYC operations, obtained from [`Client::kyc`]
#[derive(Debug, Clone, Copy)]
pub struct Kyc<'a> {
    client: &'a Client,
}

impl<'a> Kyc<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Nigerian identity lookups
    #[must_use]
    pub const fn nigeria(&self) -> Nigeria<'a> {
        Nigeria::new(self.client)
    }
}
