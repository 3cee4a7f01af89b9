use crate::app::ports::{CandidateSource, DonationSource};
use crate::constants::{CANDIDATES_ENDPOINT, DONATIONS_ENDPOINT};
use crate::domain::{Donation, RawCandidateData};
use crate::error::Result;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Live data source reading the published JSON bucket. One instance serves
/// both fetch ports.
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CandidateSource for HttpDataSource {
    #[instrument(skip(self))]
    async fn fetch_candidates(&self) -> Result<RawCandidateData> {
        let url = format!("{}{}", self.base_url, CANDIDATES_ENDPOINT);
        let payload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<RawCandidateData>()
            .await?;
        info!(%url, "fetched candidate payload");
        Ok(payload)
    }
}

#[async_trait]
impl DonationSource for HttpDataSource {
    #[instrument(skip(self))]
    async fn fetch_donations(&self, candidate_id: &str) -> Result<Vec<Donation>> {
        let url = format!(
            "{}{}/{}.json",
            self.base_url, DONATIONS_ENDPOINT, candidate_id
        );
        let donations = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Donation>>()
            .await?;
        info!(%url, count = donations.len(), "fetched donation records");
        Ok(donations)
    }
}
