use crate::domain::model::Dealer;
use crate::domain::ports::DealerLookup;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Dealer lookup backed by the dealer directory service.
///
/// `GET {base_url}/dealers?city=<city>` answers a JSON array, or 404 when the
/// city has no registered dealer.
#[derive(Debug, Clone)]
pub struct HttpDealerLookup {
    base_url: String,
    client: Client,
}

impl HttpDealerLookup {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl DealerLookup for HttpDealerLookup {
    async fn get_dealer_for_city(&self, city: &str) -> Result<Option<Vec<Dealer>>> {
        let endpoint = format!("{}/dealers", self.base_url);
        tracing::debug!("Requesting dealers for '{}' from {}", city, endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("city", city)])
            .send()
            .await?;

        tracing::debug!("Dealer backend response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dealers: Vec<Dealer> = response.error_for_status()?.json().await?;
        if dealers.is_empty() {
            Ok(None)
        } else {
            Ok(Some(dealers))
        }
    }
}
