//! HTTP client for the producer's lookup endpoint.

use std::time::Duration;

use hats_lib::contract::hat_path;
use hats_lib::{Hat, HatId};
use hats_service_shared::{RequestId, REQUEST_ID_HEADER};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::ProducerError;

/// Client for `GET /api/v1/hats/{id}` on a producer.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ProducerClient {
    http: Client,
    base_url: String,
}

impl ProducerClient {
    /// Create a client for the producer at `base_url` (scheme, host, port).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProducerError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hats-service-consumer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one hat from the producer.
    ///
    /// `request_id` is sent as `X-Request-ID` so both services log the same
    /// correlation ID.
    pub async fn find_hat(
        &self,
        id: HatId,
        request_id: &RequestId,
    ) -> Result<Hat, ProducerError> {
        let url = format!("{}{}", self.base_url, hat_path(id));
        debug!(url = %url, request_id = %request_id, "calling producer");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Hat>().await?),
            StatusCode::NOT_FOUND => Err(ProducerError::HatNotFound { id }),
            status => Err(ProducerError::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}

/// Message shown to the caller once a hat is found.
pub fn greeting(hat: &Hat) -> String {
    format!("Enjoy your new {}", hat.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_hat_name() {
        let hat = Hat::new(1, "Sombrero", 30, "red");
        assert_eq!(greeting(&hat), "Enjoy your new Sombrero");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ProducerClient::new("http://localhost:8100/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8100");
    }
}
