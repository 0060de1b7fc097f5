use std::time::Instant;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::telemetry;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to fetch from the catalog: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("Catalog responded with an error status: {0}")]
    Status(#[source] reqwest::Error),
    #[error("Failed to parse the catalog response: {0}")]
    Parse(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET {base_url}{path}` and parses the body as JSON.
    ///
    /// The response status is recorded as `http.status_code` on the current span,
    /// so callers are expected to declare that field.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Requesting");

        let started = Instant::now();

        let response = match self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                telemetry::record_catalog_request(operation, None, started);

                return Err(CatalogError::Fetch(err));
            }
        };

        let status = response.status();
        tracing::Span::current().record("http.status_code", status.as_u16());
        telemetry::record_catalog_request(operation, Some(status), started);

        response
            .error_for_status()
            .map_err(CatalogError::Status)?
            .json::<T>()
            .await
            .map_err(CatalogError::Parse)
    }
}
