use async_trait::async_trait;
use gloo_net::http::Request;
use reqwest::header;

use super::availability::{AvailabilityRequest, AvailabilityResponse};
use crate::error::CheckError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[async_trait(?Send)]
pub trait AvailabilityClient {
    async fn search(&self, request: &AvailabilityRequest) -> Result<AvailabilityResponse, CheckError>;
}

/// Browser client, posts to a path on the page's own origin.
#[derive(Debug, Clone)]
pub struct GlooAvailabilityClient {
    endpoint: String,
}

impl GlooAvailabilityClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl AvailabilityClient for GlooAvailabilityClient {
    async fn search(&self, request: &AvailabilityRequest) -> Result<AvailabilityResponse, CheckError> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(request.to_form_body())?
            .send()
            .await?;

        if !response.ok() {
            return Err(CheckError::Status(response.status()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Native client for a booking API at `base_url`.
#[derive(Debug, Clone)]
pub struct ReqwestAvailabilityClient {
    client: reqwest::Client,
    url: String,
}

impl ReqwestAvailabilityClient {
    pub fn new(base_url: &str, path: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, path)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, path: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send-safe variant of [`AvailabilityClient::search`] for use inside server handlers.
    pub async fn post_form(&self, request: &AvailabilityRequest) -> Result<AvailabilityResponse, CheckError> {
        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(header::ACCEPT, "application/json")
            .body(request.to_form_body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl AvailabilityClient for ReqwestAvailabilityClient {
    async fn search(&self, request: &AvailabilityRequest) -> Result<AvailabilityResponse, CheckError> {
        self.post_form(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_path() {
        let client = ReqwestAvailabilityClient::new("http://localhost:8080/", "/search-availability-json");
        assert_eq!(client.url(), "http://localhost:8080/search-availability-json");
    }
}
