use std::sync::OnceLock;

use axum::extract::rejection::FormRejection;
use axum::{Extension, Form, Json};
use log::{error, warn};
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::data::availability::{AvailabilityRequest, AvailabilityResponse};
use crate::data::client::ReqwestAvailabilityClient;
use crate::settings::Settings;

static CSRF_TOKEN: OnceLock<String> = OnceLock::new();
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Keeps the first settings installed for the lifetime of the process.
pub fn install_settings(settings: Settings) -> &'static Settings {
    SETTINGS.get_or_init(|| settings)
}

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

pub fn csrf_token() -> &'static str {
    CSRF_TOKEN.get_or_init(|| {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect()
    })
}

/// Forwards availability checks from the page to the booking API.
#[derive(Clone)]
pub struct AvailabilityProxy {
    client: ReqwestAvailabilityClient,
}

impl AvailabilityProxy {
    pub fn new(client: ReqwestAvailabilityClient) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ReqwestAvailabilityClient::new(
            &settings.upstream_url,
            &settings.availability_path,
        ))
    }

    pub async fn answer(&self, expected_token: &str, request: AvailabilityRequest) -> AvailabilityResponse {
        if request.csrf_token != expected_token {
            warn!("rejected availability check for room {}: bad CSRF token", request.room_id);
            return AvailabilityResponse::failure("Invalid CSRF token");
        }

        match self.client.post_form(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("upstream availability check at {} failed: {}", self.client.url(), e);
                AvailabilityResponse::failure("Error querying availability")
            }
        }
    }
}

pub async fn search_availability_json(
    Extension(proxy): Extension<AvailabilityProxy>,
    form: Result<Form<AvailabilityRequest>, FormRejection>,
) -> Json<AvailabilityResponse> {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!("unreadable availability form: {}", rejection);
            return Json(AvailabilityResponse::failure("Internal server error"));
        }
    };

    Json(proxy.answer(csrf_token(), request).await)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    fn request(token: &str) -> AvailabilityRequest {
        AvailabilityRequest {
            start: "2040-01-01".into(),
            end: "2040-01-02".into(),
            csrf_token: token.into(),
            room_id: "1".into(),
        }
    }

    #[test]
    fn token_is_stable_per_process() {
        assert_eq!(csrf_token().len(), 32);
        assert_eq!(csrf_token(), csrf_token());
    }

    #[tokio::test]
    async fn forwards_valid_requests() {
        let server = MockServer::start();
        let upstream = server.mock(|when, then| {
            when.method(POST)
                .path("/search-availability-json")
                .body("start=2040-01-01&end=2040-01-02&csrf_token=secret&room_id=1");
            then.status(200).json_body(serde_json::json!({
                "ok": true, "room_id": "1", "start_date": "2040-01-01", "end_date": "2040-01-02"
            }));
        });

        let proxy = AvailabilityProxy::new(ReqwestAvailabilityClient::new(
            &server.base_url(),
            "/search-availability-json",
        ));
        let response = proxy.answer("secret", request("secret")).await;

        upstream.assert();
        assert!(response.ok);
        assert_eq!(response.start_date, "2040-01-01");
    }

    #[tokio::test]
    async fn rejects_wrong_token_without_calling_upstream() {
        let server = MockServer::start();
        let upstream = server.mock(|when, then| {
            when.method(POST).path("/search-availability-json");
            then.status(200).json_body(serde_json::json!({ "ok": true }));
        });

        let proxy = AvailabilityProxy::new(ReqwestAvailabilityClient::new(
            &server.base_url(),
            "/search-availability-json",
        ));
        let response = proxy.answer("secret", request("forged")).await;

        upstream.assert_hits(0);
        assert!(!response.ok);
        assert_eq!(response.message.as_deref(), Some("Invalid CSRF token"));
    }

    #[tokio::test]
    async fn upstream_failure_becomes_negative_answer() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/search-availability-json");
            then.status(500);
        });

        let proxy = AvailabilityProxy::new(ReqwestAvailabilityClient::new(
            &server.base_url(),
            "/search-availability-json",
        ));
        let response = proxy.answer("secret", request("secret")).await;

        assert!(!response.ok);
        assert_eq!(response.message.as_deref(), Some("Error querying availability"));
    }
}
