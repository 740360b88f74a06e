//! dog.ceo API client.
//!
//! Serves sub-breed lookups from `GET /api/breed/{breed}/list`.
//! See: <https://dog.ceo/dog-api/documentation/sub-breed>
//!
//! The API answers with `{"status": "...", "message": ...}`. The HTTP status
//! code is not consulted: unknown breeds come back as a 404 whose body still
//! carries `"status": "error"`, so the body alone decides the outcome.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::traits::BreedProvider;
use crate::telemetry;
use crate::{BreedFetchError, Result};

/// Default base URL for the dog.ceo API
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const PROVIDER_NAME: &str = "dog.ceo";

/// Client for the dog.ceo breed API.
///
/// All failures (transport, non-success status, unexpected body) are
/// reported as [`BreedFetchError::BreedNotFound`]; the cause is logged at
/// `debug` level.
#[derive(Clone)]
pub struct DogApiClient {
    http: Client,
    base_url: String,
}

impl DogApiClient {
    /// Create a client for the public dog.ceo API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the sub-breeds of `breed`.
    ///
    /// The breed is lowercased for the request path; the error, if any,
    /// carries the breed exactly as given.
    pub async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let start = Instant::now();
        let result = self.fetch(breed).await;

        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "provider" => PROVIDER_NAME)
            .record(start.elapsed().as_secs_f64());
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "provider" => PROVIDER_NAME,
            "status" => status,
        )
        .increment(1);

        result.map_err(|reason| {
            debug!(breed, reason = %reason, "sub-breed lookup failed");
            BreedFetchError::BreedNotFound(breed.to_string())
        })
    }

    /// Perform the request, describing any failure as a string.
    async fn fetch(&self, breed: &str) -> std::result::Result<Vec<String>, String> {
        let url = self
            .breed_url(breed)
            .ok_or_else(|| format!("invalid base URL: {}", self.base_url))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body: BreedListResponse = response.json().await.map_err(|e| e.to_string())?;

        if !body.status.eq_ignore_ascii_case("success") {
            return Err(format!("API status: {}", body.status));
        }

        serde_json::from_value(body.message).map_err(|e| format!("unexpected message: {e}"))
    }

    /// Build `{base_url}/api/breed/{breed}/list`, percent-encoding the breed.
    fn breed_url(&self, breed: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["api", "breed", &breed.to_lowercase(), "list"]);
        Some(url)
    }
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct BreedListResponse {
    #[serde(default = "default_status")]
    status: String,
    #[serde(default)]
    message: serde_json::Value,
}

fn default_status() -> String {
    "error".to_string()
}

#[async_trait]
impl BreedProvider for DogApiClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        DogApiClient::sub_breeds(self, breed).await
    }
}
