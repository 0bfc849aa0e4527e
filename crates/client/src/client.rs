//! Assets API client for the Fintrack backend.
//!
//! Paths are relative to the versioned base URL, e.g.
//! `http://127.0.0.1:8000/v1` + `/assets`.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use std::time::Duration;

use fintrack_core::{
    AssetCreate, AssetRead, AssetUpdate, AssetsApi, DeleteResponse, HealthStatus,
};

use crate::error::{ClientError, Result};
use crate::types::ApiErrorResponse;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the assets REST backend.
#[derive(Debug, Clone)]
pub struct AssetsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AssetsClient {
    /// Create a new client with the default request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The versioned base URL of the backend (e.g., "http://127.0.0.1:8000/v1")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::invalid_request(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn assets_url(&self) -> String {
        format!("{}/assets", self.base_url)
    }

    fn asset_url(&self, id: i64) -> String {
        format!("{}/assets/{}", self.base_url, id)
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|error| error.message())
                .unwrap_or_else(|_| format!("Request failed: {}", body));
            if status == StatusCode::NOT_FOUND {
                return Err(ClientError::NotFound(message));
            }
            return Err(ClientError::api(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            ClientError::Json(e)
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assets
    // ─────────────────────────────────────────────────────────────────────────

    /// List all assets.
    ///
    /// GET /assets
    pub async fn list_assets(&self) -> Result<Vec<AssetRead>> {
        let response = self
            .client
            .get(self.assets_url())
            .headers(Self::headers())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Get a single asset.
    ///
    /// GET /assets/{id}
    pub async fn get_asset(&self, id: i64) -> Result<AssetRead> {
        let response = self
            .client
            .get(self.asset_url(id))
            .headers(Self::headers())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create an asset.
    ///
    /// POST /assets
    pub async fn create_asset(&self, payload: &AssetCreate) -> Result<AssetRead> {
        debug!("Creating asset: {:?}", payload);

        let response = self
            .client
            .post(self.assets_url())
            .headers(Self::headers())
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Partially update an asset.
    ///
    /// PATCH /assets/{id}
    pub async fn update_asset(&self, id: i64, payload: &AssetUpdate) -> Result<AssetRead> {
        debug!("Updating asset {}: {:?}", id, payload);

        let response = self
            .client
            .patch(self.asset_url(id))
            .headers(Self::headers())
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete an asset.
    ///
    /// DELETE /assets/{id}
    pub async fn delete_asset(&self, id: i64) -> Result<DeleteResponse> {
        let response = self
            .client
            .delete(self.asset_url(id))
            .headers(Self::headers())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Health
    // ─────────────────────────────────────────────────────────────────────────

    /// Backend liveness check.
    ///
    /// GET /health
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .headers(Self::headers())
            .send()
            .await?;

        Self::parse_response(response).await
    }
}

#[async_trait::async_trait]
impl AssetsApi for AssetsClient {
    async fn list(&self) -> fintrack_core::Result<Vec<AssetRead>> {
        Ok(self.list_assets().await?)
    }

    async fn get(&self, id: i64) -> fintrack_core::Result<AssetRead> {
        Ok(self.get_asset(id).await?)
    }

    async fn create(&self, payload: &AssetCreate) -> fintrack_core::Result<AssetRead> {
        Ok(self.create_asset(payload).await?)
    }

    async fn update(&self, id: i64, payload: &AssetUpdate) -> fintrack_core::Result<AssetRead> {
        Ok(self.update_asset(id, payload).await?)
    }

    async fn delete(&self, id: i64) -> fintrack_core::Result<DeleteResponse> {
        Ok(self.delete_asset(id).await?)
    }

    async fn health(&self) -> fintrack_core::Result<HealthStatus> {
        Ok(self.health_check().await?)
    }
}
