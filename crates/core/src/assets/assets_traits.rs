use super::assets_model::{AssetCreate, AssetRead, AssetUpdate, DeleteResponse, HealthStatus};
use crate::errors::Result;

/// Contract of the assets backend.
///
/// Implemented over HTTP by `fintrack-client`; flows only depend on this
/// trait.
#[async_trait::async_trait]
pub trait AssetsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<AssetRead>>;
    async fn get(&self, id: i64) -> Result<AssetRead>;
    async fn create(&self, payload: &AssetCreate) -> Result<AssetRead>;
    /// Partial update; only the fields set in `payload` change.
    async fn update(&self, id: i64, payload: &AssetUpdate) -> Result<AssetRead>;
    async fn delete(&self, id: i64) -> Result<DeleteResponse>;
    async fn health(&self) -> Result<HealthStatus>;
}
