//! Assets module - domain models, the backend trait and asset flows.

mod assets_model;
mod assets_service;
mod assets_traits;


// Re-export the public interface
pub use assets_model::{
    AssetCreate, AssetRead, AssetType, AssetUpdate, Currency, DeleteResponse, HealthStatus,
};
pub use assets_service::{
    AssetFlowService, FlowMessages, BACKEND_DOWN_TITLE, LOAD_FAILED_TITLE,
};
pub use assets_traits::AssetsApi;
