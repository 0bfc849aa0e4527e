//! Fintrack Core - asset models, asset flows and toast notifications.
//!
//! This crate is transport-agnostic: the REST client lives in
//! `fintrack-client` and plugs in through [`assets::AssetsApi`].

pub mod assets;
pub mod constants;
pub mod errors;
pub mod notifications;

// Re-export common types from the asset and notification modules
pub use assets::*;
pub use notifications::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
