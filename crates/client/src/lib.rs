//! Fintrack Client - REST client for the assets backend.
//!
//! [`AssetsClient`] talks to the backend's `/assets` and `/health` endpoints
//! and implements [`fintrack_core::AssetsApi`] so asset flows can use it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fintrack_client::AssetsClient;
//!
//! let client = AssetsClient::new("http://127.0.0.1:8000/v1")?;
//! let assets = client.list_assets().await?;
//! ```

mod client;
mod error;
mod types;

pub use client::AssetsClient;
pub use error::{ClientError, Result};
pub use types::ApiErrorResponse;
