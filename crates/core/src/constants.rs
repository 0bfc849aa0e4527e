/// Lifetime of a toast when the caller does not supply one.
pub const DEFAULT_TOAST_TTL_MS: u64 = 2800;

/// Longest ticker accepted by the asset form.
pub const MAX_TICKER_LEN: usize = 20;

/// Base URL of the assets backend in local development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/v1";
