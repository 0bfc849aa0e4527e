//! Asset domain models as exchanged with the assets backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_TICKER_LEN;
use crate::errors::{Result, ValidationError};

/// Kind of tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    #[default]
    Etf,
    Stock,
    Crypto,
}

impl AssetType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetType::Etf => "ETF",
            AssetType::Stock => "STOCK",
            AssetType::Crypto => "CRYPTO",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ETF" => Ok(AssetType::Etf),
            "STOCK" => Ok(AssetType::Stock),
            "CRYPTO" => Ok(AssetType::Crypto),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown asset type '{}'",
                other
            ))),
        }
    }
}

/// Quote currency of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Eur,
}

impl Currency {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(ValidationError::InvalidInput(format!(
                "unsupported currency '{}'",
                other
            ))),
        }
    }
}

/// Asset as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRead {
    pub id: i64,
    pub ticker: String,
    pub asset_type: AssetType,
    pub current_price: Decimal,
    pub currency: Currency,
}

/// Payload for creating an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCreate {
    pub ticker: String,
    pub asset_type: AssetType,
    pub current_price: Decimal,
    #[serde(default)]
    pub currency: Currency,
}

impl AssetCreate {
    /// Applies the asset form rules.
    pub fn validate(&self) -> Result<()> {
        validate_ticker(&self.ticker)?;
        validate_price(self.current_price)?;
        Ok(())
    }
}

/// Partial update payload. Unset fields are left untouched by the backend
/// and are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl AssetUpdate {
    pub fn is_empty(&self) -> bool {
        self.ticker.is_none()
            && self.asset_type.is_none()
            && self.current_price.is_none()
            && self.currency.is_none()
    }

    /// Applies the asset form rules to the fields that are set.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ValidationError::InvalidInput("update has no fields set".to_string()).into());
        }
        if let Some(ticker) = &self.ticker {
            validate_ticker(ticker)?;
        }
        if let Some(price) = self.current_price {
            validate_price(price)?;
        }
        Ok(())
    }
}

impl From<AssetCreate> for AssetUpdate {
    fn from(create: AssetCreate) -> Self {
        Self {
            ticker: Some(create.ticker),
            asset_type: Some(create.asset_type),
            current_price: Some(create.current_price),
            currency: Some(create.currency),
        }
    }
}

/// Body returned by the delete endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

fn validate_ticker(ticker: &str) -> Result<()> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(ValidationError::MissingField("ticker".to_string()).into());
    }
    if ticker.chars().count() > MAX_TICKER_LEN {
        return Err(ValidationError::TooLong {
            field: "ticker".to_string(),
            max: MAX_TICKER_LEN,
        }
        .into());
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::Negative("current_price".to_string()).into());
    }
    Ok(())
}
