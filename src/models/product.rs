//! Product models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::ProductId;

/// A product (UberX, UberPOOL, ...) available at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id of the product
    pub product_id: ProductId,
    /// Display name
    pub display_name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Maximum number of riders
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Image of the product
    #[serde(default)]
    pub image: Option<String>,
    /// Whether rides are shared with other riders
    #[serde(default)]
    pub shared: bool,
    /// Whether upfront fares are supported
    #[serde(default)]
    pub upfront_fare_enabled: bool,
    /// Whether cash payment is accepted
    #[serde(default)]
    pub cash_enabled: bool,
    /// Product group, e.g. "uberx"
    #[serde(default)]
    pub product_group: Option<String>,
    /// Pricing details
    #[serde(default)]
    pub price_details: Option<PriceDetails>,
}

/// Pricing details of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDetails {
    /// Base fare
    #[serde(default)]
    pub base: Option<Decimal>,
    /// Minimum fare
    #[serde(default)]
    pub minimum: Option<Decimal>,
    /// Price per minute
    #[serde(default)]
    pub cost_per_minute: Option<Decimal>,
    /// Price per `distance_unit`
    #[serde(default)]
    pub cost_per_distance: Option<Decimal>,
    /// Distance unit, e.g. "mile"
    #[serde(default)]
    pub distance_unit: Option<String>,
    /// Fee for cancelling a ride
    #[serde(default)]
    pub cancellation_fee: Option<Decimal>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_code: Option<String>,
}
