//! Rider profile, promotion, payment method and history models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TripStatus;
use super::primitives::{ProductId, TripId};

/// Profile of the authenticated rider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique id of the rider
    #[serde(default)]
    pub rider_id: Option<String>,
    /// Legacy unique id of the rider
    #[serde(default)]
    pub uuid: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Profile photo
    #[serde(default)]
    pub picture: Option<String>,
    /// Rider's referral code
    #[serde(default)]
    pub promo_code: Option<String>,
    /// Whether the phone number is confirmed
    #[serde(default)]
    pub mobile_verified: bool,
}

/// A promotion applied to the rider's account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    /// The code that was applied
    pub promotion_code: String,
    /// What the promotion gives
    #[serde(default)]
    pub description: Option<String>,
}

/// A payment method on the rider's account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Unique id of the payment method
    pub payment_method_id: String,
    /// Kind of payment method, e.g. "baidu_wallet" or "paypal"
    #[serde(rename = "type")]
    pub kind: String,
    /// Description, e.g. "***23"
    #[serde(default)]
    pub description: Option<String>,
}

/// All payment methods on the rider's account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodListing {
    /// Id of the payment method used last
    #[serde(default)]
    pub last_used: Option<String>,
    /// The payment methods
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

/// A city, as reported on trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Name of the city
    pub display_name: String,
    /// Latitude of the city center
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the city center
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One past trip of the rider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Trip id
    pub request_id: TripId,
    /// Final status
    #[serde(default)]
    pub status: TripStatus,
    /// Distance in miles
    #[serde(default)]
    pub distance: Option<f64>,
    /// Product used
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// When the ride was requested
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub request_time: Option<DateTime<Utc>>,
    /// When the trip started
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start_time: Option<DateTime<Utc>>,
    /// When the trip ended
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_time: Option<DateTime<Utc>>,
    /// City the trip started in
    #[serde(default)]
    pub start_city: Option<City>,
}
