//! Driver (partner) profile, payment and trip models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{PaymentCategory, TripStatus};
use super::primitives::TripId;
use super::profile::City;

/// Profile of the authenticated driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Unique id of the driver
    pub driver_id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Profile photo
    #[serde(default)]
    pub picture: Option<String>,
    /// Driver rating
    #[serde(default)]
    pub rating: Option<f64>,
    /// Driver's referral code
    #[serde(default)]
    pub promo_code: Option<String>,
    /// Whether the driver may take trips
    #[serde(default)]
    pub activation_status: Option<String>,
}

/// One payment to or from a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPayment {
    /// Unique id of the payment
    pub payment_id: String,
    /// What the payment is for
    pub category: PaymentCategory,
    /// When the payment happened
    #[serde(with = "chrono::serde::ts_seconds")]
    pub event_time: DateTime<Utc>,
    /// Trip the payment belongs to, if any
    #[serde(default)]
    pub trip_id: Option<TripId>,
    /// Cash the driver collected
    #[serde(default)]
    pub cash_collected: Option<Decimal>,
    /// Net amount of the payment
    pub amount: Decimal,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_code: Option<String>,
    /// How the amount breaks down
    #[serde(default)]
    pub breakdown: Option<PaymentBreakdown>,
    /// Driver the payment belongs to
    #[serde(default)]
    pub driver_id: Option<String>,
}

/// Breakdown of a driver payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Everything not itemized below
    #[serde(default)]
    pub other: Option<Decimal>,
    /// Tolls
    #[serde(default)]
    pub toll: Option<Decimal>,
    /// Service fee kept by the platform
    #[serde(default)]
    pub service_fee: Option<Decimal>,
}

/// A trip as seen by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverTrip {
    /// Unique id of the trip
    pub trip_id: TripId,
    /// Driver who drove the trip
    #[serde(default)]
    pub driver_id: Option<String>,
    /// Vehicle used
    #[serde(default)]
    pub vehicle_id: Option<String>,
    /// Final status
    #[serde(default)]
    pub status: TripStatus,
    /// Fare charged
    #[serde(default)]
    pub fare: Option<Decimal>,
    /// ISO 4217 currency code of `fare`
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Distance in miles
    #[serde(default)]
    pub distance: Option<f64>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<i64>,
    /// Surge multiplier applied
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
    /// City the trip started in
    #[serde(default)]
    pub start_city: Option<City>,
    /// Status transitions, oldest first
    #[serde(default)]
    pub status_changes: Vec<StatusChange>,
}

/// A status transition of a driver trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status entered
    pub status: TripStatus,
    /// When it was entered
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}
