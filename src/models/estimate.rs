//! Price, time and upfront fare estimate models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{Coordinates, FareId, PlaceName, ProductId};
use crate::{Error, Result};

/// Parameters for price, time and upfront fare estimates.
///
/// A location is given either as a saved [`PlaceName`] or as a pair of
/// coordinates. Which ends are required depends on the estimate:
/// price estimates need both start and end coordinates, time estimates need
/// start coordinates, upfront fares need a start and an end of either kind.
///
/// # Example
///
/// ```
/// use uber_rs::models::{Coordinates, EstimateRequest};
///
/// let request = EstimateRequest::between(
///     Coordinates::new(37.7752315, -122.418075),
///     Coordinates::new(37.7752415, -122.518075),
/// );
/// assert!(request.start_latitude.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Start latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_latitude: Option<f64>,
    /// Start longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_longitude: Option<f64>,
    /// End latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_latitude: Option<f64>,
    /// End longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_longitude: Option<f64>,
    /// Saved place to start from, instead of coordinates
    #[serde(rename = "start_place_id", default, skip_serializing_if = "Option::is_none")]
    pub start_place: Option<PlaceName>,
    /// Saved place to end at, instead of coordinates
    #[serde(rename = "end_place_id", default, skip_serializing_if = "Option::is_none")]
    pub end_place: Option<PlaceName>,
    /// Restrict the estimate to one product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Number of seats (shared products only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_count: Option<u32>,
}

impl EstimateRequest {
    /// An estimate between two coordinates.
    pub fn between(start: Coordinates, end: Coordinates) -> Self {
        Self::default().start_at(start).end_at(end)
    }

    /// Set the start coordinates.
    pub fn start_at(mut self, start: Coordinates) -> Self {
        self.start_latitude = Some(start.latitude);
        self.start_longitude = Some(start.longitude);
        self
    }

    /// Set the end coordinates.
    pub fn end_at(mut self, end: Coordinates) -> Self {
        self.end_latitude = Some(end.latitude);
        self.end_longitude = Some(end.longitude);
        self
    }

    /// Start from a saved place.
    pub fn start_place(mut self, place: PlaceName) -> Self {
        self.start_place = Some(place);
        self
    }

    /// End at a saved place.
    pub fn end_place(mut self, place: PlaceName) -> Self {
        self.end_place = Some(place);
        self
    }

    /// Restrict to a product.
    pub fn product(mut self, product_id: impl Into<ProductId>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// The start coordinates, if both halves are present and valid.
    pub fn start(&self) -> Result<Option<Coordinates>> {
        coordinates(self.start_latitude, self.start_longitude, "start")
    }

    /// The end coordinates, if both halves are present and valid.
    pub fn end(&self) -> Result<Option<Coordinates>> {
        coordinates(self.end_latitude, self.end_longitude, "end")
    }

    pub(crate) fn validate_for_price(&self) -> Result<()> {
        self.start()?
            .ok_or_else(|| Error::InvalidInput("price estimates need start coordinates".into()))?;
        self.end()?
            .ok_or_else(|| Error::InvalidInput("price estimates need end coordinates".into()))?;
        Ok(())
    }

    pub(crate) fn validate_for_time(&self) -> Result<()> {
        self.start()?
            .ok_or_else(|| Error::InvalidInput("time estimates need start coordinates".into()))?;
        if let Some(product_id) = &self.product_id {
            product_id.validate()?;
        }
        Ok(())
    }

    pub(crate) fn validate_for_upfront_fare(&self) -> Result<()> {
        require_location(self.start()?, self.start_place, "start")?;
        require_location(self.end()?, self.end_place, "end")
    }
}

/// Combine an optional latitude/longitude pair, rejecting half-set pairs.
pub(crate) fn coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
    which: &str,
) -> Result<Option<Coordinates>> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            let coordinates = Coordinates::new(latitude, longitude);
            coordinates.validate()?;
            Ok(Some(coordinates))
        }
        (None, None) => Ok(None),
        _ => Err(Error::InvalidInput(format!(
            "{} needs both a latitude and a longitude",
            which
        ))),
    }
}

pub(crate) fn require_location(
    coordinates: Option<Coordinates>,
    place: Option<PlaceName>,
    which: &str,
) -> Result<()> {
    if coordinates.is_none() && place.is_none() {
        return Err(Error::InvalidInput(format!(
            "{} needs a place or coordinates",
            which
        )));
    }
    Ok(())
}

/// Estimated price range for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Product this estimate is for
    pub product_id: ProductId,
    /// Display name of the product
    pub display_name: String,
    /// Formatted estimate, e.g. "$15-20"
    pub estimate: String,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Lower bound of the estimate
    #[serde(default)]
    pub low_estimate: Option<Decimal>,
    /// Upper bound of the estimate
    #[serde(default)]
    pub high_estimate: Option<Decimal>,
    /// Surge multiplier in effect
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
    /// Expected trip duration in seconds
    #[serde(default)]
    pub duration: Option<i64>,
    /// Expected trip distance
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Estimated pickup time for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Product this estimate is for
    pub product_id: ProductId,
    /// Display name of the product
    pub display_name: String,
    /// Expected time until pickup, in seconds
    pub estimate: i64,
}

/// An upfront fare quote, used to request a ride at a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpfrontFare {
    /// The quoted fare; absent when surge confirmation is required
    #[serde(default)]
    pub fare: Option<Fare>,
    /// Surge details, present instead of a fare during surge pricing
    #[serde(rename = "estimate", default)]
    pub surge: Option<SurgeEstimate>,
    /// Trip distance and duration estimate
    #[serde(default)]
    pub trip: Option<TripEstimate>,
    /// Expected minutes until pickup
    #[serde(default)]
    pub pickup_estimate: Option<i64>,
}

/// A fixed fare quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    /// Fare amount
    pub value: Decimal,
    /// Identifier to pass along when requesting the ride
    pub fare_id: FareId,
    /// When the quote stops being honored
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
    /// Formatted amount, e.g. "$5.73"
    pub display: String,
    /// ISO 4217 currency code
    pub currency_code: String,
}

/// Surge pricing details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeEstimate {
    /// Surge multiplier in effect
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
    /// Confirmation id to pass when requesting the ride
    #[serde(default)]
    pub surge_confirmation_id: Option<String>,
    /// Page the rider must visit to confirm the surge
    #[serde(default)]
    pub surge_confirmation_href: Option<String>,
}

/// Distance and duration estimate of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    /// Unit of `distance_estimate`, e.g. "mile"
    pub distance_unit: String,
    /// Expected duration in seconds
    pub duration_estimate: i64,
    /// Expected distance
    pub distance_estimate: f64,
}
