//! Ride request, trip, receipt and map models.

use serde::{Deserialize, Serialize};

use super::enums::TripStatus;
use super::estimate::{coordinates, require_location, EstimateRequest};
use super::primitives::{Coordinates, FareId, PlaceName, ProductId, TripId};
use crate::{Error, Result};

/// A ride request (trip) as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique id of the request
    pub request_id: TripId,
    /// Product the ride was requested for
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Current status
    #[serde(default)]
    pub status: TripStatus,
    /// Assigned driver
    #[serde(default)]
    pub driver: Option<TripDriver>,
    /// Assigned vehicle
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    /// Current vehicle location
    #[serde(default)]
    pub location: Option<VehicleLocation>,
    /// Pickup point
    #[serde(default)]
    pub pickup: Option<Waypoint>,
    /// Destination point
    #[serde(default)]
    pub destination: Option<Waypoint>,
    /// Expected minutes until pickup
    #[serde(default)]
    pub eta: Option<i64>,
    /// Surge multiplier applied
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
    /// Whether the ride is shared with other riders
    #[serde(default)]
    pub shared: bool,
}

/// Driver assigned to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDriver {
    /// Driver's first name
    pub name: String,
    /// Phone number to call the driver
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Number to text the driver
    #[serde(default)]
    pub sms_number: Option<String>,
    /// Driver rating
    #[serde(default)]
    pub rating: Option<f64>,
    /// Photo of the driver
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// Vehicle assigned to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle make
    pub make: String,
    /// Vehicle model
    pub model: String,
    /// License plate
    pub license_plate: String,
    /// Photo of the vehicle
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// Position and heading of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleLocation {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Heading in degrees, 0 is north
    #[serde(default)]
    pub bearing: Option<f64>,
}

/// Pickup or destination point of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Minutes until the vehicle reaches this point
    #[serde(default)]
    pub eta: Option<i64>,
}

/// Parameters for requesting a ride.
///
/// Start and end are each given either as a saved place or as coordinates.
/// A `fare_id` from an upfront fare quote is required by
/// [`RidesService::request`](crate::api::RidesService::request);
/// [`RidesService::request_with_fare_prompt`](crate::api::RidesService::request_with_fare_prompt)
/// obtains one for you.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    /// Upfront fare id to lock the price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare_id: Option<FareId>,
    /// Product to request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
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
    /// Saved place to start from
    #[serde(rename = "start_place_id", default, skip_serializing_if = "Option::is_none")]
    pub start_place: Option<PlaceName>,
    /// Saved place to end at
    #[serde(rename = "end_place_id", default, skip_serializing_if = "Option::is_none")]
    pub end_place: Option<PlaceName>,
    /// Number of seats (shared products only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_count: Option<u32>,
    /// Payment method to charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    /// Confirmation id obtained after accepting surge pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_confirmation_id: Option<String>,
}

impl RideRequest {
    /// A ride between two saved places.
    pub fn between_places(start: PlaceName, end: PlaceName) -> Self {
        Self {
            start_place: Some(start),
            end_place: Some(end),
            ..Default::default()
        }
    }

    /// A ride between two coordinates.
    pub fn between(start: Coordinates, end: Coordinates) -> Self {
        Self {
            start_latitude: Some(start.latitude),
            start_longitude: Some(start.longitude),
            end_latitude: Some(end.latitude),
            end_longitude: Some(end.longitude),
            ..Default::default()
        }
    }

    /// Set the fare id.
    pub fn fare(mut self, fare_id: impl Into<FareId>) -> Self {
        self.fare_id = Some(fare_id.into());
        self
    }

    /// Set the product.
    pub fn product(mut self, product_id: impl Into<ProductId>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Check that start and end are both given.
    pub fn validate_endpoints(&self) -> Result<()> {
        let start = coordinates(self.start_latitude, self.start_longitude, "start")?;
        require_location(start, self.start_place, "start")?;
        let end = coordinates(self.end_latitude, self.end_longitude, "end")?;
        require_location(end, self.end_place, "end")
    }

    /// Check the request is complete enough to send.
    pub fn validate(&self) -> Result<()> {
        self.validate_endpoints()?;
        match &self.fare_id {
            Some(fare_id) => fare_id.validate(),
            None => Err(Error::InvalidInput(
                "ride requests need a fare id".to_string(),
            )),
        }
    }

    /// The upfront fare query for the same start and end.
    pub fn to_estimate_request(&self) -> EstimateRequest {
        EstimateRequest {
            start_latitude: self.start_latitude,
            start_longitude: self.start_longitude,
            end_latitude: self.end_latitude,
            end_longitude: self.end_longitude,
            start_place: self.start_place,
            end_place: self.end_place,
            product_id: self.product_id.clone(),
            seat_count: self.seat_count,
        }
    }
}

/// Receipt of a completed trip.
///
/// Amounts are preformatted by the API, including the currency symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Trip the receipt belongs to
    pub request_id: TripId,
    /// Subtotal, e.g. "$12.78"
    #[serde(default)]
    pub subtotal: Option<String>,
    /// Amount charged to the rider's payment method
    #[serde(default)]
    pub total_charged: Option<String>,
    /// Amount still owed
    #[serde(default)]
    pub total_owed: Option<String>,
    /// Total fare
    #[serde(default)]
    pub total_fare: Option<String>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Trip duration, e.g. "00:11:35"
    #[serde(default)]
    pub duration: Option<String>,
    /// Trip distance
    #[serde(default)]
    pub distance: Option<String>,
    /// Unit of `distance`
    #[serde(default)]
    pub distance_label: Option<String>,
}

/// Link to a live map of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMap {
    /// Trip the map belongs to
    pub request_id: TripId,
    /// URL of the map
    pub href: String,
}
