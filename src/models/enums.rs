//! Enumeration types for the Uber API.
//!
//! Statuses reported by the API are open-ended; every enum here carries an
//! `Unknown` catch-all so new values don't break deserialization.

use serde::{Deserialize, Serialize};

/// Status of a ride request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// The request is matching to the most efficient available driver
    #[default]
    Processing,
    /// The request was unfulfilled because no drivers were available
    NoDriversAvailable,
    /// The request has been accepted by a driver and is en route
    Accepted,
    /// The driver has arrived or will be shortly
    Arriving,
    /// The request is en route from the start location to the end location
    InProgress,
    /// The request has been canceled by the driver
    DriverCanceled,
    /// The request has been canceled by the rider
    RiderCanceled,
    /// The request has been completed by the driver
    Completed,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

impl TripStatus {
    /// Returns `true` once the trip can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TripStatus::NoDriversAvailable
                | TripStatus::DriverCanceled
                | TripStatus::RiderCanceled
                | TripStatus::Completed
        )
    }
}

/// Status of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// The delivery is being matched to a courier
    #[default]
    Processing,
    /// No courier could be found
    NoCouriersAvailable,
    /// The courier is driving to the pickup
    EnRouteToPickup,
    /// The courier is at the pickup
    AtPickup,
    /// The courier is driving to the dropoff
    EnRouteToDropoff,
    /// The courier is at the dropoff
    AtDropoff,
    /// The delivery was completed
    Completed,
    /// The delivery was canceled by the client
    ClientCanceled,
    /// The courier is returning the items to the pickup
    Returning,
    /// The items were returned to the pickup
    Returned,
    /// The items could not be returned
    UnableToReturn,
    /// The items could not be delivered
    UnableToDeliver,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

/// Category of a driver payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCategory {
    /// Earnings from a trip fare
    Fare,
    /// Payment for a device
    DevicePayment,
    /// Payment for a vehicle
    VehiclePayment,
    /// Promotional earnings
    Promotion,
    /// Anything else
    Other,
    /// Unknown category
    #[serde(other)]
    Unknown,
}
