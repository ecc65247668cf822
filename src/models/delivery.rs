//! Delivery models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::DeliveryStatus;
use super::primitives::DeliveryId;
use crate::{Error, Result};

/// Parameters for requesting a delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    /// Quote to lock the delivery fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    /// Caller's own reference for the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_reference_id: Option<String>,
    /// Items to deliver
    #[serde(default)]
    pub items: Vec<Item>,
    /// Where the courier collects the items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<Endpoint>,
    /// Where the courier drops the items off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<Endpoint>,
    /// Whether any item contains alcohol
    #[serde(default)]
    pub includes_alcohol: bool,
}

impl DeliveryRequest {
    /// Check the request is complete enough to send.
    ///
    /// Both endpoints need a contact with a name and a location with a
    /// primary address and a country, and at least one item must be listed.
    pub fn validate(&self) -> Result<()> {
        let pickup = self
            .pickup
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("delivery needs a pickup".to_string()))?;
        pickup.validate("pickup")?;

        let dropoff = self
            .dropoff
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("delivery needs a dropoff".to_string()))?;
        dropoff.validate("dropoff")?;

        if self.items.is_empty() {
            return Err(Error::InvalidInput(
                "delivery needs at least one item".to_string(),
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(Error::InvalidInput(format!("item #{} needs a title", i)));
            }
            if item.quantity == 0 {
                return Err(Error::InvalidInput(format!(
                    "item #{} needs a positive quantity",
                    i
                )));
            }
        }
        Ok(())
    }
}

/// Pickup or dropoff of a delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Address of the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Person or business at the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// Instructions for the courier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Whether a signature is required
    #[serde(default)]
    pub signature_required: bool,
}

impl Endpoint {
    fn validate(&self, which: &str) -> Result<()> {
        let contact = self
            .contact
            .as_ref()
            .ok_or_else(|| Error::InvalidInput(format!("{} needs a contact", which)))?;
        let named = [&contact.first_name, &contact.company_name]
            .iter()
            .any(|name| name.as_deref().is_some_and(|n| !n.trim().is_empty()));
        if !named {
            return Err(Error::InvalidInput(format!(
                "{} contact needs a first name or a company name",
                which
            )));
        }

        let location = self
            .location
            .as_ref()
            .ok_or_else(|| Error::InvalidInput(format!("{} needs a location", which)))?;
        if location.address.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "{} location needs a primary address",
                which
            )));
        }
        if location.country.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "{} location needs a country",
                which
            )));
        }
        Ok(())
    }
}

/// Street address of an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Primary address line
    #[serde(default)]
    pub address: String,
    /// Secondary address line (floor, suite, ...)
    #[serde(rename = "address_2", default, skip_serializing_if = "Option::is_none")]
    pub secondary_address: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country: String,
    /// Latitude, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Contact at an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Business name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Send status updates by email
    #[serde(default)]
    pub send_email_notifications: bool,
    /// Send status updates by SMS
    #[serde(default)]
    pub send_sms_notifications: bool,
}

/// A phone number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    /// Number including country code
    pub number: String,
    /// Whether the number accepts text messages
    #[serde(default)]
    pub sms_enabled: bool,
}

/// One item of a delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// What the item is
    pub title: String,
    /// How many of it
    pub quantity: u32,
    /// Whether the courier should handle it with care
    #[serde(default)]
    pub is_fragile: bool,
    /// Price per unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// ISO 4217 currency code of `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// A delivery as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Unique id of the delivery
    pub delivery_id: DeliveryId,
    /// Current status
    #[serde(default)]
    pub status: DeliveryStatus,
    /// Caller's own reference for the order
    #[serde(default)]
    pub order_reference_id: Option<String>,
    /// Quote the delivery was created from
    #[serde(default)]
    pub quote_id: Option<String>,
    /// Delivery fee
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// ISO 4217 currency code of `fee`
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Pickup endpoint
    #[serde(default)]
    pub pickup: Option<Endpoint>,
    /// Dropoff endpoint
    #[serde(default)]
    pub dropoff: Option<Endpoint>,
    /// Items being delivered
    #[serde(default)]
    pub items: Vec<Item>,
    /// Courier assigned to the delivery
    #[serde(default)]
    pub courier: Option<Courier>,
    /// When the delivery was created
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Courier assigned to a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    /// Courier's name
    pub name: String,
    /// Phone number to reach the courier
    #[serde(default)]
    pub phone: Option<String>,
    /// Vehicle type, e.g. "car" or "bicycle"
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Current position
    #[serde(default)]
    pub location: Option<CourierLocation>,
}

/// Position of a courier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourierLocation {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Heading in degrees, 0 is north
    #[serde(default)]
    pub bearing: Option<f64>,
}
