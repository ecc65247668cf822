//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up trip, product, fare and delivery ids at compile time.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Fail with [`Error::InvalidInput`] if the id is blank.
            pub(crate) fn validate(&self) -> Result<()> {
                if self.0.trim().is_empty() {
                    return Err(Error::InvalidInput(format!("{} must not be blank", $what)));
                }
                Ok(())
            }

            /// The id escaped for use as one URL path segment.
            ///
            /// `.` and `..` survive escaping and would be resolved as dot
            /// segments, so they are rejected.
            #[allow(dead_code)]
            pub(crate) fn path_segment(&self) -> Result<Cow<'_, str>> {
                self.validate()?;
                if self.0 == "." || self.0 == ".." {
                    return Err(Error::InvalidInput(format!(
                        "{} must not be a dot segment",
                        $what
                    )));
                }
                Ok(urlencoding::encode(&self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a ride request (a trip).
    ///
    /// # Example
    ///
    /// ```
    /// use uber_rs::TripId;
    ///
    /// let trip = TripId::new("a1111c8c-c720-46c3-8534-2fcdd730040d");
    /// println!("Trip: {}", trip);
    /// ```
    TripId,
    "trip id"
);

string_id!(
    /// Identifier of a product (UberX, UberPOOL, ...).
    ProductId,
    "product id"
);

string_id!(
    /// Identifier of an upfront fare quote.
    FareId,
    "fare id"
);

string_id!(
    /// Identifier of a delivery.
    DeliveryId,
    "delivery id"
);

/// A saved place of the rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceName {
    /// The rider's home address.
    Home,
    /// The rider's work address.
    Work,
}

impl PlaceName {
    /// The place id as used in URLs and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceName::Home => "home",
            PlaceName::Work => "work",
        }
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "home" => Ok(PlaceName::Home),
            "work" => Ok(PlaceName::Work),
            other => Err(Error::InvalidInput(format!(
                "Unknown place: {:?}. Expected \"home\" or \"work\"",
                other
            ))),
        }
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both values are finite and within range.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidInput(format!(
                "Invalid latitude: {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidInput(format!(
                "Invalid longitude: {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Environment configuration for the Uber API.
///
/// Determines which API host to use - production or sandbox. Sandbox
/// requests behave exactly like production ones but never dispatch a real
/// driver or courier.
///
/// # Example
///
/// ```
/// use uber_rs::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - real rides and deliveries.
    #[default]
    Production,
    /// Sandbox environment for testing request flows.
    Sandbox,
}

impl Environment {
    /// Select the environment from a sandbox flag.
    pub fn from_sandbox(sandboxed: bool) -> Self {
        if sandboxed {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.uber.com",
            Environment::Sandbox => "https://sandbox-api.uber.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}
