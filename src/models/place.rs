//! Saved place models.

use serde::{Deserialize, Serialize};

use super::primitives::PlaceName;
use crate::{Error, Result};

/// The address of a saved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Full address
    pub address: String,
}

/// Parameters for updating a saved place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceParams {
    /// Which place to update
    pub place: PlaceName,
    /// New address
    pub address: String,
}

impl PlaceParams {
    /// Create parameters for updating `place` to `address`.
    pub fn new(place: PlaceName, address: impl Into<String>) -> Self {
        Self {
            place,
            address: address.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "{} needs a non-blank address",
                self.place
            )));
        }
        Ok(())
    }

    pub(crate) fn body(&self) -> Place {
        Place {
            address: self.address.clone(),
        }
    }
}
