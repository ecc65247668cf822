//! Data models for the Uber API.
//!
//! This module contains the strongly-typed request and response structures
//! used by the services. Models are organized by domain:
//!
//! - [`primitives`] - Ids, saved places, coordinates and the environment
//! - [`enums`] - Trip, delivery and payment statuses
//! - [`trip`] - Ride requests, trips, receipts and maps
//! - [`estimate`] - Price, time and upfront fare estimates
//! - [`delivery`] - Delivery requests and deliveries
//! - [`driver`] - Driver profile, payments and trips
//! - [`profile`] - Rider profile, promotions, payment methods and history
//! - [`place`] - Saved places
//! - [`product`] - Products

pub mod primitives;
pub mod enums;
pub mod trip;
pub mod estimate;
pub mod delivery;
pub mod driver;
pub mod profile;
pub mod place;
pub mod product;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use trip::*;
pub use estimate::*;
pub use delivery::*;
pub use driver::*;
pub use profile::*;
pub use place::*;
pub use product::*;
