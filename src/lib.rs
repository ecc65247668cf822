//! # uber-rs
//!
//! A typed, async Rust client for the Uber rides, deliveries and driver APIs.
//!
//! This crate covers ride requests and trips, price/time/upfront fare
//! estimates, deliveries, the driver's profile, payments and trips, and the
//! rider's profile, saved places, payment methods and history.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 bearer tokens, redacted from debug output
//! - **Rides**: Request rides with upfront fares, follow trips, get receipts and maps
//! - **Deliveries**: Request, track, cancel and list deliveries
//! - **Paginated streams**: List endpoints are walked by a background task and
//!   delivered page by page through a cancellable [`Pages`] stream
//! - **Sandbox mode**: Switch every request to the sandbox host with one call
//! - **Pluggable transport**: Replace the `reqwest` transport with your own
//!   [`Transport`] to add token refresh or serve fixtures in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use uber_rs::{Coordinates, EstimateRequest, UberClient};
//!
//! #[tokio::main]
//! async fn main() -> uber_rs::Result<()> {
//!     // Reads UBER_TOKEN_KEY and UBER_SANDBOX
//!     let client = UberClient::from_env()?;
//!
//!     // Who am I?
//!     let profile = client.me().profile().await?;
//!     println!("Hello {:?}", profile.first_name);
//!
//!     // Price estimates arrive as a single-page stream
//!     let request = EstimateRequest::between(
//!         Coordinates::new(37.7752315, -122.418075),
//!         Coordinates::new(37.7752415, -122.518075),
//!     );
//!     let estimates = client.estimates().price(&request)?.collect_items().await?;
//!     for estimate in estimates {
//!         println!("{}: {}", estimate.display_name, estimate.estimate);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Paginated Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use uber_rs::{PageQuery, UberClient};
//!
//! #[tokio::main]
//! async fn main() -> uber_rs::Result<()> {
//!     let client = UberClient::from_env()?;
//!
//!     let query = PageQuery::new()
//!         .with_limit_per_page(25)
//!         .with_max_pages(4)
//!         .with_throttle(Duration::from_millis(200));
//!     let mut pages = client.drivers().payments(Some(query))?;
//!
//!     while let Some(page) = pages.next_page().await {
//!         if let Some(err) = page.error {
//!             eprintln!("stopped at offset {}: {}", page.offset, err);
//!             break;
//!         }
//!         let total: rust_decimal::Decimal = page.items.iter().map(|p| p.amount).sum();
//!         println!("page {}: {}", page.page_number, total);
//!
//!         if total.is_zero() {
//!             // Nothing left worth reading
//!             pages.cancel();
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Delivery Example
//!
//! ```rust,no_run
//! use uber_rs::models::{Contact, DeliveryRequest, Endpoint, Item, Location};
//! use uber_rs::UberClient;
//!
//! #[tokio::main]
//! async fn main() -> uber_rs::Result<()> {
//!     let client = UberClient::from_env()?;
//!
//!     let endpoint = |company: &str, address: &str| Endpoint {
//!         contact: Some(Contact {
//!             company_name: Some(company.to_string()),
//!             ..Default::default()
//!         }),
//!         location: Some(Location {
//!             address: address.to_string(),
//!             country: "US".to_string(),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!
//!     let request = DeliveryRequest {
//!         pickup: Some(endpoint("Shop", "530 W 113th Street")),
//!         dropoff: Some(endpoint("Office", "685 Market St")),
//!         items: vec![Item {
//!             title: "Phone chargers".to_string(),
//!             quantity: 10,
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     };
//!
//!     let delivery = client.deliveries().request(&request).await?;
//!     println!("Delivery {} is {:?}", delivery.delivery_id, delivery.status);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{AuthFailure, Error, Result};
pub use models::{
    Coordinates, DeliveryId, DeliveryStatus, Environment, EstimateRequest, FareId,
    PaymentCategory, PlaceName, ProductId, RideRequest, TripId, TripStatus,
};
pub use client::{
    CancelHandle, ClientConfig, HttpRequest, HttpResponse, Page, PageQuery, PageRequest, Pages,
    ReqwestTransport, Transport, UberClient,
};
pub use api::{
    DeliveriesPage, DeliveryListQuery, DriverTripsPage, HistoryPage, PaymentsPage,
    PriceEstimatesPage, TimeEstimatesPage,
};
pub use auth::BearerToken;

/// Prelude module for convenient imports.
///
/// ```rust
/// use uber_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AuthFailure, Error, Result};
    pub use crate::models::{
        // Primitives
        Coordinates, DeliveryId, Environment, FareId, PlaceName, ProductId, TripId,
        // Enums
        DeliveryStatus, PaymentCategory, TripStatus,
        // Rides and estimates
        EstimateRequest, PriceEstimate, Receipt, RideRequest, TimeEstimate, Trip, TripMap,
        UpfrontFare,
        // Deliveries
        Delivery, DeliveryRequest,
        // Drivers
        DriverPayment, DriverProfile, DriverTrip,
        // Riders
        HistoryEntry, PaymentMethodListing, Place, PlaceParams, Product, Profile, PromoCode,
    };
    pub use crate::client::{CancelHandle, ClientConfig, Page, PageQuery, Pages, Transport, UberClient};
    pub use crate::api::DeliveryListQuery;
    pub use crate::auth::BearerToken;
}
