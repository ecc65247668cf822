//! API service modules for Uber endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Uber API.

mod deliveries;
mod drivers;
mod estimates;
mod me;
mod places;
mod products;
mod rides;

pub use deliveries::{DeliveriesPage, DeliveriesService, DeliveryListQuery};
pub use drivers::{DriverTripsPage, DriversService, PaymentsPage};
pub use estimates::{EstimatesService, PriceEstimatesPage, TimeEstimatesPage};
pub use me::{HistoryPage, MeService};
pub use places::PlacesService;
pub use products::ProductsService;
pub use rides::RidesService;
