//! Rides service: ride requests and trips.

use std::sync::Arc;

use super::EstimatesService;
use crate::client::ClientInner;
use crate::models::{Receipt, RideRequest, Trip, TripId, TripMap, UpfrontFare};
use crate::{Error, Result};

/// Service for requesting rides and following trips.
///
/// # Example
///
/// ```no_run
/// use uber_rs::{PlaceName, RideRequest};
///
/// # async fn example(client: uber_rs::UberClient) -> uber_rs::Result<()> {
/// let request = RideRequest::between_places(PlaceName::Home, PlaceName::Work);
///
/// // Quote a fare, accept it, then request the ride
/// let trip = client
///     .rides()
///     .request_with_fare_prompt(&request, |fare| {
///         println!("Quoted: {:?}", fare.fare.as_ref().map(|f| &f.display));
///         Ok(())
///     })
///     .await?;
/// println!("Requested {}", trip.request_id);
/// # Ok(())
/// # }
/// ```
pub struct RidesService {
    inner: Arc<ClientInner>,
}

impl RidesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the rider's ongoing trip.
    pub async fn current(&self) -> Result<Trip> {
        self.inner.get("/v1.2/requests/current").await
    }

    /// Get a trip by id.
    pub async fn get(&self, trip_id: &TripId) -> Result<Trip> {
        let path = format!("/v1.2/requests/{}", trip_id.path_segment()?);
        self.inner.get(&path).await
    }

    /// Request a ride.
    ///
    /// The request must carry a `fare_id` from an upfront fare quote; use
    /// [`request_with_fare_prompt`](Self::request_with_fare_prompt) to get one.
    pub async fn request(&self, request: &RideRequest) -> Result<Trip> {
        request.validate()?;
        self.inner.post("/v1.2/requests", request).await
    }

    /// Request a ride, quoting a fare first if the request has none.
    ///
    /// The quoted [`UpfrontFare`] is handed to `prompt`. Returning an error
    /// from `prompt` (conventionally [`Error::FareDeclined`]) aborts without
    /// requesting the ride. A quote that comes back with surge details instead
    /// of a fare fails with [`Error::FareDeclined`] without prompting.
    pub async fn request_with_fare_prompt<F>(&self, request: &RideRequest, prompt: F) -> Result<Trip>
    where
        F: FnOnce(&UpfrontFare) -> Result<()>,
    {
        if request.fare_id.is_some() {
            return self.request(request).await;
        }
        request.validate_endpoints()?;

        let quote = EstimatesService::new(self.inner.clone())
            .upfront_fare(&request.to_estimate_request())
            .await?;
        let fare_id = match &quote.fare {
            Some(fare) => fare.fare_id.clone(),
            None => {
                return Err(Error::FareDeclined(
                    "no upfront fare was quoted (surge confirmation required)".to_string(),
                ))
            }
        };

        prompt(&quote)?;
        tracing::debug!(%fare_id, "upfront fare accepted");

        let mut request = request.clone();
        request.fare_id = Some(fare_id);
        self.request(&request).await
    }

    /// Get the receipt of a completed trip.
    pub async fn receipt(&self, trip_id: &TripId) -> Result<Receipt> {
        let path = format!("/v1.2/requests/{}/receipt", trip_id.path_segment()?);
        self.inner.get(&path).await
    }

    /// Get a link to a live map of a trip.
    pub async fn map(&self, trip_id: &TripId) -> Result<TripMap> {
        let path = format!("/v1.2/requests/{}/map", trip_id.path_segment()?);
        self.inner.get(&path).await
    }
}
