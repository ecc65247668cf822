//! Estimates service: price, time and upfront fare quotes.

use std::sync::Arc;

use crate::client::{ClientInner, Page, Pages, PagesBuilder};
use crate::models::{EstimateRequest, PriceEstimate, TimeEstimate, UpfrontFare};
use crate::Result;

/// A page of price estimates.
pub type PriceEstimatesPage = Page<PriceEstimate>;

/// A page of time estimates.
pub type TimeEstimatesPage = Page<TimeEstimate>;

/// Service for price, time and upfront fare estimates.
///
/// Price and time estimates arrive as a single-page stream that can be
/// cancelled like any other.
///
/// # Example
///
/// ```no_run
/// use uber_rs::{Coordinates, EstimateRequest};
///
/// # async fn example(client: uber_rs::UberClient) -> uber_rs::Result<()> {
/// let request = EstimateRequest::between(
///     Coordinates::new(37.7752315, -122.418075),
///     Coordinates::new(37.7752415, -122.518075),
/// );
///
/// let mut pages = client.estimates().price(&request)?;
/// if let Some(page) = pages.next_page().await {
///     for estimate in page.into_result()? {
///         println!("{}: {}", estimate.display_name, estimate.estimate);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct EstimatesService {
    inner: Arc<ClientInner>,
}

impl EstimatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Estimate the price of each product between two coordinates.
    pub fn price(&self, request: &EstimateRequest) -> Result<Pages<PriceEstimate>> {
        request.validate_for_price()?;
        PagesBuilder::new(self.inner.clone(), "/v1.2/estimates/price")
            .single_shot()
            .build_with_query(Some(request.clone()))
    }

    /// Estimate the pickup time of each product at the start coordinates.
    pub fn time(&self, request: &EstimateRequest) -> Result<Pages<TimeEstimate>> {
        request.validate_for_time()?;
        PagesBuilder::new(self.inner.clone(), "/v1.2/estimates/time")
            .single_shot()
            .build_with_query(Some(request.clone()))
    }

    /// Quote a fixed fare for a ride.
    pub async fn upfront_fare(&self, request: &EstimateRequest) -> Result<UpfrontFare> {
        request.validate_for_upfront_fare()?;
        self.inner.post("/v1.2/requests/estimate", request).await
    }
}
