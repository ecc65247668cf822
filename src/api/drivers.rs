//! Drivers service: the authenticated driver's profile, payments and trips.

use std::sync::Arc;

use crate::client::{ClientInner, Page, PageQuery, Pages, PagesBuilder};
use crate::models::{DriverPayment, DriverProfile, DriverTrip};
use crate::Result;

/// A page of driver payments.
pub type PaymentsPage = Page<DriverPayment>;

/// A page of driver trips.
pub type DriverTripsPage = Page<DriverTrip>;

/// Service for driver (partner) information.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use uber_rs::PageQuery;
///
/// # async fn example(client: uber_rs::UberClient) -> uber_rs::Result<()> {
/// let mut pages = client.drivers().trips(Some(PageQuery::new().with_limit_per_page(50)))?;
///
/// while let Some(page) = pages.next().await {
///     println!("page {} has {} trips", page.page_number, page.items.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct DriversService {
    inner: Arc<ClientInner>,
}

impl DriversService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the driver's profile.
    pub async fn profile(&self) -> Result<DriverProfile> {
        self.inner.get("/v1/partners/me").await
    }

    /// Stream the driver's payments.
    pub fn payments(&self, query: Option<PageQuery>) -> Result<Pages<DriverPayment>> {
        PagesBuilder::new(self.inner.clone(), "/v1/partners/payments")
            .page_query(query)
            .build()
    }

    /// Stream the driver's trips.
    pub fn trips(&self, query: Option<PageQuery>) -> Result<Pages<DriverTrip>> {
        PagesBuilder::new(self.inner.clone(), "/v1/partners/trips")
            .page_query(query)
            .build()
    }
}
