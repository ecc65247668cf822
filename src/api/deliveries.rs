//! Deliveries service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{ClientInner, Page, PageQuery, Pages, PagesBuilder};
use crate::models::{Delivery, DeliveryId, DeliveryRequest, DeliveryStatus};
use crate::Result;

/// A page of deliveries.
pub type DeliveriesPage = Page<Delivery>;

/// Service for requesting and tracking deliveries.
///
/// # Example
///
/// ```no_run
/// use uber_rs::{DeliveryListQuery, DeliveryStatus, PageQuery};
///
/// # async fn example(client: uber_rs::UberClient) -> uber_rs::Result<()> {
/// let query = DeliveryListQuery {
///     page: PageQuery::new().with_limit_per_page(4).with_max_pages(2),
///     status: Some(DeliveryStatus::Completed),
/// };
///
/// let deliveries = client.deliveries().list(Some(query))?.collect_items().await?;
/// for delivery in deliveries {
///     println!("{}: {:?}", delivery.delivery_id, delivery.status);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DeliveriesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing deliveries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryListQuery {
    /// How to walk the pages
    pub page: PageQuery,
    /// Only list deliveries in this status
    pub status: Option<DeliveryStatus>,
}

#[derive(Debug, Clone, Serialize)]
struct StatusFilter {
    status: DeliveryStatus,
}

impl DeliveriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Request a delivery.
    pub async fn request(&self, request: &DeliveryRequest) -> Result<Delivery> {
        request.validate()?;
        self.inner.post("/v1/deliveries", request).await
    }

    /// Get a delivery by id.
    pub async fn get(&self, delivery_id: &DeliveryId) -> Result<Delivery> {
        let path = format!("/v1/deliveries/{}", delivery_id.path_segment()?);
        self.inner.get(&path).await
    }

    /// Cancel a delivery.
    pub async fn cancel(&self, delivery_id: &DeliveryId) -> Result<()> {
        let path = format!("/v1/deliveries/{}/cancel", delivery_id.path_segment()?);
        self.inner.post_empty(&path).await
    }

    /// Stream the deliveries of the account, newest first.
    pub fn list(&self, query: Option<DeliveryListQuery>) -> Result<Pages<Delivery>> {
        let query = query.unwrap_or_default();
        PagesBuilder::new(self.inner.clone(), "/v1/deliveries")
            .page_query(Some(query.page))
            .build_with_query(query.status.map(|status| StatusFilter { status }))
    }
}
