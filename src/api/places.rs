//! Places service: the rider's saved home and work addresses.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Place, PlaceName, PlaceParams};
use crate::Result;

/// Service for saved places.
pub struct PlacesService {
    inner: Arc<ClientInner>,
}

impl PlacesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the address of a saved place.
    pub async fn get(&self, place: PlaceName) -> Result<Place> {
        let path = format!("/v1.2/places/{}", place);
        self.inner.get(&path).await
    }

    /// Change the address of a saved place.
    pub async fn update(&self, params: &PlaceParams) -> Result<Place> {
        params.validate()?;
        let path = format!("/v1.2/places/{}", params.place);
        self.inner.put(&path, &params.body()).await
    }
}
