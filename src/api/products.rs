//! Products service.

use std::sync::Arc;

use crate::client::{ClientInner, ListResponse};
use crate::models::{Coordinates, Product, ProductId};
use crate::Result;

/// Service for the products available at a location.
///
/// # Example
///
/// ```no_run
/// use uber_rs::Coordinates;
///
/// # async fn example(client: uber_rs::UberClient) -> uber_rs::Result<()> {
/// let products = client
///     .products()
///     .list(&Coordinates::new(37.7752315, -122.418075))
///     .await?;
/// for product in products {
///     println!("{}: {:?}", product.display_name, product.capacity);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the products available at a location.
    pub async fn list(&self, location: &Coordinates) -> Result<Vec<Product>> {
        location.validate()?;
        let response: ListResponse<Product> =
            self.inner.get_with_query("/v1.2/products", location).await?;
        Ok(response.items)
    }

    /// Get a product by id.
    pub async fn get(&self, product_id: &ProductId) -> Result<Product> {
        let path = format!("/v1.2/products/{}", product_id.path_segment()?);
        self.inner.get(&path).await
    }
}
