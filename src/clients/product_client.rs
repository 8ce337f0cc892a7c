use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductId, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for the product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductId, ProductError, product);
impl_client_delete!(ProductClient, ProductId, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, params), fields(name = %params.name, price = params.price))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(ProductError::from)
    }

    /// Adds one to the durable buy count and returns the new value.
    #[instrument(skip(self))]
    pub async fn increment_buy_count(&self, id: ProductId) -> Result<u64, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::IncrementBuyCount).await {
            Ok(ProductActionResult::BuyCount(count)) => Ok(count),
            Err(e) => Err(ProductError::from(e)),
        }
    }
}
