use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::ProductError;
use crate::actor_framework::ResourceClient;
use crate::report_sync::ProductService;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(product).await.map_err(ProductError::from)
    }

    #[instrument(skip(self, patch), fields(product_id = %id))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!(?patch, "Sending request");
        self.inner.update(id, patch).await.map_err(ProductError::from)
    }
}

#[async_trait]
impl ProductService for ProductClient {
    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list_products().await
    }

    async fn update(&self, product: Product) -> Result<(), ProductError> {
        let patch = ProductPatch::from(&product);
        self.update_product(product.id, patch).await.map(|_| ())
    }
}
