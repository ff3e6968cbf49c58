use crate::domain::model::{Product, ProductId, Stock};
use crate::domain::notice::Notice;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key/value slot store holding serialized strings.
pub trait Storage: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Product>;
}

#[async_trait]
pub trait StockOracle: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock>;
}

/// Out-of-band channel the cart store reports outcomes through.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
