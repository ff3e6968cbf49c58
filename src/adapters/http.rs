use crate::core::{ConfigProvider, Product, ProductCatalog, ProductId, Stock, StockOracle};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Storefront API client serving both `products/{id}` and `stock/{id}`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base_url()).with_timeout(config.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", url);
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CartError::UnexpectedStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ProductCatalog for ApiClient {
    async fn product(&self, product_id: ProductId) -> Result<Product> {
        self.get_json(&format!("products/{}", product_id)).await
    }
}

#[async_trait]
impl StockOracle for ApiClient {
    async fn stock(&self, product_id: ProductId) -> Result<Stock> {
        self.get_json(&format!("stock/{}", product_id)).await
    }
}
