use std::future::Future;

use reqwest::Client;

use crate::{error::CatalogError, models::Product};

/// Read-only source of the full product list.
pub trait CatalogSource: Send + Sync {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

/// Catalog served over HTTP as a JSON array of products.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        // No request timeout: a stalled catalog keeps the listing in `loading`.
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::info!(url = %self.url, "fetching catalog");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;
        Ok(products)
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}
