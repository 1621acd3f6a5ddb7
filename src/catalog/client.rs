use crate::catalog::models::{Product, ProductsResponse};
use crate::config::Config;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Number of products requested per load
pub const PAGE_SIZE: u32 = 12;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Any non-success status; the status itself is kept for logging only
    #[error("Failed to fetch products")]
    HttpStatus(StatusCode),
    #[error(transparent)]
    Request(#[from] ReqwestError),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct ProductClient {
    client: Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first page of the catalog (`limit` fixed at [`PAGE_SIZE`])
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);

        info!("📡 Catalog API: GET {} with limit={}", url, PAGE_SIZE);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", PAGE_SIZE)])
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("✗ Catalog API error: {}", status);
            return Err(CatalogError::HttpStatus(status));
        }

        // Decode separately so malformed bodies surface serde's message
        let body = response.text().await?;
        let listing: ProductsResponse = serde_json::from_str(&body)?;

        info!("✓ Catalog returned {} product(s)", listing.products.len());
        Ok(listing.products)
    }
}
