use crate::catalog::client::ProductClient;
use crate::catalog::models::Product;
use tracing::{debug, error};

/// Status of the single catalog fetch. One variant at a time;
/// an attempt only ever moves from `Loading` to `Error` or `Loaded`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<Product>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded products; `None` until the load has succeeded
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            LoadState::Loaded(products) => Some(products),
            _ => None,
        }
    }
}

/// Run one load attempt and fold its outcome into the settled state.
/// All-or-nothing: any failure discards the response entirely.
pub async fn load_products(client: &ProductClient) -> LoadState {
    debug!("Loading products from {}", client.base_url());

    match client.fetch_products().await {
        Ok(products) => LoadState::Loaded(products),
        Err(e) => {
            error!("Failed to load products: {}", e);
            LoadState::Error(e.to_string())
        }
    }
}
