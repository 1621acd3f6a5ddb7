use serde::{Deserialize, Serialize};

/// A single catalog item as returned by the product listing API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// 0.0 to 5.0
    pub rating: f64,
    pub stock: u32,
    pub thumbnail: String,
}

/// Envelope of `GET /products`. Paging fields (`total`, `skip`, `limit`) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductsResponse {
    pub products: Vec<Product>,
}
