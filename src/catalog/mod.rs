pub mod client;
pub mod loader;
pub mod models;
pub mod search;

pub use client::{CatalogError, ProductClient, PAGE_SIZE};
pub use loader::{load_products, LoadState};
pub use models::Product;
pub use search::filter_products;
