pub mod app;
pub mod empty_results;
pub mod error;
pub mod loading;
pub mod product_card;
pub mod product_loader_hooks;
pub mod search_bar;
pub mod showcase;

pub use app::App;
pub use product_card::ProductCard;
pub use product_loader_hooks::use_product_loader;
pub use showcase::ProductShowcase;
