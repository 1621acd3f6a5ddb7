pub mod utils;
mod view;

pub use view::ProductCard;
