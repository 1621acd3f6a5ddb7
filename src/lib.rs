// Library exports for integration tests and reusable components

pub mod catalog;
pub mod config;
pub mod ui;

pub use config::Config;
