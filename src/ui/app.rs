use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "desktop")]
pub fn make_config() -> dioxus::desktop::Config {
    dioxus::desktop::Config::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> dioxus::desktop::WindowBuilder {
    dioxus::desktop::WindowBuilder::new()
        .with_title("Product Showcase")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
