use dioxus::prelude::*;
use tracing::info;

use product_showcase::config::Config;
use product_showcase::ui::App;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level for this crate
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("product_showcase=info")),
        )
        .init();

    let config = Config::load();
    info!("Starting Product Showcase against {}", config.api_base_url);

    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::new()
            .with_cfg(product_showcase::ui::make_config())
            .with_context(config)
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        LaunchBuilder::new().with_context(config).launch(App);
    }
}
