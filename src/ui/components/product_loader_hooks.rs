use crate::catalog::{load_products, LoadState, ProductClient};
use crate::config::Config;
use dioxus::prelude::*;
use tracing::{debug, info};

/// Hook that loads the catalog once when the calling component mounts.
/// Returns the load state signal, starting at `Loading`.
pub fn use_product_loader() -> Signal<LoadState> {
    let config = use_context::<Config>();
    let mut state = use_signal(LoadState::default);

    use_effect(move || {
        debug!("Starting product load effect");
        let client = ProductClient::from_config(&config);
        spawn(async move {
            state.set(LoadState::Loading);

            let settled = load_products(&client).await;
            if let Some(products) = settled.products() {
                info!("Loaded {} products", products.len());
            }
            state.set(settled);
        });
    });

    state
}
