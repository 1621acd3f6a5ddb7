use crate::catalog::{filter_products, LoadState, Product};
use dioxus::prelude::*;
use tracing::debug;

use super::empty_results::EmptyResults;
use super::error::ShowcaseError;
use super::loading::ShowcaseLoading;
use super::product_card::ProductCard;
use super::product_loader_hooks::use_product_loader;
use super::search_bar::SearchBar;

/// Header line above the grid
pub fn showing_message(shown: usize, total: usize) -> String {
    format!("Showing {} of {} products", shown, total)
}

/// Product showcase page: loading, error or the searchable grid
#[component]
pub fn ProductShowcase() -> Element {
    debug!("Component rendering");
    let load_state = use_product_loader();
    let search_term = use_signal(String::new);

    rsx! {
        ShowcaseBody { state: load_state(), search_term }
    }
}

/// Picks the screen for the current load state
#[component]
fn ShowcaseBody(state: LoadState, search_term: Signal<String>) -> Element {
    match state {
        LoadState::Loading => rsx! {
            ShowcaseLoading {}
        },
        LoadState::Error(message) => rsx! {
            ShowcaseError { message }
        },
        LoadState::Loaded(products) => rsx! {
            ProductCatalog { products, search_term }
        },
    }
}

#[component]
fn ProductCatalog(products: Vec<Product>, search_term: Signal<String>) -> Element {
    let term = search_term();
    let filtered: Vec<Product> = filter_products(&products, &term)
        .into_iter()
        .cloned()
        .collect();
    let summary = showing_message(filtered.len(), products.len());

    rsx! {
        div { class: "showcase",
            h1 { class: "showcase-title", "🛍️ Product Showcase" }
            p { class: "showcase-summary", "{summary}" }

            SearchBar { search_term }

            if filtered.is_empty() {
                EmptyResults {}
            } else {
                ProductGrid { products: filtered.clone() }
            }
        }
    }
}

/// Responsive grid of product cards
#[component]
fn ProductGrid(products: Vec<Product>) -> Element {
    rsx! {
        div { class: "product-grid",
            for product in products {
                ProductCard { key: "{product.id}", product: product.clone() }
            }
        }
    }
}
