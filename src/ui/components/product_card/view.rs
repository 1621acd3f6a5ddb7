use crate::catalog::Product;
use dioxus::prelude::*;

use super::utils::CardDisplay;

/// Individual product card
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut hovered = use_signal(|| false);
    let display = CardDisplay::from(&product);

    let card_class = if hovered() {
        "product-card product-card-raised"
    } else {
        "product-card"
    };

    rsx! {
        div {
            class: "{card_class}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            img {
                class: "product-thumbnail",
                src: "{product.thumbnail}",
                alt: "{product.title}",
            }
            span { class: "category-badge", "{display.category}" }
            h3 { class: "product-title", "{display.title}" }
            p { class: "product-description", "{display.description}" }

            div { class: "product-footer",
                span { class: "product-price", "{display.price}" }
                span { class: "product-rating", "⭐ {display.rating}" }
            }

            if let Some(warning) = &display.stock_warning {
                p { class: "stock-warning", "{warning}" }
            }
        }
    }
}
