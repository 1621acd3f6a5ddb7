use dioxus::prelude::*;

/// Full-height spinner shown while the catalog request is in flight
#[component]
pub fn ShowcaseLoading() -> Element {
    rsx! {
        div { class: "centered-screen",
            div { class: "spinner" }
            p { class: "loading-text", "Loading products..." }
        }
    }
}
