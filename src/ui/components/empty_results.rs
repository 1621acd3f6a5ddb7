use dioxus::prelude::*;

#[component]
pub fn EmptyResults() -> Element {
    rsx! {
        div { class: "empty-results",
            p { class: "empty-results-title", "😢 No products found" }
            p { class: "empty-results-hint", "Try another search term" }
        }
    }
}
