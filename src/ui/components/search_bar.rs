use dioxus::prelude::*;

/// Free-text filter input; every keystroke updates the search term
#[component]
pub fn SearchBar(search_term: Signal<String>) -> Element {
    let mut search_term = search_term;

    rsx! {
        input {
            class: "search-input",
            r#type: "text",
            placeholder: "🔍 Search products...",
            value: "{search_term}",
            oninput: move |event| search_term.set(event.value()),
        }
    }
}
