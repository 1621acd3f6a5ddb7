use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

use super::showcase::ProductShowcase;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app-background", ProductShowcase {} }
    }
}
