use dioxus::prelude::*;
use tracing::{info, warn};

/// Message line under the error heading
pub fn error_line(message: &str) -> String {
    format!("Error: {}", message)
}

/// Error screen with a retry button that reloads the whole application
#[component]
pub fn ShowcaseError(message: String) -> Element {
    let line = error_line(&message);

    rsx! {
        div { class: "error-screen",
            h1 { class: "error-icon", "❌" }
            h2 { class: "error-heading", "Oops! Something went wrong" }
            p { class: "error-message", "{line}" }
            button {
                class: "retry-button",
                onclick: move |_| {
                    info!("Retry requested, reloading application");
                    // Full reset: every piece of state is rebuilt from scratch
                    let reload = document::eval("window.location.reload();");
                    spawn(async move {
                        if let Err(e) = reload.await {
                            warn!("Failed to reload application: {:?}", e);
                        }
                    });
                },
                "Try Again"
            }
        }
    }
}
