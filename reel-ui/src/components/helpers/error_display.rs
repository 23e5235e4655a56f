//! Error display component

use dioxus::prelude::*;

/// Banner shown in place of the content area when a fetch failed.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert",
            p { "{message}" }
        }
    }
}
