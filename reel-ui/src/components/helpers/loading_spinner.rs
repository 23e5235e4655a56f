//! Loading spinner component

use dioxus::prelude::*;

/// Centered spinner with an optional message, shown while a catalog
/// fetch is in flight.
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading movies...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "loading-indicator",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}
