//! Search bar component

use dioxus::prelude::*;

/// Search input with its own draft state; emits the term on submit.
/// An empty submit is meaningful (it falls back to the popular listing),
/// so it is passed through unchanged.
#[component]
pub fn SearchBar(on_search: EventHandler<String>) -> Element {
    let mut term = use_signal(String::new);

    rsx! {
        form {
            class: "search-bar",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_search.call(term());
            },
            input {
                r#type: "text",
                value: "{term}",
                placeholder: "Search movies...",
                oninput: move |e| term.set(e.value()),
            }
        }
    }
}
