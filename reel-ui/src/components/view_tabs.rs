//! View tabs component

use dioxus::prelude::*;

/// Which list the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Favorites,
}

/// Two-tab switch between live results and the favorites list.
#[component]
pub fn ViewTabs(active: Tab, favorites_count: usize, on_select: EventHandler<Tab>) -> Element {
    let tab_class = |tab: Tab| {
        if tab == active {
            "tab active"
        } else {
            "tab"
        }
    };

    rsx! {
        div { class: "view-tabs",
            button {
                class: tab_class(Tab::Search),
                onclick: move |_| on_select.call(Tab::Search),
                "Browse"
            }
            button {
                class: tab_class(Tab::Favorites),
                onclick: move |_| on_select.call(Tab::Favorites),
                "Favorites ({favorites_count})"
            }
        }
    }
}
