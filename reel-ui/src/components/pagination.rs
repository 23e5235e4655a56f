//! Pagination control

use dioxus::prelude::*;

/// Previous/next pager. Buttons disable at the bounds; the control
/// disappears entirely when there is at most one page.
#[component]
pub fn Pagination(page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "pagination",
            button {
                class: "pager-button",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Previous"
            }
            span { class: "pager-status", "Page {page} of {total_pages}" }
            button {
                class: "pager-button",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
