//! Movie detail overlay

use crate::display_types::MovieDetails;
use dioxus::prelude::*;

/// Modal overlay with the full movie record. Clicking the backdrop or the
/// close button dismisses it; clicks inside the dialog do not.
#[component]
pub fn MovieModal(
    details: MovieDetails,
    on_close: EventHandler<()>,
    on_toggle_favorite: EventHandler<u64>,
) -> Element {
    let movie_id = details.id;
    let favorite_label = if details.is_favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
                div { class: "modal-layout",
                    if let Some(url) = &details.poster_url {
                        img { class: "modal-poster", src: "{url}", alt: "Poster for {details.title}" }
                    }
                    div { class: "modal-body",
                        h2 { class: "modal-title", "{details.title}" }
                        if let Some(tagline) = &details.tagline {
                            p { class: "modal-tagline", "{tagline}" }
                        }
                        div { class: "modal-meta",
                            if let Some(date) = &details.release_date {
                                span { "{date}" }
                            }
                            if let Some(runtime) = details.runtime_minutes {
                                span { "{runtime} min" }
                            }
                            span { "\u{2605} {details.rating}" }
                        }
                        if !details.genres.is_empty() {
                            div { class: "genre-chips",
                                for genre in &details.genres {
                                    span { class: "chip", "{genre}" }
                                }
                            }
                        }
                        p { class: "modal-overview", "{details.overview}" }
                        button {
                            class: "favorite-toggle",
                            onclick: move |_| on_toggle_favorite.call(movie_id),
                            "{favorite_label}"
                        }
                    }
                }
            }
        }
    }
}
