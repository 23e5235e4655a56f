//! Movie card component - pure view with callbacks

use crate::display_types::Movie;
use dioxus::prelude::*;

/// Individual movie card
///
/// Poster, title, year and rating with a favorite toggle in the corner.
/// Opening the detail overlay goes through `on_click`; the toggle stops
/// propagation so it never opens the overlay as a side effect.
#[component]
pub fn MovieCard(
    movie: Movie,
    on_click: EventHandler<u64>,
    on_toggle_favorite: EventHandler<u64>,
) -> Element {
    let movie_id = movie.id;
    let favorite_class = if movie.is_favorite {
        "favorite-button active"
    } else {
        "favorite-button"
    };
    let heart = if movie.is_favorite { "\u{2665}" } else { "\u{2661}" };

    rsx! {
        div {
            class: "movie-card",
            "data-testid": "movie-card",
            onclick: move |_| on_click.call(movie_id),
            div { class: "poster-frame",
                if let Some(url) = &movie.poster_url {
                    img {
                        src: "{url}",
                        alt: "Poster for {movie.title}",
                        loading: "lazy",
                    }
                } else {
                    span { class: "poster-placeholder", "No poster" }
                }
                button {
                    class: "{favorite_class}",
                    "aria-label": "Toggle favorite",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_toggle_favorite.call(movie_id);
                    },
                    "{heart}"
                }
            }
            div { class: "card-body",
                h3 { class: "card-title", title: "{movie.title}", "{movie.title}" }
                div { class: "card-meta",
                    if let Some(year) = movie.year {
                        span { "{year}" }
                    }
                    span { class: "card-rating", "\u{2605} {movie.rating}" }
                }
            }
        }
    }
}
