//! Movie grid component

use crate::components::movie_card::MovieCard;
use crate::display_types::Movie;
use dioxus::prelude::*;

/// Responsive grid of movie cards, with an empty-state message when there
/// is nothing to show.
#[component]
pub fn MovieGrid(
    movies: Vec<Movie>,
    empty_message: String,
    on_movie_click: EventHandler<u64>,
    on_toggle_favorite: EventHandler<u64>,
) -> Element {
    if movies.is_empty() {
        return rsx! {
            div { class: "empty-state", "{empty_message}" }
        };
    }

    rsx! {
        div { class: "movie-grid",
            for movie in movies {
                MovieCard {
                    key: "{movie.id}",
                    movie: movie.clone(),
                    on_click: on_movie_click,
                    on_toggle_favorite,
                }
            }
        }
    }
}
