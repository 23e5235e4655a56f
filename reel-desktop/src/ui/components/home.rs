//! Single-page browse screen
//!
//! Reads browse state from the app service and wires reel-ui's pure
//! components to its transitions.

use crate::ui::app_service::use_app;
use crate::ui::display_types::{details_from_detail, displayed_movies};
use dioxus::prelude::*;
use reel_core::browse::View;
use reel_ui::components::{
    ErrorDisplay, LoadingSpinner, MovieGrid, MovieModal, Pagination, SearchBar, Tab, ViewTabs,
};

const SEARCH_EMPTY: &str = "No movies found.";
const FAVORITES_EMPTY: &str = "No favorites yet. Tap the heart on any movie to keep it here.";

#[component]
pub fn Home() -> Element {
    let app = use_app();

    let state = app.state.read();
    let movies = displayed_movies(&state);
    let active_tab = match state.view {
        View::Search => Tab::Search,
        View::Favorites => Tab::Favorites,
    };
    let favorites_count = state.favorites.len();
    let page = state.page;
    let total_pages = state.total_pages;
    let loading = state.loading;
    let error = state.error.clone();
    let selected = state
        .selected
        .as_ref()
        .map(|d| details_from_detail(d, state.is_favorite(d.id)));
    drop(state);

    let empty_message = match active_tab {
        Tab::Search => SEARCH_EMPTY,
        Tab::Favorites => FAVORITES_EMPTY,
    };

    let on_search = {
        let app = app.clone();
        move |term: String| app.search(term)
    };
    let on_select_tab = {
        let app = app.clone();
        move |tab: Tab| {
            let view = match tab {
                Tab::Search => View::Search,
                Tab::Favorites => View::Favorites,
            };
            app.switch_view(view);
        }
    };
    let on_movie_click = {
        let app = app.clone();
        move |movie_id: u64| app.open_details(movie_id)
    };
    let on_toggle_favorite = {
        let app = app.clone();
        move |movie_id: u64| app.toggle_favorite(movie_id)
    };
    let on_modal_toggle = {
        let app = app.clone();
        move |movie_id: u64| app.toggle_favorite(movie_id)
    };
    let on_page = {
        let app = app.clone();
        move |page: u32| app.change_page(page)
    };
    let on_close = {
        let app = app.clone();
        move |_| app.close_details()
    };

    rsx! {
        main { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "reel" }
                SearchBar { on_search }
            }
            ViewTabs { active: active_tab, favorites_count, on_select: on_select_tab }
            if let Some(message) = error {
                ErrorDisplay { message }
            } else if loading {
                LoadingSpinner {}
            } else {
                MovieGrid {
                    movies,
                    empty_message: empty_message.to_string(),
                    on_movie_click,
                    on_toggle_favorite,
                }
                if active_tab == Tab::Search {
                    Pagination { page, total_pages, on_change: on_page }
                }
            }
            if let Some(details) = selected {
                MovieModal {
                    details,
                    on_close,
                    on_toggle_favorite: on_modal_toggle,
                }
            }
        }
    }
}
