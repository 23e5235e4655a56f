//! Reactive glue between the browse state machine and the dioxus runtime.
//!
//! All state transitions run synchronously against a [`Signal`]; any
//! [`FetchPlan`] they hand back is executed on a spawned task so no write
//! lock is ever held across an await point. Responses re-enter the state
//! through `apply_fetch`, which discards anything stale by ticket.

use std::sync::Arc;

use dioxus::prelude::*;
use reel_core::browse::{BrowseState, FetchPlan, View};
use reel_core::favorites::{Favorites, FavoritesStore, FAVORITES_KEY};
use reel_core::tmdb::{CatalogService, MovieSummary};
use tracing::{info, warn};

use crate::ui::app_context::AppContext;

#[derive(Clone)]
pub struct AppService {
    pub state: Signal<BrowseState>,
    catalog: Arc<dyn CatalogService>,
    store: Arc<dyn FavoritesStore>,
}

/// Grab the AppService provided at the top of the component tree.
pub fn use_app() -> AppService {
    use_context::<AppService>()
}

impl AppService {
    pub fn new(context: &AppContext) -> Self {
        Self {
            state: Signal::new(BrowseState::new()),
            catalog: context.catalog.clone(),
            store: context.store.clone(),
        }
    }

    /// Load persisted favorites and kick off the initial popular fetch.
    /// Runs once from a `use_hook` at app start.
    pub fn initialize(&self) {
        let mut state = self.state;
        if state.peek().initialized() {
            return;
        }

        let stored = match self.store.load(FAVORITES_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read favorites store: {}", e);
                None
            }
        };
        let favorites = Favorites::from_stored(stored.as_deref());
        info!("Loaded {} favorite(s)", favorites.len());

        let plan = {
            let mut s = state.write();
            s.finish_init(favorites);
            s.search(String::new())
        };
        self.execute(plan);
    }

    pub fn search(&self, term: String) {
        let mut state = self.state;
        let plan = state.write().search(term);
        self.execute(plan);
    }

    pub fn change_page(&self, page: u32) {
        let mut state = self.state;
        let plan = state.write().change_page(page);
        if let Some(plan) = plan {
            self.execute(plan);
        }
    }

    pub fn switch_view(&self, view: View) {
        let mut state = self.state;
        let plan = state.write().switch_view(view);
        if let Some(plan) = plan {
            self.execute(plan);
        }
    }

    fn execute(&self, plan: FetchPlan) {
        let catalog = self.catalog.clone();
        let mut state = self.state;
        spawn(async move {
            match plan {
                FetchPlan::Search { term, page, ticket } => {
                    let result = catalog.search_movies(&term, page).await;
                    state.write().apply_fetch(ticket, result);
                }
                FetchPlan::Popular { page, ticket } => {
                    let result = catalog.popular_movies(page).await;
                    state.write().apply_fetch(ticket, result);
                }
            }
        });
    }

    pub fn open_details(&self, movie_id: u64) {
        let catalog = self.catalog.clone();
        let mut state = self.state;
        state.write().begin_details();
        spawn(async move {
            let result = catalog.movie_details(movie_id).await;
            state.write().apply_details(result);
        });
    }

    pub fn close_details(&self) {
        let mut state = self.state;
        state.write().close_details();
    }

    /// Flip favorite membership for a movie visible anywhere in the UI
    /// (grid, favorites list, or the open detail modal), then write the
    /// whole set back through the store.
    pub fn toggle_favorite(&self, movie_id: u64) {
        let mut state = self.state;
        let movie = Self::resolve_summary(&state.peek(), movie_id);
        let Some(movie) = movie else {
            warn!("Toggle requested for unknown movie id {}", movie_id);
            return;
        };

        let accepted = state.write().toggle_favorite(movie);
        if accepted {
            self.persist_favorites(&state.peek());
        }
    }

    fn resolve_summary(state: &BrowseState, movie_id: u64) -> Option<MovieSummary> {
        state
            .movies
            .iter()
            .chain(state.favorites.iter())
            .find(|m| m.id == movie_id)
            .cloned()
            .or_else(|| {
                state
                    .selected
                    .as_ref()
                    .filter(|d| d.id == movie_id)
                    .map(|d| d.summary())
            })
    }

    fn persist_favorites(&self, state: &BrowseState) {
        let bytes = match state.favorites.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to encode favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.save(FAVORITES_KEY, &bytes) {
            warn!("Failed to persist favorites: {}", e);
        }
    }

    pub fn is_favorite(&self, movie_id: u64) -> bool {
        self.state.read().is_favorite(movie_id)
    }
}
