//! Headless browse controller
//!
//! Owns the browse state and executes its fetch plans against the
//! catalog, with write-through favorites persistence. The desktop app
//! drives the same state machine through its reactive effect layer; this
//! session is the canonical controller used headless and in tests.

use std::sync::Arc;

use tracing::{info, warn};

use crate::browse::{BrowseState, FetchPlan, View};
use crate::favorites::{Favorites, FavoritesStore, FAVORITES_KEY};
use crate::tmdb::{CatalogService, MovieSummary};

pub struct BrowseSession {
    state: BrowseState,
    catalog: Arc<dyn CatalogService>,
    store: Arc<dyn FavoritesStore>,
}

impl BrowseSession {
    pub fn new(catalog: Arc<dyn CatalogService>, store: Arc<dyn FavoritesStore>) -> Self {
        Self {
            state: BrowseState::new(),
            catalog,
            store,
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Load the persisted favorites. Runs once; later calls are no-ops.
    /// A failed or malformed read degrades to the empty set.
    pub fn initialize(&mut self) {
        if self.state.initialized() {
            return;
        }
        let stored = match self.store.load(FAVORITES_KEY) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read favorites store: {}", e);
                None
            }
        };
        let favorites = Favorites::from_stored(stored.as_deref());
        info!("Loaded {} favorite(s)", favorites.len());
        self.state.finish_init(favorites);
    }

    pub async fn search(&mut self, term: impl Into<String>) {
        let plan = self.state.search(term);
        self.run_plan(plan).await;
    }

    pub async fn change_page(&mut self, new_page: u32) {
        if let Some(plan) = self.state.change_page(new_page) {
            self.run_plan(plan).await;
        }
    }

    pub async fn switch_view(&mut self, view: View) {
        if let Some(plan) = self.state.switch_view(view) {
            self.run_plan(plan).await;
        }
    }

    async fn run_plan(&mut self, plan: FetchPlan) {
        let (ticket, result) = match plan {
            FetchPlan::Search { term, page, ticket } => {
                (ticket, self.catalog.search_movies(&term, page).await)
            }
            FetchPlan::Popular { page, ticket } => {
                (ticket, self.catalog.popular_movies(page).await)
            }
        };
        self.state.apply_fetch(ticket, result);
    }

    pub async fn open_details(&mut self, movie_id: u64) {
        self.state.begin_details();
        let result = self.catalog.movie_details(movie_id).await;
        self.state.apply_details(result);
    }

    pub fn close_details(&mut self) {
        self.state.close_details();
    }

    /// Toggle a favorite and write the whole list through to the store.
    /// Refused (and not persisted) before `initialize` has run.
    pub fn toggle_favorite(&mut self, movie: MovieSummary) {
        if !self.state.toggle_favorite(movie) {
            return;
        }
        self.persist_favorites();
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.state.is_favorite(id)
    }

    pub fn displayed(&self) -> &[MovieSummary] {
        self.state.displayed()
    }

    fn persist_favorites(&self) {
        let bytes = match self.state.favorites.to_bytes() {
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
}
