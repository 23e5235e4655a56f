//! Browse state machine
//!
//! Pure transitions for the search/pagination/favorites controller. Side
//! effects (catalog fetches, store writes) are requested through the
//! returned plans and executed by the session or the UI effect layer, so
//! every transition here is testable without network or storage.

use tracing::{debug, warn};

use crate::favorites::Favorites;
use crate::tmdb::{MovieDetail, MoviePage, MovieSummary, TmdbError, TMDB_PAGE_CAP};

/// Top-level display mode: live catalog results or the favorites list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Search,
    Favorites,
}

/// A catalog fetch requested by a state transition.
///
/// Each accepted search, page change, or switch back to the search view
/// produces exactly one plan. The ticket identifies the fetch; a result
/// carrying a stale ticket is discarded instead of clobbering newer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    Search { term: String, page: u32, ticket: u64 },
    Popular { page: u32, ticket: u64 },
}

/// User-facing message for a failed list fetch.
pub const FETCH_ERROR: &str = "Failed to fetch movies.";
/// User-facing message for a failed detail fetch.
pub const DETAIL_ERROR: &str = "Failed to load movie details.";

/// All mutable state of the application controller.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    /// Current page of catalog results (search view only).
    pub movies: Vec<MovieSummary>,
    pub favorites: Favorites,
    pub search_term: String,
    pub page: u32,
    pub total_pages: u32,
    pub view: View,
    pub loading: bool,
    pub error: Option<String>,
    /// Movie open in the detail overlay, at most one.
    pub selected: Option<MovieDetail>,
    initialized: bool,
    ticket: u64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            favorites: Favorites::new(),
            search_term: String::new(),
            page: 1,
            total_pages: 0,
            view: View::Search,
            loading: false,
            error: None,
            selected: None,
            initialized: false,
            ticket: 0,
        }
    }

    /// Complete startup initialization with the favorites read from the
    /// store. Called exactly once by the effect layer; favorites writes
    /// are refused until it has run.
    pub fn finish_init(&mut self, favorites: Favorites) {
        self.favorites = favorites;
        self.initialized = true;
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    fn next_ticket(&mut self) -> u64 {
        self.ticket += 1;
        self.ticket
    }

    /// Mark a list fetch as started and build its plan from the current
    /// term and page. An empty term falls back to the popular listing.
    fn begin_fetch(&mut self) -> FetchPlan {
        self.loading = true;
        self.error = None;
        let ticket = self.next_ticket();
        if self.search_term.is_empty() {
            FetchPlan::Popular {
                page: self.page,
                ticket,
            }
        } else {
            FetchPlan::Search {
                term: self.search_term.clone(),
                page: self.page,
                ticket,
            }
        }
    }

    /// Set a new search term and reset to the first page.
    pub fn search(&mut self, term: impl Into<String>) -> FetchPlan {
        self.search_term = term.into();
        self.page = 1;
        self.begin_fetch()
    }

    /// Move to `new_page` if it is within `[1, total_pages]`; out-of-range
    /// requests change nothing and fetch nothing.
    pub fn change_page(&mut self, new_page: u32) -> Option<FetchPlan> {
        if new_page < 1 || new_page > self.total_pages {
            return None;
        }
        self.page = new_page;
        Some(self.begin_fetch())
    }

    /// Switch the display mode. Switching to Favorites drops the fetched
    /// list and never touches the catalog; switching back re-fetches with
    /// the current term and page.
    pub fn switch_view(&mut self, view: View) -> Option<FetchPlan> {
        self.view = view;
        match view {
            View::Favorites => {
                self.movies.clear();
                self.loading = false;
                self.error = None;
                // Invalidate any in-flight fetch so it cannot repopulate
                // the list behind the favorites view.
                self.next_ticket();
                None
            }
            View::Search => Some(self.begin_fetch()),
        }
    }

    /// Apply a finished list fetch. A stale ticket means a newer fetch or
    /// a view switch superseded this one; its result is dropped whole.
    pub fn apply_fetch(&mut self, ticket: u64, result: Result<MoviePage, TmdbError>) {
        if ticket != self.ticket {
            debug!("Discarding stale fetch result (ticket {})", ticket);
            return;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.movies = page.results;
                self.total_pages = page.total_pages.min(TMDB_PAGE_CAP);
            }
            Err(e) => {
                warn!("Movie list fetch failed: {}", e);
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
    }

    /// Note that a detail fetch is starting; clears any stale error.
    pub fn begin_details(&mut self) {
        self.error = None;
    }

    pub fn apply_details(&mut self, result: Result<MovieDetail, TmdbError>) {
        match result {
            Ok(detail) => self.selected = Some(detail),
            Err(e) => {
                warn!("Movie detail fetch failed: {}", e);
                self.selected = None;
                self.error = Some(DETAIL_ERROR.to_string());
            }
        }
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// Toggle membership in the favorites set. Returns true when the
    /// mutation must be written through to the store; always false before
    /// initialization completes, so an unloaded session can never clobber
    /// durable favorites with its empty default.
    pub fn toggle_favorite(&mut self, movie: MovieSummary) -> bool {
        if !self.initialized {
            warn!("Ignoring favorite toggle before favorites are loaded");
            return false;
        }
        self.favorites.toggle(movie);
        true
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(id)
    }

    /// The list the UI shows for the current view.
    pub fn displayed(&self) -> &[MovieSummary] {
        match self.view {
            View::Search => &self.movies,
            View::Favorites => self.favorites.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("movie-{id}"),
            poster_path: None,
            release_date: None,
            overview: String::new(),
            vote_average: 0.0,
        }
    }

    fn page_of(ids: &[u64], total_pages: u32) -> MoviePage {
        MoviePage {
            results: ids.iter().copied().map(movie).collect(),
            total_pages,
        }
    }

    #[test]
    fn search_resets_page_and_plans_search_endpoint() {
        let mut state = BrowseState::new();
        state.page = 4;
        state.total_pages = 10;

        let plan = state.search("dune");
        assert_eq!(state.page, 1);
        assert!(state.loading);
        assert!(state.error.is_none());
        match plan {
            FetchPlan::Search { term, page, .. } => {
                assert_eq!(term, "dune");
                assert_eq!(page, 1);
            }
            other => panic!("expected search plan, got {:?}", other),
        }
    }

    #[test]
    fn empty_term_plans_popular_listing() {
        let mut state = BrowseState::new();
        let plan = state.search("");
        assert!(matches!(plan, FetchPlan::Popular { page: 1, .. }));
    }

    #[test]
    fn change_page_rejects_out_of_bounds() {
        let mut state = BrowseState::new();
        state.total_pages = 1;
        let before = state.clone();

        assert!(state.change_page(0).is_none());
        assert!(state.change_page(2).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn change_page_in_bounds_plans_fetch() {
        let mut state = BrowseState::new();
        state.search_term = "dune".to_string();
        state.total_pages = 3;

        let plan = state.change_page(2).expect("page 2 of 3 is valid");
        assert_eq!(state.page, 2);
        assert!(matches!(plan, FetchPlan::Search { page: 2, .. }));
    }

    #[test]
    fn apply_fetch_replaces_movies_and_caps_total_pages() {
        let mut state = BrowseState::new();
        let plan = state.search("dune");
        let ticket = match plan {
            FetchPlan::Search { ticket, .. } => ticket,
            _ => unreachable!(),
        };

        state.apply_fetch(ticket, Ok(page_of(&[1, 2, 3], 33000)));
        assert_eq!(state.movies.len(), 3);
        assert_eq!(state.total_pages, TMDB_PAGE_CAP);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_fetch_sets_error_and_keeps_movies() {
        let mut state = BrowseState::new();
        let first = match state.search("dune") {
            FetchPlan::Search { ticket, .. } => ticket,
            _ => unreachable!(),
        };
        state.apply_fetch(first, Ok(page_of(&[1, 2], 3)));

        let second = match state.change_page(2).unwrap() {
            FetchPlan::Search { ticket, .. } => ticket,
            _ => unreachable!(),
        };
        state.apply_fetch(
            second,
            Err(TmdbError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        );

        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));
        assert_eq!(state.movies.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn stale_ticket_results_are_discarded() {
        let mut state = BrowseState::new();
        let slow = match state.search("alien") {
            FetchPlan::Search { ticket, .. } => ticket,
            _ => unreachable!(),
        };
        // A second search supersedes the first before it resolves.
        let fast = match state.search("blade runner") {
            FetchPlan::Search { ticket, .. } => ticket,
            _ => unreachable!(),
        };

        state.apply_fetch(fast, Ok(page_of(&[7], 1)));
        state.apply_fetch(slow, Ok(page_of(&[1, 2, 3], 9)));

        let ids: Vec<u64> = state.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![7]);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn switching_to_favorites_clears_list_and_suppresses_inflight_fetch() {
        let mut state = BrowseState::new();
        state.finish_init(Favorites::new());
        let ticket = match state.search("dune") {
            FetchPlan::Search { ticket, .. } => ticket,
            _ => unreachable!(),
        };

        assert!(state.switch_view(View::Favorites).is_none());
        assert!(state.movies.is_empty());
        assert!(!state.loading);

        // The in-flight search resolving now must not repopulate movies.
        state.apply_fetch(ticket, Ok(page_of(&[1, 2], 3)));
        assert!(state.movies.is_empty());
    }

    #[test]
    fn switching_back_to_search_refetches_current_term() {
        let mut state = BrowseState::new();
        state.search_term = "dune".to_string();
        state.page = 2;
        state.switch_view(View::Favorites);

        let plan = state.switch_view(View::Search).expect("search refetches");
        match plan {
            FetchPlan::Search { term, page, .. } => {
                assert_eq!(term, "dune");
                assert_eq!(page, 2);
            }
            other => panic!("expected search plan, got {:?}", other),
        }
    }

    #[test]
    fn displayed_follows_view() {
        let mut state = BrowseState::new();
        let mut favorites = Favorites::new();
        favorites.toggle(movie(9));
        state.finish_init(favorites);
        state.movies = vec![movie(1), movie(2)];

        assert_eq!(state.displayed().len(), 2);
        state.switch_view(View::Favorites);
        let ids: Vec<u64> = state.displayed().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![9]);
    }

    #[test]
    fn toggle_before_init_is_refused() {
        let mut state = BrowseState::new();
        assert!(!state.toggle_favorite(movie(5)));
        assert!(!state.is_favorite(5));

        state.finish_init(Favorites::new());
        assert!(state.toggle_favorite(movie(5)));
        assert!(state.is_favorite(5));
    }

    #[test]
    fn detail_fetch_failure_leaves_no_overlay_open() {
        let mut state = BrowseState::new();
        state.begin_details();
        state.apply_details(Err(TmdbError::Status(reqwest::StatusCode::NOT_FOUND)));
        assert!(state.selected.is_none());
        assert_eq!(state.error.as_deref(), Some(DETAIL_ERROR));
    }
}
