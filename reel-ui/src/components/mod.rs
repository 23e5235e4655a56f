//! Shared UI components

pub mod helpers;
pub mod movie_card;
pub mod movie_grid;
pub mod movie_modal;
pub mod pagination;
pub mod search_bar;
pub mod view_tabs;

pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use movie_card::MovieCard;
pub use movie_grid::MovieGrid;
pub use movie_modal::MovieModal;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use view_tabs::{Tab, ViewTabs};
