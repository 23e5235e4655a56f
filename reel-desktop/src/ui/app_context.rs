//! Backend service handles shared with the UI

use std::sync::Arc;

use reel_core::favorites::FavoritesStore;
use reel_core::tmdb::CatalogService;

/// Send-safe bundle of backend services handed to the dioxus context
/// provider. The reactive AppService is built from this inside the
/// component tree.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub store: Arc<dyn FavoritesStore>,
}
