pub mod app;
pub mod app_context;
pub mod app_service;
pub mod components;
pub mod display_types;

pub use app::*;
pub use app_context::AppContext;
