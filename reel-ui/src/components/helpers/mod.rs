//! Small shared view helpers

pub mod error_display;
pub mod loading_spinner;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
