//! reel-ui - Shared UI types and components for reel
//!
//! Pure view components and the display types they render. No networking
//! and no storage: everything arrives as props and leaves via callbacks,
//! so the same components work against real or demo data.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
