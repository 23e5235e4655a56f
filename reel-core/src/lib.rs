//! reel-core - headless domain logic for the reel movie browser
//!
//! Contains the TMDB catalog client, the favorites store, and the browse
//! controller. No UI dependency; everything here runs against the
//! in-memory store and a fake catalog in tests.

pub mod browse;
pub mod config;
pub mod favorites;
pub mod session;
pub mod tmdb;
