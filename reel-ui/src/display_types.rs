//! Display types for UI components
//!
//! Lightweight, render-ready versions of the catalog records: URLs are
//! already assembled and numbers already formatted, so components stay
//! pure string-and-callback views.

/// Movie as shown on a result or favorite card.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Full poster image URL, if the catalog has one.
    pub poster_url: Option<String>,
    /// Release year extracted from the release date.
    pub year: Option<i32>,
    pub overview: String,
    /// Average vote, already formatted ("7.8").
    pub rating: String,
    pub is_favorite: bool,
}

/// Full movie record for the detail overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub release_date: Option<String>,
    pub overview: String,
    pub rating: String,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<String>,
    pub tagline: Option<String>,
    pub is_favorite: bool,
}
