//! Conversions from core catalog types to UI display types

use chrono::NaiveDate;
use reel_core::browse::BrowseState;
use reel_core::tmdb::{self, MovieDetail, MovieSummary};
use reel_ui::display_types::{Movie, MovieDetails};

const GRID_POSTER_SIZE: &str = "w342";
const MODAL_POSTER_SIZE: &str = "w500";

pub fn movie_from_summary(summary: &MovieSummary, is_favorite: bool) -> Movie {
    Movie {
        id: summary.id,
        title: summary.title.clone(),
        poster_url: summary
            .poster_path
            .as_deref()
            .map(|p| tmdb::poster_url(p, GRID_POSTER_SIZE)),
        year: summary.release_date.as_deref().and_then(release_year),
        overview: summary.overview.clone(),
        rating: format_rating(summary.vote_average),
        is_favorite,
    }
}

pub fn details_from_detail(detail: &MovieDetail, is_favorite: bool) -> MovieDetails {
    MovieDetails {
        id: detail.id,
        title: detail.title.clone(),
        poster_url: detail
            .poster_path
            .as_deref()
            .map(|p| tmdb::poster_url(p, MODAL_POSTER_SIZE)),
        release_date: detail.release_date.clone(),
        overview: detail.overview.clone(),
        rating: format_rating(detail.vote_average),
        runtime_minutes: detail.runtime,
        genres: detail.genres.iter().map(|g| g.name.clone()).collect(),
        tagline: detail
            .tagline
            .as_ref()
            .filter(|t| !t.trim().is_empty())
            .cloned(),
        is_favorite,
    }
}

/// Movies for the current view, with favorite flags resolved against the
/// persisted set rather than the page contents.
pub fn displayed_movies(state: &BrowseState) -> Vec<Movie> {
    state
        .displayed()
        .iter()
        .map(|m| movie_from_summary(m, state.is_favorite(m.id)))
        .collect()
}

fn release_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| chrono::Datelike::year(&d))
}

fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> MovieSummary {
        MovieSummary {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
            release_date: Some("1999-03-31".to_string()),
            overview: "A hacker learns the truth.".to_string(),
            vote_average: 8.22,
        }
    }

    #[test]
    fn summary_conversion_builds_poster_url_and_year() {
        let movie = movie_from_summary(&summary(), true);
        assert_eq!(
            movie.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w342/matrix.jpg")
        );
        assert_eq!(movie.year, Some(1999));
        assert_eq!(movie.rating, "8.2");
        assert!(movie.is_favorite);
    }

    #[test]
    fn missing_poster_and_garbage_date_convert_to_none() {
        let mut s = summary();
        s.poster_path = None;
        s.release_date = Some("soon".to_string());
        let movie = movie_from_summary(&s, false);
        assert_eq!(movie.poster_url, None);
        assert_eq!(movie.year, None);
    }

    #[test]
    fn blank_tagline_is_dropped() {
        let detail: MovieDetail =
            serde_json::from_str(r#"{"id": 1, "title": "Untitled", "tagline": "   "}"#)
                .expect("detail json");
        let details = details_from_detail(&detail, false);
        assert_eq!(details.tagline, None);
    }
}
