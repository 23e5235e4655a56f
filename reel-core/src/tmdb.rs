//! TMDB catalog client
//!
//! Thin typed client for the three endpoints the app consumes: movie
//! search, the popular listing, and single-movie detail. The rest of the
//! TMDB surface is out of scope.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Largest page number TMDB will serve. List responses can report totals
/// beyond it, so reported totals get clamped to this.
pub const TMDB_PAGE_CAP: u32 = 500;

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TMDB returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Reduced movie record shown in lists and stored as a favorite.
///
/// Serialized as-is into the favorites store, so adding fields needs a
/// `#[serde(default)]` to keep old stored lists readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie record returned by the single-item endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub tagline: Option<String>,
}

impl MovieDetail {
    /// Project down to the summary fields, e.g. when favoriting from the
    /// detail overlay.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            overview: self.overview.clone(),
            vote_average: self.vote_average,
        }
    }
}

/// One page of list results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
}

/// The remote movie catalog the controller talks to.
///
/// Seam for tests: the browse session takes `Arc<dyn CatalogService>` so a
/// scripted catalog can stand in for TMDB.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, TmdbError>;
    async fn popular_movies(&self, page: u32) -> Result<MoviePage, TmdbError>;
    async fn movie_details(&self, id: u64) -> Result<MovieDetail, TmdbError>;
}

/// Client for the TMDB v3 JSON API.
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Client pointed at an alternate base URL (stub servers in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        // The api_key query param stays out of the logs.
        debug!("TMDB request: {} {:?}", endpoint, params);

        let resp = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !resp.status().is_success() {
            warn!("TMDB {} returned status {}", endpoint, resp.status());
            return Err(TmdbError::Status(resp.status()));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl CatalogService for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, TmdbError> {
        let page_str = page.to_string();
        self.get_json("/search/movie", &[("query", query), ("page", &page_str)])
            .await
    }

    async fn popular_movies(&self, page: u32) -> Result<MoviePage, TmdbError> {
        let page_str = page.to_string();
        self.get_json("/movie/popular", &[("page", &page_str)])
            .await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetail, TmdbError> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }
}

/// Build a TMDB image URL from a poster or backdrop path.
///
/// `size` is a TMDB size class like "w342" or "original". Paths from the
/// API carry a leading slash.
pub fn poster_url(path: &str, size: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}
