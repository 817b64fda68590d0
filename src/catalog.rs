//! The remote music catalog as a capability.
//!
//! Everything the generator and the playlist persistence need from the catalog
//! service goes through [`Catalog`]. The Spotify Web API implementation lives in
//! [`crate::spotify::SpotifyCatalog`]; tests substitute an in-memory fake.

use std::{collections::HashMap, fmt};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::types::{CreatePlaylistRequest, CreatePlaylistResponse, FeatureVector, Track};

#[derive(Debug)]
pub enum CatalogError {
    /// No valid bearer credential is available.
    Unauthenticated,
    Http(reqwest::Error),
    Status(StatusCode),
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unauthenticated => {
                write!(f, "not authenticated, please run tastemix auth")
            }
            CatalogError::Http(e) => write!(f, "request failed: {}", e),
            CatalogError::Status(status) => write!(f, "catalog responded with {}", status),
            CatalogError::Decode(e) => write!(f, "unexpected response body: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CatalogError::Status(status),
            None if err.is_decode() => CatalogError::Decode(err.to_string()),
            None => CatalogError::Http(err),
        }
    }
}

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fails with [`CatalogError::Unauthenticated`] when no valid credential is available.
    async fn requires_credential(&self) -> Result<(), CatalogError>;

    async fn top_tracks_for_artist(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError>;

    async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: usize,
    ) -> Result<Vec<Track>, CatalogError>;

    /// Ids the service knows nothing about are simply absent from the map.
    async fn audio_features(
        &self,
        track_ids: &[String],
    ) -> Result<HashMap<String, FeatureVector>, CatalogError>;

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, CatalogError>;

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError>;
}
