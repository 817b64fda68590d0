//! # Spotify Integration Module
//!
//! This module talks to the Spotify Web API and implements the [`Catalog`]
//! capability on top of it. Everything the generator and playlist persistence
//! need goes through [`SpotifyCatalog`]; the pickers (artist and track search)
//! and the user lookup are exposed as inherent methods.
//!
//! ## Layout
//!
//! ```text
//! generator / playlist / cli
//!          ↓
//!    SpotifyCatalog (Catalog impl)
//!     ├── tracks    (top tracks, genre search, audio features)
//!     ├── search    (artist search, current user)
//!     ├── playlist  (create, add tracks)
//!     └── auth      (OAuth 2.0 PKCE, token refresh)
//!          ↓
//!    request::send_json (reqwest, retry on 502 / 429)
//! ```
//!
//! ## Endpoints
//!
//! - `GET /artists/{id}/top-tracks`
//! - `GET /search` (`type=track` and `type=artist`)
//! - `GET /audio-features`
//! - `GET /me`
//! - `POST /users/{user_id}/playlists`
//! - `POST /playlists/{playlist_id}/tracks`
//! - `POST /api/token` (authorization code exchange and refresh)
//!
//! ## Errors
//!
//! Every call returns [`CatalogError`]. A non-2xx status is reported as
//! [`CatalogError::Status`] and it is up to the caller whether that is fatal; the
//! generator treats it as an empty contribution.

pub mod auth;
pub mod playlist;
pub mod search;
pub mod tracks;

mod request;

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    catalog::{Catalog, CatalogError},
    config,
    management::TokenManager,
    types::{Artist, CreatePlaylistRequest, CreatePlaylistResponse, FeatureVector, Track},
};

pub struct SpotifyCatalog {
    client: Client,
    api_url: String,
    market: String,
    token: Option<String>,
}

impl SpotifyCatalog {
    pub fn new(api_url: String, market: String, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_url,
            market,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Builds a catalog from the configured endpoints and the cached token,
    /// refreshing it when it is about to expire. Without a usable token every
    /// call fails with [`CatalogError::Unauthenticated`].
    pub async fn from_token_cache() -> Self {
        let token = match TokenManager::load().await {
            Ok(mut mgr) => mgr.get_valid_token().await,
            Err(_) => None,
        };

        Self::new(config::spotify_apiurl(), config::spotify_market(), token)
    }

    fn token(&self) -> Result<&str, CatalogError> {
        self.token.as_deref().ok_or(CatalogError::Unauthenticated)
    }

    pub async fn search_artists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Artist>, CatalogError> {
        search::search_artists(&self.client, &self.api_url, self.token()?, query, limit).await
    }

    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, CatalogError> {
        tracks::search_tracks(&self.client, &self.api_url, self.token()?, query, limit).await
    }

    pub async fn current_user_id(&self) -> Result<String, CatalogError> {
        let user = search::get_current_user(&self.client, &self.api_url, self.token()?).await?;
        Ok(user.id)
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn requires_credential(&self) -> Result<(), CatalogError> {
        self.token().map(|_| ())
    }

    async fn top_tracks_for_artist(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError> {
        tracks::get_artist_top_tracks(
            &self.client,
            &self.api_url,
            self.token()?,
            artist_id,
            &self.market,
        )
        .await
    }

    async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: usize,
    ) -> Result<Vec<Track>, CatalogError> {
        tracks::search_tracks_by_genre(&self.client, &self.api_url, self.token()?, genre, limit)
            .await
    }

    async fn audio_features(
        &self,
        track_ids: &[String],
    ) -> Result<HashMap<String, FeatureVector>, CatalogError> {
        tracks::get_audio_features(&self.client, &self.api_url, self.token()?, track_ids).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, CatalogError> {
        playlist::create(&self.client, &self.api_url, self.token()?, user_id, request).await
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        playlist::add_tracks(&self.client, &self.api_url, self.token()?, playlist_id, uris)
            .await
            .map(|_| ())
    }
}
