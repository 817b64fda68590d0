#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use reqwest::StatusCode;
use tastemix::{
    catalog::{Catalog, CatalogError},
    types::{
        Album, CreatePlaylistRequest, CreatePlaylistResponse, FeatureVector, Track, TrackArtist,
    },
};

/// In-memory catalog. Unknown artists and genres answer 404, a missing feature
/// table answers 503, and every call is recorded.
pub struct FakeCatalog {
    authenticated: bool,
    top_tracks: HashMap<String, Vec<Track>>,
    genre_results: HashMap<String, Vec<Track>>,
    features: Option<HashMap<String, FeatureVector>>,
    delays: HashMap<String, u64>,
    failing_batches: HashSet<usize>,
    calls: Mutex<Vec<String>>,
    added: Mutex<Vec<Vec<String>>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            authenticated: true,
            top_tracks: HashMap::new(),
            genre_results: HashMap::new(),
            features: None,
            delays: HashMap::new(),
            failing_batches: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            ..Self::new()
        }
    }

    pub fn with_top_tracks(mut self, artist_id: &str, tracks: Vec<Track>) -> Self {
        self.top_tracks.insert(artist_id.to_string(), tracks);
        self
    }

    pub fn with_genre(mut self, genre: &str, tracks: Vec<Track>) -> Self {
        self.genre_results.insert(genre.to_string(), tracks);
        self
    }

    pub fn with_features(mut self, features: HashMap<String, FeatureVector>) -> Self {
        self.features = Some(features);
        self
    }

    /// Delays the answer for an artist id or genre by `millis`.
    pub fn with_delay(mut self, key: &str, millis: u64) -> Self {
        self.delays.insert(key.to_string(), millis);
        self
    }

    pub fn failing_batch(mut self, index: usize) -> Self {
        self.failing_batches.insert(index);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn added_batches(&self) -> Vec<Vec<String>> {
        self.added.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn delay_for(&self, key: &str) {
        if let Some(ms) = self.delays.get(key) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn requires_credential(&self) -> Result<(), CatalogError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(CatalogError::Unauthenticated)
        }
    }

    async fn top_tracks_for_artist(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError> {
        self.record(format!("top:{}", artist_id));
        self.delay_for(artist_id).await;
        self.top_tracks
            .get(artist_id)
            .cloned()
            .ok_or(CatalogError::Status(StatusCode::NOT_FOUND))
    }

    async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: usize,
    ) -> Result<Vec<Track>, CatalogError> {
        self.record(format!("genre:{}:{}", genre, limit));
        self.delay_for(genre).await;
        self.genre_results
            .get(genre)
            .map(|tracks| tracks.iter().take(limit).cloned().collect())
            .ok_or(CatalogError::Status(StatusCode::NOT_FOUND))
    }

    async fn audio_features(
        &self,
        track_ids: &[String],
    ) -> Result<HashMap<String, FeatureVector>, CatalogError> {
        self.record(format!("features:{}", track_ids.len()));
        let features = self
            .features
            .as_ref()
            .ok_or(CatalogError::Status(StatusCode::SERVICE_UNAVAILABLE))?;
        Ok(track_ids
            .iter()
            .filter_map(|id| features.get(id).map(|f| (id.clone(), f.clone())))
            .collect())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, CatalogError> {
        self.record(format!(
            "create:{}:{}:{}",
            user_id, request.name, request.public
        ));
        Ok(CreatePlaylistResponse {
            id: "pl1".to_string(),
            name: request.name.clone(),
            description: Some(request.description.clone()),
            public: Some(request.public),
            external_urls: HashMap::from([(
                "spotify".to_string(),
                "https://open.spotify.com/playlist/pl1".to_string(),
            )]),
        })
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        let index = self.count_calls("add:");
        self.record(format!("add:{}:{}", playlist_id, uris.len()));
        if self.failing_batches.contains(&index) {
            return Err(CatalogError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }
        self.added.lock().unwrap().push(uris.to_vec());
        Ok(())
    }
}

pub fn track(id: &str, popularity: u8, release_date: &str, artist_id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        artists: vec![TrackArtist {
            id: artist_id.to_string(),
            name: format!("Artist {}", artist_id),
        }],
        album: Album {
            id: format!("{}_album", id),
            name: format!("Album {}", id),
            release_date: if release_date.is_empty() {
                None
            } else {
                Some(release_date.to_string())
            },
            images: Vec::new(),
        },
        popularity,
        duration_ms: 180_000,
    }
}

/// `count` tracks with ids `<prefix>0..`, popularity 50, released 2005.
pub fn tracks(prefix: &str, count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| track(&format!("{}{}", prefix, i), 50, "2005-06-01", "a"))
        .collect()
}

pub fn ids(tracks: &[Track]) -> Vec<String> {
    tracks.iter().map(|t| t.id.clone()).collect()
}

pub fn features(pairs: &[(&str, f64)]) -> FeatureVector {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
