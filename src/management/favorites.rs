use std::path::PathBuf;

use super::store::{StoreError, read_json, write_json};
use crate::{config, types::Track};

/// Locally persisted set of favorite tracks, keyed by track id in insertion order.
#[derive(Default)]
pub struct FavoritesManager {
    favorites: Vec<Track>,
}

impl FavoritesManager {
    pub fn new(favorites: Option<Vec<Track>>) -> Self {
        Self {
            favorites: favorites.unwrap_or_default(),
        }
    }

    /// Loads the favorites file; a missing file means no favorites yet.
    pub async fn load() -> Result<Self, StoreError> {
        match read_json::<Vec<Track>>(&Self::favorites_path()).await {
            Ok(favorites) => Ok(Self { favorites }),
            Err(e) if e.is_not_found() => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        write_json(&Self::favorites_path(), &self.favorites).await
    }

    /// Adds the track, or removes it if already a favorite. Returns whether it is
    /// a favorite afterwards.
    pub fn toggle(&mut self, track: Track) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f.id == track.id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(track);
            true
        }
    }

    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.favorites.iter().any(|f| f.id == track_id)
    }

    pub fn get(&self, track_id: &str) -> Option<&Track> {
        self.favorites.iter().find(|f| f.id == track_id)
    }

    pub fn all(&self) -> &[Track] {
        &self.favorites
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    fn favorites_path() -> PathBuf {
        config::cache_path("favorites.json")
    }
}
