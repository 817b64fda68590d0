use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::store::{StoreError, read_json, write_json};
use crate::{config, types::Track};

/// The displayed playlist. `Generated(vec![])` is a finished generation that
/// found nothing, which is not the same as never having generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "tracks", rename_all = "snake_case")]
pub enum PlaylistState {
    #[default]
    NotGenerated,
    Generated(Vec<Track>),
}

impl PlaylistState {
    pub fn tracks(&self) -> &[Track] {
        match self {
            PlaylistState::NotGenerated => &[],
            PlaylistState::Generated(tracks) => tracks,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, PlaylistState::Generated(_))
    }

    /// Generated, but nothing matched the filters.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, PlaylistState::Generated(tracks) if tracks.is_empty())
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks().iter().any(|t| t.id == track_id)
    }
}

/// Owns the displayed playlist between commands. Generation never touches it
/// directly; results are handed over once a generation has completed.
#[derive(Default)]
pub struct SessionManager {
    state: PlaylistState,
}

impl SessionManager {
    pub fn new(state: PlaylistState) -> Self {
        Self { state }
    }

    /// Loads the stored session; a missing file means nothing was generated yet.
    pub async fn load() -> Result<Self, StoreError> {
        match read_json::<PlaylistState>(&Self::session_path()).await {
            Ok(state) => Ok(Self { state }),
            Err(e) if e.is_not_found() => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        write_json(&Self::session_path(), &self.state).await
    }

    pub fn state(&self) -> &PlaylistState {
        &self.state
    }

    pub fn tracks(&self) -> &[Track] {
        self.state.tracks()
    }

    /// Generate and refresh: the new result replaces whatever was displayed.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.state = PlaylistState::Generated(tracks);
    }

    /// "Add more": appends only tracks not already displayed. Returns how many
    /// were appended.
    pub fn merge_more(&mut self, tracks: Vec<Track>) -> usize {
        let mut current = self.take_tracks();
        let before = current.len();
        for track in tracks {
            if !current.iter().any(|t| t.id == track.id) {
                current.push(track);
            }
        }
        let added = current.len() - before;
        self.state = PlaylistState::Generated(current);
        added
    }

    /// Adds a single track picked by the user. Returns `false` if it is already shown.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.state.contains(&track.id) {
            return false;
        }
        let mut current = self.take_tracks();
        current.push(track);
        self.state = PlaylistState::Generated(current);
        true
    }

    pub fn remove_track(&mut self, track_id: &str) -> Option<Track> {
        match &mut self.state {
            PlaylistState::Generated(tracks) => {
                let pos = tracks.iter().position(|t| t.id == track_id)?;
                Some(tracks.remove(pos))
            }
            PlaylistState::NotGenerated => None,
        }
    }

    pub fn find(&self, track_id: &str) -> Option<&Track> {
        self.tracks().iter().find(|t| t.id == track_id)
    }

    fn take_tracks(&mut self) -> Vec<Track> {
        match std::mem::take(&mut self.state) {
            PlaylistState::Generated(tracks) => tracks,
            PlaylistState::NotGenerated => Vec::new(),
        }
    }

    fn session_path() -> PathBuf {
        config::cache_path("session.json")
    }
}
