//! Persisting a track list as a remote playlist.

use std::fmt;

use crate::{
    catalog::{Catalog, CatalogError},
    types::{CreatePlaylistRequest, PlaylistHandle, Track},
};

pub const DEFAULT_PLAYLIST_NAME: &str = "Tastemix Playlist";

/// The playlist-tracks endpoint accepts at most this many uris per request.
pub const ADD_TRACKS_BATCH_SIZE: usize = 100;

#[derive(Debug)]
pub enum SaveError {
    Unauthenticated,
    Create(CatalogError),
    /// The playlist exists but some batches were not attached. Nothing is rolled back.
    Partial {
        handle: PlaylistHandle,
        attached: usize,
        failed_batches: Vec<(usize, CatalogError)>,
    },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Unauthenticated => {
                write!(f, "no valid access token, please run tastemix auth")
            }
            SaveError::Create(e) => write!(f, "failed to create playlist: {}", e),
            SaveError::Partial {
                handle,
                attached,
                failed_batches,
            } => write!(
                f,
                "playlist '{}' saved partially: {} tracks attached, {} batch(es) failed",
                handle.name,
                attached,
                failed_batches.len()
            ),
        }
    }
}

impl std::error::Error for SaveError {}

#[derive(Debug, Clone)]
pub struct SaveOptions {
    pub public: bool,
    pub description: String,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            public: false,
            description: "Generated with tastemix".to_string(),
        }
    }
}

pub fn track_uri(track: &Track) -> String {
    if track.uri.is_empty() {
        format!("spotify:track:{}", track.id)
    } else {
        track.uri.clone()
    }
}

/// Creates the playlist, then attaches the tracks in batches of
/// [`ADD_TRACKS_BATCH_SIZE`]. Failed batches are not retried.
pub async fn save<C>(
    catalog: &C,
    user_id: &str,
    name: &str,
    tracks: &[Track],
    options: &SaveOptions,
) -> Result<PlaylistHandle, SaveError>
where
    C: Catalog + ?Sized,
{
    if catalog.requires_credential().await.is_err() {
        return Err(SaveError::Unauthenticated);
    }

    let name = match name.trim() {
        "" => DEFAULT_PLAYLIST_NAME.to_string(),
        n => n.to_string(),
    };

    let request = CreatePlaylistRequest {
        name,
        description: options.description.clone(),
        public: options.public,
        collaborative: false,
    };

    let created = catalog
        .create_playlist(user_id, &request)
        .await
        .map_err(|e| match e {
            CatalogError::Unauthenticated => SaveError::Unauthenticated,
            other => SaveError::Create(other),
        })?;

    let handle = PlaylistHandle {
        id: created.id.clone(),
        name: created.name.clone(),
        url: created.external_urls.get("spotify").cloned(),
    };

    let uris: Vec<String> = tracks.iter().map(track_uri).collect();
    let mut attached = 0;
    let mut failed_batches = Vec::new();

    for (index, batch) in uris.chunks(ADD_TRACKS_BATCH_SIZE).enumerate() {
        match catalog.add_tracks_to_playlist(&handle.id, batch).await {
            Ok(()) => attached += batch.len(),
            Err(e) => failed_batches.push((index, e)),
        }
    }

    if failed_batches.is_empty() {
        Ok(handle)
    } else {
        Err(SaveError::Partial {
            handle,
            attached,
            failed_batches,
        })
    }
}
