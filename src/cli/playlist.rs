use crate::{
    config, error, info,
    playlist::{self, SaveError, SaveOptions},
    spotify::SpotifyCatalog,
    success,
    types::Track,
    utils, warning,
};

use super::{load_favorites, load_session, print_tracks, spinner};

pub async fn show() {
    let session = load_session().await;
    let favorites = load_favorites().await;

    if !session.state().is_generated() {
        info!("No playlist generated yet. Run tastemix generate.");
        return;
    }
    if session.state().is_empty_result() {
        warning!("No tracks found for the selected filters.");
        return;
    }

    print_tracks(session.tracks(), &favorites);
}

/// Searches a track and appends the chosen result to the displayed playlist.
pub async fn add_track(query: String, pick: usize) {
    let mut session = load_session().await;
    let catalog = SpotifyCatalog::from_token_cache().await;

    let track = match pick_track(&catalog, &query, pick).await {
        Some(track) => track,
        None => return,
    };

    let name = track.name.clone();
    if !session.add_track(track) {
        info!("{} is already in the playlist.", name);
        return;
    }

    match session.persist().await {
        Ok(_) => success!("Added {} to the playlist.", name),
        Err(e) => error!("Failed to store playlist session. Err: {}", e),
    }
}

pub async fn remove_track(track_id: String) {
    let mut session = load_session().await;

    let Some(track) = session.remove_track(&track_id) else {
        warning!("Track {} is not in the playlist.", track_id);
        return;
    };

    match session.persist().await {
        Ok(_) => success!("Removed {} from the playlist.", track.name),
        Err(e) => error!("Failed to store playlist session. Err: {}", e),
    }
}

/// Toggles a displayed (or already favorite) track in the favorites.
pub async fn favorite(track_id: String) {
    let session = load_session().await;
    let mut favorites = load_favorites().await;

    let track = session
        .find(&track_id)
        .or_else(|| favorites.get(&track_id))
        .cloned();

    let Some(track) = track else {
        warning!("Track {} is neither in the playlist nor a favorite.", track_id);
        return;
    };

    let name = track.name.clone();
    let is_favorite = favorites.toggle(track);
    if let Err(e) = favorites.persist().await {
        error!("Failed to store favorites. Err: {}", e);
    }

    if is_favorite {
        success!("★ {} added to favorites.", name);
    } else {
        success!("☆ {} removed from favorites.", name);
    }
}

pub async fn list_favorites() {
    let favorites = load_favorites().await;
    if favorites.count() == 0 {
        info!("No favorites yet.");
        return;
    }

    print_tracks(favorites.all(), &favorites);
}

pub async fn save(name: Option<String>, public: bool) {
    let session = load_session().await;
    if session.tracks().is_empty() {
        warning!("Nothing to save. Run tastemix generate first.");
        return;
    }

    let catalog = SpotifyCatalog::from_token_cache().await;
    let user_id = match config::spotify_user() {
        Some(id) => id,
        None => match catalog.current_user_id().await {
            Ok(id) => id,
            Err(e) => error!("Cannot resolve Spotify user. Err: {}", e),
        },
    };

    let options = SaveOptions {
        public,
        ..SaveOptions::default()
    };

    let pb = spinner("Saving playlist...");
    let result = playlist::save(
        &catalog,
        &user_id,
        name.as_deref().unwrap_or_default(),
        session.tracks(),
        &options,
    )
    .await;
    pb.finish_and_clear();

    match result {
        Ok(handle) => {
            success!(
                "Saved {} tracks to playlist {}.",
                session.tracks().len(),
                handle.name
            );
            if let Some(url) = handle.url {
                info!("{}", url);
            }
        }
        Err(SaveError::Partial {
            handle,
            attached,
            failed_batches,
        }) => {
            for (index, e) in &failed_batches {
                warning!("Batch {} failed: {}", index + 1, e);
            }
            warning!(
                "Playlist {} was created but only {} of {} tracks were attached. Check it on Spotify.",
                handle.name,
                attached,
                session.tracks().len()
            );
        }
        Err(e) => error!("{}", e),
    }
}

/// Runs a five-result track search and returns the `pick`-th hit (1-based).
pub(super) async fn pick_track(catalog: &SpotifyCatalog, query: &str, pick: usize) -> Option<Track> {
    let tracks = match catalog.search_tracks(query, 5).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Track search failed. Err: {}", e),
    };

    let Some(track) = tracks.into_iter().nth(pick.saturating_sub(1)) else {
        warning!("No track #{} found for '{}'.", pick, query);
        return None;
    };

    info!("Picked {} by {}", track.name, utils::artist_names(&track));
    Some(track)
}
