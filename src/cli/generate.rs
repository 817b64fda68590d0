use std::sync::Arc;

use crate::{
    config, error,
    generator::{self, GenerateOptions},
    info,
    spotify::SpotifyCatalog,
    success, warning,
};

use super::{load_favorites, load_preferences, load_session, print_tracks, spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    /// Replace the displayed playlist (generate and refresh).
    Replace,
    /// Append tracks not already displayed.
    More,
}

pub async fn generate(mode: GenerateMode) {
    let prefs = load_preferences().await;
    let mut session = load_session().await;
    let favorites = load_favorites().await;

    if !prefs.get().has_sources() {
        warning!("No artists, genres or seed tracks selected. See tastemix prefs --help.");
    }

    let catalog = Arc::new(SpotifyCatalog::from_token_cache().await);
    let options = GenerateOptions {
        concurrency: config::max_concurrent_requests(),
    };

    let pb = spinner("Generating playlist...");
    let result = generator::generate_with(prefs.get(), catalog, options).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("{}", e),
    };

    match mode {
        GenerateMode::Replace => {
            session.replace(tracks);
        }
        GenerateMode::More => {
            let added = session.merge_more(tracks);
            info!("Added {} new tracks.", added);
        }
    }

    if let Err(e) = session.persist().await {
        warning!("Failed to store playlist session. Err: {}", e);
    }

    if session.state().is_empty_result() {
        warning!("No tracks found for the selected filters.");
        return;
    }

    print_tracks(session.tracks(), &favorites);
    success!("{} tracks in playlist.", session.tracks().len());
}
