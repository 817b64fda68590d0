//! Command implementations behind the `tastemix` binary.
//!
//! Each function is one subcommand: it loads whatever local state it needs,
//! talks to Spotify through [`crate::spotify::SpotifyCatalog`], prints the
//! outcome and persists changes. Fatal problems end the process through
//! [`crate::error!`].

mod auth;
mod generate;
mod playlist;
mod prefs;
mod search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::{FavoritesManager, PreferencesManager, SessionManager},
    types::Track,
    utils,
};

pub use auth::auth;
pub use generate::{GenerateMode, generate};
pub use playlist::{add_track, favorite, list_favorites, remove_track, save, show};
pub use prefs::{
    PreferenceEdit, clear_preferences, edit_preferences, list_genres, show_preferences,
};
pub use search::{search_artists, search_tracks};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn print_tracks(tracks: &[Track], favorites: &FavoritesManager) {
    let table = Table::new(utils::track_table_rows(tracks, favorites));
    println!("{}", table);
}

async fn load_session() -> SessionManager {
    match SessionManager::load().await {
        Ok(session) => session,
        Err(e) => error!("Failed to load playlist session. Err: {}", e),
    }
}

async fn load_preferences() -> PreferencesManager {
    match PreferencesManager::load().await {
        Ok(prefs) => prefs,
        Err(e) => error!("Failed to load preferences. Err: {}", e),
    }
}

async fn load_favorites() -> FavoritesManager {
    match FavoritesManager::load().await {
        Ok(favorites) => favorites,
        Err(e) => error!("Failed to load favorites. Err: {}", e),
    }
}
