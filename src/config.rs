//! Configuration management for tastemix.
//!
//! Configuration values come from environment variables, optionally seeded from
//! a `.env` file in the local data directory. Variables already present in the
//! process environment take priority over the file, and every value except the
//! client id has a usable default.

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "user-read-private playlist-modify-public playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MARKET: &str = "US";

/// Loads `.env` from the local data directory.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/tastemix/.env`
/// - macOS: `~/Library/Application Support/tastemix/.env`
/// - Windows: `%LOCALAPPDATA%/tastemix/.env`
///
/// A missing file is fine; a file that exists but cannot be parsed is an error.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything tastemix keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tastemix");
    path
}

/// Location of a cache file such as `token.json` or `session.json`.
pub fn cache_path(file: &str) -> PathBuf {
    let mut path = data_dir();
    path.push("cache");
    path.push(file);
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Optional fixed user id for saving playlists (`SPOTIFY_USER_ID`).
/// When unset the id is resolved from the current user's profile.
pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER_ID")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Client id of the registered Spotify application (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .map_err(|_| "SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string())
}

pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Market used for artist top tracks (`SPOTIFY_MARKET`).
pub fn spotify_market() -> String {
    var_or("SPOTIFY_MARKET", DEFAULT_MARKET)
}

/// Lookups the generator keeps in flight at once (`TASTEMIX_MAX_CONCURRENT_REQUESTS`).
pub fn max_concurrent_requests() -> usize {
    env::var("TASTEMIX_MAX_CONCURRENT_REQUESTS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(crate::generator::DEFAULT_CONCURRENCY)
}
