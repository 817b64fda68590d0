//! Tastemix Library
//!
//! Builds Spotify playlists from a set of taste preferences: selected artists,
//! genres, decades, a popularity range and an optional mood. The generator
//! gathers candidate tracks from several catalog lookups, filters them and
//! returns at most 30 tracks, which can then be edited locally and saved back to
//! Spotify as a playlist.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `catalog` - The catalog capability trait and its error type
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `generator` - The playlist generation pipeline
//! - `management` - Locally persisted token, preferences, session and favorites
//! - `mood` - Named mood presets
//! - `playlist` - Saving a track list as a remote playlist
//! - `preferences` - The preference model
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tastemix::{generator, preferences::Preferences, spotify::SpotifyCatalog};
//!
//! #[tokio::main]
//! async fn main() -> tastemix::Res<()> {
//!     tastemix::config::load_env().await?;
//!     let catalog = Arc::new(SpotifyCatalog::from_token_cache().await);
//!     let mut prefs = Preferences::default();
//!     prefs.add_genre("jazz")?;
//!     let tracks = generator::generate(&prefs, catalog).await?;
//!     println!("{} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod generator;
pub mod management;
pub mod mood;
pub mod playlist;
pub mod preferences;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used by the command-line glue.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Generating playlist...");
/// info!("{} genres selected", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Playlist saved");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits with code 1.
///
/// Only for the command-line edge; library code returns errors instead.
///
/// ```
/// error!("Failed to load preferences: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// ```
/// warning!("Failed to open browser");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
