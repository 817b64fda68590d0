use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    generator::filters::release_year,
    management::FavoritesManager,
    preferences::PopularityRange,
    types::{Artist, ArtistTableRow, Track, TrackTableRow},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// `m:ss` for a duration in milliseconds.
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}

pub fn artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// First album cover url, with the mistyped `iscdn.co` host corrected.
pub fn cover_image_url(track: &Track) -> Option<String> {
    let url = track.album.images.first()?.url.as_str();
    if url.is_empty() {
        return None;
    }
    match url.strip_prefix("https://iscdn.co/") {
        Some(rest) => Some(format!("https://i.scdn.co/{}", rest)),
        None => Some(url.to_string()),
    }
}

/// Parses `min-max` (e.g. `30-100`) or a preset name (`viral`, `hits`, `niche`, `all`).
pub fn parse_popularity_range(s: &str) -> Result<PopularityRange, String> {
    if let Some(preset) = PopularityRange::preset(s) {
        return Ok(preset);
    }

    let (min, max) = s
        .split_once('-')
        .ok_or_else(|| format!("expected MIN-MAX or a preset, got '{}'", s))?;
    let min = min
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid minimum '{}': {}", min, e))?;
    let max = max
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid maximum '{}': {}", max, e))?;

    PopularityRange::new(min, max).map_err(|e| e.to_string())
}

pub fn track_table_rows(tracks: &[Track], favorites: &FavoritesManager) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            favorite: if favorites.is_favorite(&t.id) {
                "★".to_string()
            } else {
                "☆".to_string()
            },
            title: t.name.clone(),
            artists: artist_names(t),
            year: release_year(t).map(|y| y.to_string()).unwrap_or_default(),
            popularity: t.popularity,
            duration: format_duration(t.duration_ms),
            id: t.id.clone(),
        })
        .collect()
}

pub fn artist_table_rows(artists: &[Artist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            position: i + 1,
            name: a.name.clone(),
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            id: a.id.clone(),
        })
        .collect()
}
