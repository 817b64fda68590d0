use std::collections::HashSet;

use crate::{
    preferences::{MoodThresholds, PopularityRange},
    types::{FeatureVector, Track},
};

/// Hard cap on the number of tracks a generation returns.
pub const MAX_RESULTS: usize = 30;

/// Only this many leading tracks are checked against the mood thresholds;
/// the audio-features batch endpoint will not take more in one request.
pub const MOOD_SAMPLE_SIZE: usize = 50;

/// Per-genre search result cap.
pub const GENRE_SEARCH_LIMIT: usize = 20;

/// Leading integer of a decade label, so `"1990"` and `"1990s"` both give 1990.
pub fn decade_start(label: &str) -> Option<i32> {
    let digits: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Year component of the album release date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
pub fn release_year(track: &Track) -> Option<i32> {
    let date = track.album.release_date.as_deref()?.trim();
    let year = date.split('-').next()?;
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

/// Keeps tracks released inside at least one `[start, start + 10)` window.
/// No decades means no filtering; an undated track never survives an active filter.
pub fn filter_by_decades(tracks: Vec<Track>, decades: &[String]) -> Vec<Track> {
    if decades.is_empty() {
        return tracks;
    }

    let windows: Vec<i32> = decades.iter().filter_map(|d| decade_start(d)).collect();
    tracks
        .into_iter()
        .filter(|track| match release_year(track) {
            Some(year) => windows
                .iter()
                .any(|start| year >= *start && year < start + 10),
            None => false,
        })
        .collect()
}

pub fn filter_by_popularity(tracks: Vec<Track>, range: Option<PopularityRange>) -> Vec<Track> {
    match range {
        Some(range) => tracks
            .into_iter()
            .filter(|t| range.contains(t.popularity))
            .collect(),
        None => tracks,
    }
}

/// Evaluates a `min_<feature>` / `max_<feature>` map against one feature vector.
///
/// Bounds are inclusive. A feature the vector does not carry cannot be judged and
/// does not fail the track; keys without a `min_`/`max_` prefix are ignored.
pub fn meets_thresholds(features: &FeatureVector, thresholds: &MoodThresholds) -> bool {
    thresholds.iter().all(|(key, threshold)| {
        if let Some(feature) = key.strip_prefix("min_") {
            features.get(feature).is_none_or(|v| *v >= *threshold)
        } else if let Some(feature) = key.strip_prefix("max_") {
            features.get(feature).is_none_or(|v| *v <= *threshold)
        } else {
            true
        }
    })
}

/// One entry per track id, first occurrence wins, truncated to `cap`.
pub fn dedupe_and_cap(tracks: Vec<Track>, cap: usize) -> Vec<Track> {
    let mut seen_ids = HashSet::new();
    tracks
        .into_iter()
        .filter(|track| seen_ids.insert(track.id.clone()))
        .take(cap)
        .collect()
}

/// Order-preserving removal of repeated genre tags.
pub fn unique_genres(genres: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    genres
        .iter()
        .filter(|g| seen.insert(g.as_str()))
        .cloned()
        .collect()
}
