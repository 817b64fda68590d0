//! # Playlist Generation
//!
//! Turns a [`Preferences`] value into a bounded, deduplicated track list by
//! querying the [`Catalog`] and filtering what comes back.
//!
//! ## Stages
//!
//! The pool is built and filtered in a fixed order:
//!
//! 1. **Seeds**: explicit seed tracks, followed by the top tracks of each seed's
//!    primary artist.
//! 2. **Artists**: top tracks of every selected artist, in selection order.
//! 3. **Genres**: a 20-track search per distinct genre.
//! 4. **Decades**: keep tracks released inside any selected decade.
//! 5. **Popularity**: keep tracks inside the inclusive popularity range.
//! 6. **Mood**: check the first 50 survivors against the audio-feature
//!    thresholds; tracks past the sample pass unchecked.
//! 7. **Dedupe & cap**: first occurrence of each id wins, at most 30 tracks.
//!
//! ## Failure Model
//!
//! Only a missing credential aborts generation, and it is checked before any
//! request is made. Every other failed lookup silently contributes zero tracks;
//! a failed audio-features lookup lets the whole sample through.
//!
//! ## Concurrency
//!
//! Lookups inside a stage are dispatched concurrently (see [`fanout`]) but merged
//! in issuance order, so the result depends only on stage order and the order of
//! the preference facets, never on response timing.

mod fanout;
pub mod filters;

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    catalog::Catalog,
    preferences::{MoodThresholds, Preferences},
    types::Track,
};

pub use fanout::fan_out;
pub use filters::{GENRE_SEARCH_LIMIT, MAX_RESULTS, MOOD_SAMPLE_SIZE};

pub const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    Unauthenticated,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Unauthenticated => {
                write!(f, "no valid access token, please run tastemix auth")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Upper bound on lookups in flight at the same time.
    pub concurrency: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

pub async fn generate<C>(
    preferences: &Preferences,
    catalog: Arc<C>,
) -> Result<Vec<Track>, GenerateError>
where
    C: Catalog + ?Sized + 'static,
{
    generate_with(preferences, catalog, GenerateOptions::default()).await
}

pub async fn generate_with<C>(
    preferences: &Preferences,
    catalog: Arc<C>,
    options: GenerateOptions,
) -> Result<Vec<Track>, GenerateError>
where
    C: Catalog + ?Sized + 'static,
{
    if catalog.requires_credential().await.is_err() {
        return Err(GenerateError::Unauthenticated);
    }

    let mut pool: Vec<Track> = Vec::new();
    pool.extend(expand_seeds(&catalog, &preferences.tracks, options.concurrency).await);
    pool.extend(expand_artists(&catalog, preferences, options.concurrency).await);
    pool.extend(expand_genres(&catalog, &preferences.genres, options.concurrency).await);

    let pool = filters::filter_by_decades(pool, &preferences.decades);
    let pool = filters::filter_by_popularity(pool, preferences.popularity);
    let pool = filter_by_mood(catalog.as_ref(), pool, &preferences.mood).await;

    Ok(filters::dedupe_and_cap(pool, MAX_RESULTS))
}

/// Seeds verbatim, then the top tracks of each seed's primary artist. A seed
/// artist shared by several seeds is looked up once per seed.
async fn expand_seeds<C>(catalog: &Arc<C>, seeds: &[Track], concurrency: usize) -> Vec<Track>
where
    C: Catalog + ?Sized + 'static,
{
    if seeds.is_empty() {
        return Vec::new();
    }

    let primary_artists: Vec<String> = seeds
        .iter()
        .filter_map(|t| t.artists.first().map(|a| a.id.clone()))
        .collect();

    let mut tracks = seeds.to_vec();
    tracks.extend(
        fan_out(catalog, &primary_artists, concurrency, |catalog, id| async move {
            catalog.top_tracks_for_artist(&id).await
        })
        .await,
    );
    tracks
}

async fn expand_artists<C>(
    catalog: &Arc<C>,
    preferences: &Preferences,
    concurrency: usize,
) -> Vec<Track>
where
    C: Catalog + ?Sized + 'static,
{
    let artist_ids: Vec<String> = preferences.artists.iter().map(|a| a.id.clone()).collect();
    fan_out(catalog, &artist_ids, concurrency, |catalog, id| async move {
        catalog.top_tracks_for_artist(&id).await
    })
    .await
}

async fn expand_genres<C>(catalog: &Arc<C>, genres: &[String], concurrency: usize) -> Vec<Track>
where
    C: Catalog + ?Sized + 'static,
{
    let genres = filters::unique_genres(genres);
    fan_out(catalog, &genres, concurrency, |catalog, genre| async move {
        catalog
            .search_tracks_by_genre(&genre, GENRE_SEARCH_LIMIT)
            .await
    })
    .await
}

async fn filter_by_mood<C>(catalog: &C, tracks: Vec<Track>, mood: &MoodThresholds) -> Vec<Track>
where
    C: Catalog + ?Sized,
{
    if mood.is_empty() || tracks.is_empty() {
        return tracks;
    }

    let sample_len = tracks.len().min(MOOD_SAMPLE_SIZE);
    let sample_ids: Vec<String> = tracks[..sample_len].iter().map(|t| t.id.clone()).collect();
    let features = catalog
        .audio_features(&sample_ids)
        .await
        .unwrap_or_else(|_| HashMap::new());

    tracks
        .into_iter()
        .enumerate()
        .filter(|(index, track)| {
            *index >= sample_len
                || features
                    .get(&track.id)
                    .is_none_or(|f| filters::meets_thresholds(f, mood))
        })
        .map(|(_, track)| track)
        .collect()
}
