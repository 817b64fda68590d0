use tabled::Table;

use crate::{
    error, info, mood,
    preferences::{self, PopularityRange, PreferenceError, Preferences},
    spotify::SpotifyCatalog,
    success,
    types::PreferenceTableRow,
    utils, warning,
};

use super::{load_preferences, playlist::pick_track};

/// One change to the stored preferences.
#[derive(Debug, Clone)]
pub enum PreferenceEdit {
    AddArtist { query: String, pick: usize },
    RemoveArtist(String),
    AddGenre(String),
    RemoveGenre(String),
    AddDecade(String),
    RemoveDecade(String),
    AddTrack { query: String, pick: usize },
    RemoveTrack(String),
    Popularity(PopularityRange),
    /// Selects a mood preset; selecting the active one again, or `None`, clears it.
    Mood(Option<String>),
}

pub async fn show_preferences() {
    let prefs = load_preferences().await;
    println!("{}", Table::new(preference_rows(prefs.get())));
}

pub async fn clear_preferences() {
    let mut prefs = load_preferences().await;
    prefs.reset();
    match prefs.persist().await {
        Ok(_) => success!("Preferences reset."),
        Err(e) => error!("Failed to store preferences. Err: {}", e),
    }
}

pub async fn edit_preferences(edit: PreferenceEdit) {
    let mut prefs = load_preferences().await;

    let outcome: Result<String, PreferenceError> = match edit {
        PreferenceEdit::AddArtist { query, pick } => {
            let catalog = SpotifyCatalog::from_token_cache().await;
            let artists = match catalog.search_artists(&query, 10).await {
                Ok(artists) => artists,
                Err(e) => error!("Artist search failed. Err: {}", e),
            };
            let Some(artist) = artists.into_iter().nth(pick.saturating_sub(1)) else {
                warning!("No artist #{} found for '{}'.", pick, query);
                return;
            };
            let name = artist.name.clone();
            prefs
                .get_mut()
                .add_artist(artist)
                .map(|_| format!("Artist {} selected.", name))
        }
        PreferenceEdit::RemoveArtist(key) => prefs
            .get_mut()
            .remove_artist(&key)
            .map(|a| format!("Artist {} removed.", a.name)),
        PreferenceEdit::AddGenre(genre) => prefs
            .get_mut()
            .add_genre(&genre)
            .map(|_| format!("Genre {} selected.", genre)),
        PreferenceEdit::RemoveGenre(genre) => prefs
            .get_mut()
            .remove_genre(&genre)
            .map(|_| format!("Genre {} removed.", genre)),
        PreferenceEdit::AddDecade(decade) => prefs
            .get_mut()
            .add_decade(&decade)
            .map(|_| format!("Decade {} selected.", decade)),
        PreferenceEdit::RemoveDecade(decade) => prefs
            .get_mut()
            .remove_decade(&decade)
            .map(|_| format!("Decade {} removed.", decade)),
        PreferenceEdit::AddTrack { query, pick } => {
            let catalog = SpotifyCatalog::from_token_cache().await;
            let Some(track) = pick_track(&catalog, &query, pick).await else {
                return;
            };
            let name = track.name.clone();
            prefs
                .get_mut()
                .add_track(track)
                .map(|_| format!("Seed track {} selected.", name))
        }
        PreferenceEdit::RemoveTrack(key) => prefs
            .get_mut()
            .remove_track(&key)
            .map(|t| format!("Seed track {} removed.", t.name)),
        PreferenceEdit::Popularity(range) => {
            prefs.get_mut().popularity = Some(range);
            Ok(format!("Popularity set to {}.", range))
        }
        PreferenceEdit::Mood(None) => {
            prefs.get_mut().mood.clear();
            Ok("Mood cleared.".to_string())
        }
        PreferenceEdit::Mood(Some(id)) => match mood::find(&id) {
            Some(preset) => {
                let next = mood::toggle(&prefs.get().mood, preset);
                let message = if next.is_empty() {
                    format!("Mood {} cleared.", preset.label)
                } else {
                    format!("Mood {} ({}) selected.", preset.label, mood::describe(&next))
                };
                prefs.get_mut().mood = next;
                Ok(message)
            }
            None => {
                let known: Vec<&str> = mood::MOOD_PRESETS.iter().map(|p| p.id).collect();
                error!("Unknown mood '{}'. Choose one of: {}", id, known.join(", "))
            }
        },
    };

    match outcome {
        Ok(message) => match prefs.persist().await {
            Ok(_) => success!("{}", message),
            Err(e) => error!("Failed to store preferences. Err: {}", e),
        },
        Err(e) => warning!("{}", e),
    }
}

pub fn list_genres(filter: Option<String>) {
    let genres = preferences::list_genres(filter.as_deref());
    if genres.is_empty() {
        info!("No genre matches the filter.");
        return;
    }

    let (popular, rest): (Vec<&str>, Vec<&str>) = genres
        .into_iter()
        .partition(|g| preferences::is_popular_genre(g));

    if !popular.is_empty() {
        info!("Popular: {}", popular.join(", "));
    }
    if !rest.is_empty() {
        info!("All: {}", rest.join(", "));
    }
}

fn preference_rows(prefs: &Preferences) -> Vec<PreferenceTableRow> {
    let or_none = |s: String| if s.is_empty() { "-".to_string() } else { s };

    let mood = match mood::active(&prefs.mood) {
        Some(preset) => format!("{} ({})", preset.label, mood::describe(&prefs.mood)),
        None => mood::describe(&prefs.mood),
    };

    vec![
        PreferenceTableRow {
            facet: format!("Artists ({}/{})", prefs.artists.len(), preferences::ARTIST_LIMIT),
            value: or_none(
                prefs
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        },
        PreferenceTableRow {
            facet: format!("Genres ({}/{})", prefs.genres.len(), preferences::GENRE_LIMIT),
            value: or_none(prefs.genres.join(", ")),
        },
        PreferenceTableRow {
            facet: format!("Decades ({}/{})", prefs.decades.len(), preferences::DECADE_LIMIT),
            value: or_none(
                prefs
                    .decades
                    .iter()
                    .map(|d| format!("{}s", d))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        },
        PreferenceTableRow {
            facet: "Popularity".to_string(),
            value: or_none(prefs.popularity.map(|p| p.to_string()).unwrap_or_default()),
        },
        PreferenceTableRow {
            facet: format!("Seed tracks ({}/{})", prefs.tracks.len(), preferences::TRACK_LIMIT),
            value: or_none(
                prefs
                    .tracks
                    .iter()
                    .map(|t| format!("{} - {}", t.name, utils::artist_names(t)))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        },
        PreferenceTableRow {
            facet: "Mood".to_string(),
            value: or_none(mood),
        },
    ]
}
