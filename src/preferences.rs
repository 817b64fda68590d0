//! The preference model: the facets a user sets before generating.
//!
//! A [`Preferences`] value is a plain aggregate. Every facet is optional in the
//! sense that an empty (or absent) facet imposes no constraint on generation.
//! The editing helpers enforce the selection limits and the closed vocabularies
//! that the interactive pickers would otherwise enforce.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::types::{Artist, Track};

pub const ARTIST_LIMIT: usize = 5;
pub const GENRE_LIMIT: usize = 5;
pub const DECADE_LIMIT: usize = 6;
pub const TRACK_LIMIT: usize = 5;

pub const DECADES: [&str; 8] = ["1950", "1960", "1970", "1980", "1990", "2000", "2010", "2020"];

pub const POPULAR_GENRES: [&str; 10] = [
    "pop",
    "rock",
    "hip-hop",
    "indie",
    "alt-rock",
    "electronic",
    "house",
    "reggaeton",
    "latin",
    "chill",
];

pub const ALL_GENRES: [&str; 124] = [
    "acoustic", "afrobeat", "alt-rock", "alternative", "ambient", "anime", "black-metal",
    "bluegrass", "blues", "bossanova", "brazil", "breakbeat", "british", "cantopop",
    "chicago-house", "children", "chill", "classical", "club", "comedy", "country", "dance",
    "dancehall", "death-metal", "deep-house", "detroit-techno", "disco", "disney",
    "drum-and-bass", "dub", "dubstep", "edm", "electro", "electronic", "emo", "folk", "forro",
    "french", "funk", "garage", "german", "gospel", "goth", "grindcore", "groove", "grunge",
    "guitar", "happy", "hard-rock", "hardcore", "hardstyle", "heavy-metal", "hip-hop", "house",
    "idm", "indian", "indie", "indie-pop", "industrial", "iranian", "j-dance", "j-idol",
    "j-pop", "j-rock", "jazz", "k-pop", "kids", "latin", "latino", "malay", "mandopop", "metal",
    "metal-misc", "metalcore", "minimal-techno", "movies", "mpb", "new-age", "new-release",
    "opera", "pagode", "party", "philippines-opm", "piano", "pop", "pop-film", "post-dubstep",
    "power-pop", "progressive-house", "psych-rock", "punk", "punk-rock", "r-n-b", "rainy-day",
    "reggae", "reggaeton", "road-trip", "rock", "rock-n-roll", "rockabilly", "romance", "sad",
    "salsa", "samba", "sertanejo", "show-tunes", "singer-songwriter", "ska", "sleep",
    "songwriter", "soul", "soundtracks", "spanish", "study", "summer", "swedish", "synth-pop",
    "tango", "techno", "trance", "trip-hop", "turkish", "work-out", "world-music",
];

/// Threshold map keyed by `min_<feature>` / `max_<feature>`.
pub type MoodThresholds = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceError {
    Limit { facet: &'static str, limit: usize },
    UnknownGenre(String),
    UnknownDecade(String),
    InvalidRange { min: i64, max: i64 },
    NotSelected(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::Limit { facet, limit } => {
                write!(f, "at most {} {} can be selected", limit, facet)
            }
            PreferenceError::UnknownGenre(g) => write!(f, "unknown genre '{}'", g),
            PreferenceError::UnknownDecade(d) => write!(
                f,
                "unknown decade '{}', expected one of {}",
                d,
                DECADES.join(", ")
            ),
            PreferenceError::InvalidRange { min, max } => write!(
                f,
                "invalid popularity range {}-{}, expected 0 <= min <= max <= 100",
                min, max
            ),
            PreferenceError::NotSelected(item) => write!(f, "'{}' is not selected", item),
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Closed popularity interval, `0 <= min <= max <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityRange {
    min: u8,
    max: u8,
}

impl PopularityRange {
    pub const VIRAL: PopularityRange = PopularityRange { min: 80, max: 100 };
    pub const HITS: PopularityRange = PopularityRange { min: 50, max: 80 };
    pub const NICHE: PopularityRange = PopularityRange { min: 0, max: 40 };
    pub const ALL: PopularityRange = PopularityRange { min: 0, max: 100 };

    pub fn new(min: i64, max: i64) -> Result<Self, PreferenceError> {
        if min < 0 || max > 100 || min > max {
            return Err(PreferenceError::InvalidRange { min, max });
        }
        Ok(Self {
            min: min as u8,
            max: max as u8,
        })
    }

    /// Moves the lower bound the way the slider does: clamp to 0..=100, never above `max`.
    pub fn with_min(self, value: i64) -> Self {
        let v = value.clamp(0, 100) as u8;
        Self {
            min: v.min(self.max),
            max: self.max,
        }
    }

    /// Moves the upper bound: clamp to 0..=100, never below `min`.
    pub fn with_max(self, value: i64) -> Self {
        let v = value.clamp(0, 100) as u8;
        Self {
            min: self.min,
            max: v.max(self.min),
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "viral" => Some(Self::VIRAL),
            "hits" => Some(Self::HITS),
            "niche" => Some(Self::NICHE),
            "all" => Some(Self::ALL),
            _ => None,
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, popularity: u8) -> bool {
        self.min <= popularity && popularity <= self.max
    }
}

impl Default for PopularityRange {
    fn default() -> Self {
        Self { min: 30, max: 100 }
    }
}

impl fmt::Display for PopularityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub decades: Vec<String>,
    #[serde(default)]
    pub popularity: Option<PopularityRange>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub mood: MoodThresholds,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            artists: Vec::new(),
            genres: Vec::new(),
            decades: Vec::new(),
            popularity: Some(PopularityRange::default()),
            tracks: Vec::new(),
            mood: MoodThresholds::new(),
        }
    }
}

impl Preferences {
    /// True when at least one facet can contribute tracks to the pool.
    pub fn has_sources(&self) -> bool {
        !(self.artists.is_empty() && self.genres.is_empty() && self.tracks.is_empty())
    }

    pub fn add_artist(&mut self, artist: Artist) -> Result<(), PreferenceError> {
        if self.artists.iter().any(|a| a.id == artist.id) {
            return Ok(());
        }
        if self.artists.len() >= ARTIST_LIMIT {
            return Err(PreferenceError::Limit {
                facet: "artists",
                limit: ARTIST_LIMIT,
            });
        }
        self.artists.push(artist);
        Ok(())
    }

    /// Removes by id or case-insensitive name.
    pub fn remove_artist(&mut self, key: &str) -> Result<Artist, PreferenceError> {
        let pos = self
            .artists
            .iter()
            .position(|a| a.id == key || a.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| PreferenceError::NotSelected(key.to_string()))?;
        Ok(self.artists.remove(pos))
    }

    pub fn add_genre(&mut self, genre: &str) -> Result<(), PreferenceError> {
        let genre = genre.trim().to_lowercase();
        if !ALL_GENRES.contains(&genre.as_str()) {
            return Err(PreferenceError::UnknownGenre(genre));
        }
        if self.genres.contains(&genre) {
            return Ok(());
        }
        if self.genres.len() >= GENRE_LIMIT {
            return Err(PreferenceError::Limit {
                facet: "genres",
                limit: GENRE_LIMIT,
            });
        }
        self.genres.push(genre);
        Ok(())
    }

    pub fn remove_genre(&mut self, genre: &str) -> Result<(), PreferenceError> {
        let genre = genre.trim().to_lowercase();
        let before = self.genres.len();
        self.genres.retain(|g| *g != genre);
        if self.genres.len() == before {
            return Err(PreferenceError::NotSelected(genre));
        }
        Ok(())
    }

    /// Accepts `1990` as well as the `1990s` chip label.
    pub fn add_decade(&mut self, decade: &str) -> Result<(), PreferenceError> {
        let decade = decade.trim().trim_end_matches('s').to_string();
        if !DECADES.contains(&decade.as_str()) {
            return Err(PreferenceError::UnknownDecade(decade));
        }
        if self.decades.contains(&decade) {
            return Ok(());
        }
        if self.decades.len() >= DECADE_LIMIT {
            return Err(PreferenceError::Limit {
                facet: "decades",
                limit: DECADE_LIMIT,
            });
        }
        self.decades.push(decade);
        Ok(())
    }

    pub fn remove_decade(&mut self, decade: &str) -> Result<(), PreferenceError> {
        let decade = decade.trim().trim_end_matches('s').to_string();
        let before = self.decades.len();
        self.decades.retain(|d| *d != decade);
        if self.decades.len() == before {
            return Err(PreferenceError::NotSelected(decade));
        }
        Ok(())
    }

    pub fn add_track(&mut self, track: Track) -> Result<(), PreferenceError> {
        if self.tracks.iter().any(|t| t.id == track.id) {
            return Ok(());
        }
        if self.tracks.len() >= TRACK_LIMIT {
            return Err(PreferenceError::Limit {
                facet: "seed tracks",
                limit: TRACK_LIMIT,
            });
        }
        self.tracks.push(track);
        Ok(())
    }

    pub fn remove_track(&mut self, key: &str) -> Result<Track, PreferenceError> {
        let pos = self
            .tracks
            .iter()
            .position(|t| t.id == key || t.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| PreferenceError::NotSelected(key.to_string()))?;
        Ok(self.tracks.remove(pos))
    }
}

/// Lists the genre vocabulary: popular genres first, then alphabetical,
/// optionally narrowed to genres containing `filter`.
pub fn list_genres(filter: Option<&str>) -> Vec<&'static str> {
    let query = filter.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    let mut genres: Vec<&'static str> = ALL_GENRES
        .iter()
        .copied()
        .filter(|g| query.is_empty() || g.contains(query.as_str()))
        .collect();

    genres.sort_by(|a, b| {
        let a_pop = POPULAR_GENRES.contains(a);
        let b_pop = POPULAR_GENRES.contains(b);
        b_pop.cmp(&a_pop).then_with(|| a.cmp(b))
    });
    genres
}

pub fn is_popular_genre(genre: &str) -> bool {
    POPULAR_GENRES.contains(&genre)
}
