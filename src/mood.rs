//! Named mood presets.
//!
//! A preset is only a convenient way to produce a threshold map; the generator
//! evaluates the generic `min_<feature>` / `max_<feature>` map and never sees the
//! preset names.

use crate::preferences::MoodThresholds;

pub struct MoodPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub params: &'static [(&'static str, f64)],
}

pub static MOOD_PRESETS: [MoodPreset; 6] = [
    MoodPreset {
        id: "happy",
        label: "Happy ☀️",
        params: &[("min_valence", 0.7), ("min_energy", 0.6)],
    },
    MoodPreset {
        id: "sad",
        label: "Sad 🌧️",
        params: &[("max_valence", 0.4), ("max_energy", 0.4)],
    },
    MoodPreset {
        id: "energetic",
        label: "Energetic ⚡",
        params: &[("min_energy", 0.8), ("min_danceability", 0.6)],
    },
    MoodPreset {
        id: "calm",
        label: "Chill 🧘",
        params: &[("max_energy", 0.3), ("max_tempo", 100.0)],
    },
    MoodPreset {
        id: "party",
        label: "Party 🎉",
        params: &[("min_danceability", 0.8), ("min_energy", 0.7)],
    },
    MoodPreset {
        id: "focus",
        label: "Focus 🧠",
        params: &[("max_speechiness", 0.3), ("min_instrumentalness", 0.5)],
    },
];

impl MoodPreset {
    pub fn thresholds(&self) -> MoodThresholds {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn matches(&self, thresholds: &MoodThresholds) -> bool {
        self.params
            .iter()
            .all(|(k, v)| thresholds.get(*k) == Some(v))
    }
}

pub fn find(id: &str) -> Option<&'static MoodPreset> {
    let id = id.trim().to_lowercase();
    MOOD_PRESETS.iter().find(|p| p.id == id)
}

/// The preset whose keys all match the stored thresholds, if any.
pub fn active(thresholds: &MoodThresholds) -> Option<&'static MoodPreset> {
    if thresholds.is_empty() {
        return None;
    }
    MOOD_PRESETS.iter().find(|p| p.matches(thresholds))
}

/// Selecting the already active preset clears the mood; any other preset replaces it.
pub fn toggle(current: &MoodThresholds, preset: &MoodPreset) -> MoodThresholds {
    match active(current) {
        Some(a) if a.id == preset.id => MoodThresholds::new(),
        _ => preset.thresholds(),
    }
}

/// Renders thresholds as `Min energy: 0.8 • Max tempo: 100`.
pub fn describe(thresholds: &MoodThresholds) -> String {
    thresholds
        .iter()
        .map(|(k, v)| {
            let key = k
                .replacen("min_", "Min ", 1)
                .replacen("max_", "Max ", 1);
            format!("{}: {}", key, v)
        })
        .collect::<Vec<_>>()
        .join(" • ")
}
