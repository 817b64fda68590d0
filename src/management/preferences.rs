use std::path::PathBuf;

use super::store::{StoreError, read_json, write_json};
use crate::{config, preferences::Preferences};

/// Keeps the preference selections between invocations.
pub struct PreferencesManager {
    preferences: Preferences,
}

impl PreferencesManager {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }

    /// Loads stored preferences; a missing file yields the defaults.
    pub async fn load() -> Result<Self, StoreError> {
        match read_json::<Preferences>(&Self::preferences_path()).await {
            Ok(preferences) => Ok(Self { preferences }),
            Err(e) if e.is_not_found() => Ok(Self::new(Preferences::default())),
            Err(e) => Err(e),
        }
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        write_json(&Self::preferences_path(), &self.preferences).await
    }

    pub fn get(&self) -> &Preferences {
        &self.preferences
    }

    pub fn get_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    pub fn reset(&mut self) {
        self.preferences = Preferences::default();
    }

    fn preferences_path() -> PathBuf {
        config::cache_path("preferences.json")
    }
}
