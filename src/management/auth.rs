use std::path::PathBuf;

use chrono::Utc;

use super::store::{StoreError, read_json, write_json};
use crate::{config, spotify, types::Token};

/// Refresh this many seconds before the token actually expires.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, StoreError> {
        let token: Token = read_json(&Self::token_path()).await?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        write_json(&Self::token_path(), &self.token).await
    }

    /// Returns an access token that is good for at least a few more minutes,
    /// refreshing it if needed, or `None` when no valid credential can be had.
    pub async fn get_valid_token(&mut self) -> Option<String> {
        if self.is_expired_at(Utc::now().timestamp() as u64) {
            let refreshed = spotify::auth::refresh_token(&self.token.refresh_token)
                .await
                .ok()?;
            self.token = refreshed;
            let _ = self.persist().await;
        }

        Some(self.token.access_token.clone()).filter(|t| !t.is_empty())
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let expires_at = self.token.obtained_at + self.token.expires_in;
        now >= expires_at.saturating_sub(EXPIRY_MARGIN_SECS)
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        config::cache_path("token.json")
    }
}
