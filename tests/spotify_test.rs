use std::sync::Arc;

use serde_json::json;
use tastemix::{
    catalog::{Catalog, CatalogError},
    generator::{self, GenerateError},
    management::TokenManager,
    preferences::Preferences,
    spotify::{SpotifyCatalog, auth::token_from_json, tracks::parse_feature_entry},
    types::{SearchTracksResponse, Token, TopTracksResponse},
};

fn token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-modify-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_parse_feature_entry_keeps_numeric_fields() {
    let entry = json!({
        "id": "track1",
        "energy": 0.82,
        "tempo": 128,
        "valence": 0.4,
        "type": "audio_features",
        "analysis_url": "https://api.spotify.com/v1/audio-analysis/track1"
    });

    let (id, features) = parse_feature_entry(&entry).unwrap();

    assert_eq!(id, "track1");
    assert_eq!(features.get("energy"), Some(&0.82));
    assert_eq!(features.get("tempo"), Some(&128.0));
    assert!(!features.contains_key("type"));
    assert!(!features.contains_key("analysis_url"));
}

#[test]
fn test_parse_feature_entry_rejects_null_and_missing_id() {
    assert!(parse_feature_entry(&json!(null)).is_none());
    assert!(parse_feature_entry(&json!({ "energy": 0.5 })).is_none());
}

#[test]
fn test_token_from_json() {
    let json = json!({
        "access_token": "abc",
        "refresh_token": "def",
        "scope": "user-read-private",
        "expires_in": 1800
    });

    let token = token_from_json(&json).unwrap();
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.refresh_token, "def");
    assert_eq!(token.expires_in, 1800);
    assert!(token.obtained_at > 0);
}

#[test]
fn test_token_from_json_defaults_and_errors() {
    let token = token_from_json(&json!({ "access_token": "abc" })).unwrap();
    assert_eq!(token.refresh_token, "");
    assert_eq!(token.expires_in, 3600);

    assert!(token_from_json(&json!({ "error": "invalid_grant" })).is_err());
    assert!(token_from_json(&json!({ "access_token": "" })).is_err());
}

#[test]
fn test_token_expiry_margin() {
    let manager = TokenManager::new(token(1_000, 3_600));

    assert!(!manager.is_expired_at(1_000));
    assert!(!manager.is_expired_at(4_359));
    assert!(manager.is_expired_at(4_360));
    assert!(manager.is_expired_at(10_000));
}

#[test]
fn test_token_expiry_short_lived() {
    let manager = TokenManager::new(token(1_000, 100));
    assert!(manager.is_expired_at(1_000));
}

#[tokio::test]
async fn test_catalog_without_token_is_unauthenticated() {
    let catalog = SpotifyCatalog::new(
        "http://127.0.0.1:9".to_string(),
        "US".to_string(),
        Some(String::new()),
    );

    assert!(matches!(
        catalog.requires_credential().await,
        Err(CatalogError::Unauthenticated)
    ));
    assert!(matches!(
        catalog.top_tracks_for_artist("a1").await,
        Err(CatalogError::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_generate_without_token_fails_fast() {
    let catalog = Arc::new(SpotifyCatalog::new(
        "http://127.0.0.1:9".to_string(),
        "US".to_string(),
        None,
    ));
    let mut prefs = Preferences::default();
    prefs.add_genre("jazz").unwrap();

    let result = generator::generate(&prefs, catalog).await;
    assert_eq!(result, Err(GenerateError::Unauthenticated));
}

#[test]
fn test_search_page_skips_null_and_incomplete_items() {
    let body = json!({
        "tracks": {
            "items": [
                { "id": "t1", "name": "One", "album": {} },
                null,
                { "id": null, "name": "Local file", "album": {} },
                { "id": "t2", "name": "Two", "album": { "release_date": "1999" } }
            ],
            "total": 4
        }
    });

    let page: SearchTracksResponse = serde_json::from_value(body).unwrap();
    let ids: Vec<&str> = page.tracks.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
}

#[test]
fn test_top_tracks_skip_null_items() {
    let body = json!({ "tracks": [null, { "id": "t1", "name": "One", "album": {} }] });

    let res: TopTracksResponse = serde_json::from_value(body).unwrap();
    assert_eq!(res.tracks.len(), 1);
    assert_eq!(res.tracks[0].id, "t1");
}
