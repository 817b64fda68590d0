use std::collections::HashMap;

use reqwest::Client;
use serde_json::Value;

use super::request::send_json;
use crate::{
    catalog::CatalogError,
    types::{AudioFeaturesResponse, FeatureVector, SearchTracksResponse, TopTracksResponse, Track},
};

/// Retrieves an artist's top tracks for the given market (`GET /artists/{id}/top-tracks`).
pub async fn get_artist_top_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    artist_id: &str,
    market: &str,
) -> Result<Vec<Track>, CatalogError> {
    let url = format!(
        "{uri}/artists/{id}/top-tracks",
        uri = api_url,
        id = artist_id
    );

    let request = client
        .get(&url)
        .bearer_auth(token)
        .query(&[("market", market)]);

    let res = send_json::<TopTracksResponse>(request).await?;
    Ok(res.tracks)
}

/// Searches tracks tagged with a genre (`GET /search?type=track&q=genre:<genre>`).
pub async fn search_tracks_by_genre(
    client: &Client,
    api_url: &str,
    token: &str,
    genre: &str,
    limit: usize,
) -> Result<Vec<Track>, CatalogError> {
    search_tracks(client, api_url, token, &format!("genre:{}", genre), limit).await
}

/// Free-text track search, used by the seed-track and add-track pickers.
pub async fn search_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<Track>, CatalogError> {
    let url = format!("{uri}/search", uri = api_url);
    let limit = limit.to_string();
    let request = client.get(&url).bearer_auth(token).query(&[
        ("type", "track"),
        ("q", query),
        ("limit", limit.as_str()),
    ]);

    let res = send_json::<SearchTracksResponse>(request).await?;
    Ok(res.tracks.items)
}

/// Fetches audio features for a batch of tracks (`GET /audio-features?ids=...`).
///
/// The service answers `null` for tracks it has no analysis for; those ids are
/// left out of the returned map.
pub async fn get_audio_features(
    client: &Client,
    api_url: &str,
    token: &str,
    track_ids: &[String],
) -> Result<HashMap<String, FeatureVector>, CatalogError> {
    if track_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let url = format!("{uri}/audio-features", uri = api_url);
    let ids = track_ids.join(",");
    let request = client
        .get(&url)
        .bearer_auth(token)
        .query(&[("ids", ids.as_str())]);

    let res = send_json::<AudioFeaturesResponse>(request).await?;
    Ok(res
        .audio_features
        .into_iter()
        .flatten()
        .filter_map(|entry| parse_feature_entry(&entry))
        .collect())
}

/// Splits one audio-features object into its id and numeric descriptors.
pub fn parse_feature_entry(entry: &Value) -> Option<(String, FeatureVector)> {
    let object = entry.as_object()?;
    let id = object.get("id")?.as_str()?.to_string();
    let features: FeatureVector = object
        .iter()
        .filter_map(|(key, value)| value.as_f64().map(|v| (key.clone(), v)))
        .collect();
    Some((id, features))
}
