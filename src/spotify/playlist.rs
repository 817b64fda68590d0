use reqwest::Client;

use super::request::send_json;
use crate::{
    catalog::CatalogError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
};

/// Creates an empty playlist owned by `user_id` (`POST /users/{user_id}/playlists`).
pub async fn create(
    client: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, CatalogError> {
    let url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = api_url,
        user_id = user_id
    );

    send_json::<CreatePlaylistResponse>(client.post(&url).bearer_auth(token).json(request)).await
}

/// Appends track uris to a playlist (`POST /playlists/{id}/tracks`).
///
/// The endpoint takes at most 100 uris; batching is the caller's job.
pub async fn add_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<String, CatalogError> {
    let url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = api_url,
        playlist_id = playlist_id
    );

    let body = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };
    let res =
        send_json::<AddTrackToPlaylistResponse>(client.post(&url).bearer_auth(token).json(&body))
            .await?;
    Ok(res.snapshot_id)
}
