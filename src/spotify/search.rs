use reqwest::Client;

use super::request::send_json;
use crate::{
    catalog::CatalogError,
    types::{Artist, CurrentUser, SearchArtistsResponse},
};

/// Searches artists by name (`GET /search?type=artist`).
pub async fn search_artists(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<Artist>, CatalogError> {
    let url = format!("{uri}/search", uri = api_url);
    let limit = limit.to_string();
    let request = client.get(&url).bearer_auth(token).query(&[
        ("type", "artist"),
        ("q", query),
        ("limit", limit.as_str()),
    ]);

    let res = send_json::<SearchArtistsResponse>(request).await?;
    Ok(res.artists.items)
}

/// Profile of the user the token belongs to (`GET /me`).
pub async fn get_current_user(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<CurrentUser, CatalogError> {
    let url = format!("{uri}/me", uri = api_url);
    send_json::<CurrentUser>(client.get(&url).bearer_auth(token)).await
}
