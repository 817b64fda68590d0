use tabled::Table;

use crate::{error, info, spotify::SpotifyCatalog, utils};

use super::{load_favorites, print_tracks};

pub async fn search_artists(query: String) {
    let catalog = SpotifyCatalog::from_token_cache().await;
    let artists = match catalog.search_artists(&query, 10).await {
        Ok(artists) => artists,
        Err(e) => error!("Artist search failed. Err: {}", e),
    };

    if artists.is_empty() {
        info!("No artists found for '{}'.", query);
        return;
    }

    println!("{}", Table::new(utils::artist_table_rows(&artists)));
}

pub async fn search_tracks(query: String) {
    let catalog = SpotifyCatalog::from_token_cache().await;
    let favorites = load_favorites().await;
    let tracks = match catalog.search_tracks(&query, 5).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Track search failed. Err: {}", e),
    };

    if tracks.is_empty() {
        info!("No tracks found for '{}'.", query);
        return;
    }

    print_tracks(&tracks, &favorites);
}
