mod common;

use common::track;
use tastemix::{
    management::FavoritesManager,
    preferences::PopularityRange,
    types::{Artist, Image},
    utils::*,
};

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    assert_ne!(verifier, generate_code_verifier());
}

#[test]
fn test_generate_code_challenge_matches_rfc7636() {
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_generate_code_challenge_is_url_safe() {
    let challenge = generate_code_challenge(&generate_code_verifier());
    assert_eq!(challenge.len(), 43);
    assert!(!challenge.contains('='));
    assert!(!challenge.contains('+'));
    assert!(!challenge.contains('/'));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(180_000), "3:00");
    assert_eq!(format_duration(3_723_000), "62:03");
}

#[test]
fn test_cover_image_url_fixes_host() {
    let mut t = track("a", 50, "2000", "x");
    assert_eq!(cover_image_url(&t), None);

    t.album.images.push(Image {
        url: "https://iscdn.co/image/ab67".to_string(),
        width: Some(640),
        height: Some(640),
    });
    assert_eq!(
        cover_image_url(&t).as_deref(),
        Some("https://i.scdn.co/image/ab67")
    );

    t.album.images[0].url = "https://i.scdn.co/image/cd89".to_string();
    assert_eq!(
        cover_image_url(&t).as_deref(),
        Some("https://i.scdn.co/image/cd89")
    );
}

#[test]
fn test_parse_popularity_range() {
    assert_eq!(parse_popularity_range("viral"), Ok(PopularityRange::VIRAL));
    assert_eq!(parse_popularity_range("ALL"), Ok(PopularityRange::ALL));
    assert_eq!(
        parse_popularity_range("20-60").map(|r| (r.min(), r.max())),
        Ok((20, 60))
    );
    assert_eq!(
        parse_popularity_range(" 10 - 90 ").map(|r| r.to_string()),
        Ok("10-90".to_string())
    );
    assert!(parse_popularity_range("60-20").is_err());
    assert!(parse_popularity_range("0-150").is_err());
    assert!(parse_popularity_range("popular").is_err());
    assert!(parse_popularity_range("a-b").is_err());
}

#[test]
fn test_artist_names_joined() {
    let mut t = track("a", 50, "2000", "x");
    t.artists.push(tastemix::types::TrackArtist {
        id: "y".to_string(),
        name: "Guest".to_string(),
    });
    assert_eq!(artist_names(&t), "Artist x, Guest");
}

#[test]
fn test_track_table_rows_mark_favorites() {
    let list = vec![track("a", 42, "1999-01-01", "x"), track("b", 7, "", "x")];
    let favorites = FavoritesManager::new(Some(vec![track("b", 7, "", "x")]));

    let rows = track_table_rows(&list, &favorites);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].favorite, "☆");
    assert_eq!(rows[0].year, "1999");
    assert_eq!(rows[0].duration, "3:00");
    assert_eq!(rows[0].popularity, 42);
    assert_eq!(rows[1].favorite, "★");
    assert_eq!(rows[1].year, "");
}

#[test]
fn test_artist_table_rows_limit_genres() {
    let artists = vec![Artist {
        id: "id1".to_string(),
        name: "Band".to_string(),
        genres: vec!["rock".into(), "punk".into(), "ska".into(), "pop".into()],
        images: Vec::new(),
    }];

    let rows = artist_table_rows(&artists);
    assert_eq!(rows[0].genres, "rock,punk,ska");
    assert_eq!(rows[0].id, "id1");
}
