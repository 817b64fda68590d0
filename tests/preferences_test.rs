mod common;

use common::track;
use tastemix::{
    mood,
    preferences::*,
    types::Artist,
};

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: vec!["rock".to_string()],
        images: Vec::new(),
    }
}

#[test]
fn test_defaults() {
    let prefs = Preferences::default();
    assert!(!prefs.has_sources());
    assert_eq!(prefs.popularity, Some(PopularityRange::default()));
    assert_eq!(prefs.popularity.map(|p| (p.min(), p.max())), Some((30, 100)));
    assert!(prefs.mood.is_empty());
}

#[test]
fn test_has_sources_ignores_pure_filters() {
    let mut prefs = Preferences::default();
    prefs.add_decade("1990").unwrap();
    assert!(!prefs.has_sources());

    prefs.add_genre("jazz").unwrap();
    assert!(prefs.has_sources());
}

#[test]
fn test_artist_selection_limit_and_duplicates() {
    let mut prefs = Preferences::default();
    for i in 0..ARTIST_LIMIT {
        prefs
            .add_artist(artist(&format!("a{}", i), &format!("Artist {}", i)))
            .unwrap();
    }

    // re-adding a selected artist is a no-op even at the limit
    assert_eq!(prefs.add_artist(artist("a0", "Artist 0")), Ok(()));
    assert_eq!(
        prefs.add_artist(artist("a9", "Artist 9")),
        Err(PreferenceError::Limit {
            facet: "artists",
            limit: ARTIST_LIMIT
        })
    );
    assert_eq!(prefs.artists.len(), ARTIST_LIMIT);
}

#[test]
fn test_remove_artist_by_id_or_name() {
    let mut prefs = Preferences::default();
    prefs.add_artist(artist("id1", "Miles Davis")).unwrap();
    prefs.add_artist(artist("id2", "Nina Simone")).unwrap();

    assert_eq!(prefs.remove_artist("miles davis").unwrap().id, "id1");
    assert_eq!(prefs.remove_artist("id2").unwrap().name, "Nina Simone");
    assert_eq!(
        prefs.remove_artist("id2"),
        Err(PreferenceError::NotSelected("id2".to_string()))
    );
}

#[test]
fn test_genres_are_normalized_and_validated() {
    let mut prefs = Preferences::default();
    prefs.add_genre(" Hip-Hop ").unwrap();
    prefs.add_genre("hip-hop").unwrap();
    assert_eq!(prefs.genres, vec!["hip-hop"]);

    assert_eq!(
        prefs.add_genre("yacht-rock"),
        Err(PreferenceError::UnknownGenre("yacht-rock".to_string()))
    );

    prefs.remove_genre("HIP-HOP").unwrap();
    assert!(prefs.genres.is_empty());
}

#[test]
fn test_genre_limit() {
    let mut prefs = Preferences::default();
    for g in ["pop", "rock", "jazz", "blues", "soul"] {
        prefs.add_genre(g).unwrap();
    }
    assert!(matches!(
        prefs.add_genre("funk"),
        Err(PreferenceError::Limit { facet: "genres", .. })
    ));
}

#[test]
fn test_decades_accept_chip_labels() {
    let mut prefs = Preferences::default();
    prefs.add_decade("1980s").unwrap();
    prefs.add_decade("1980").unwrap();
    assert_eq!(prefs.decades, vec!["1980"]);

    assert_eq!(
        prefs.add_decade("1940"),
        Err(PreferenceError::UnknownDecade("1940".to_string()))
    );

    for d in ["1950", "1960", "1970", "1990", "2000"] {
        prefs.add_decade(d).unwrap();
    }
    assert!(matches!(
        prefs.add_decade("2010"),
        Err(PreferenceError::Limit { limit: DECADE_LIMIT, .. })
    ));

    prefs.remove_decade("1980s").unwrap();
    assert_eq!(prefs.decades.len(), DECADE_LIMIT - 1);
}

#[test]
fn test_seed_tracks() {
    let mut prefs = Preferences::default();
    for i in 0..TRACK_LIMIT {
        prefs
            .add_track(track(&format!("t{}", i), 50, "2000", "a"))
            .unwrap();
    }
    assert!(prefs.has_sources());
    assert!(prefs.add_track(track("t9", 50, "2000", "a")).is_err());
    assert_eq!(prefs.remove_track("Track t2").unwrap().id, "t2");
}

#[test]
fn test_popularity_range_validation() {
    assert!(PopularityRange::new(0, 100).is_ok());
    assert!(PopularityRange::new(50, 50).is_ok());
    assert_eq!(
        PopularityRange::new(60, 40),
        Err(PreferenceError::InvalidRange { min: 60, max: 40 })
    );
    assert!(PopularityRange::new(-1, 10).is_err());
    assert!(PopularityRange::new(0, 101).is_err());
}

#[test]
fn test_popularity_slider_clamps() {
    let range = PopularityRange::new(30, 70).unwrap();

    let raised = range.with_min(90);
    assert_eq!((raised.min(), raised.max()), (70, 70));

    let lowered = range.with_max(-5);
    assert_eq!((lowered.min(), lowered.max()), (30, 30));

    let widened = range.with_min(-10).with_max(500);
    assert_eq!(widened, PopularityRange::ALL);
}

#[test]
fn test_popularity_presets() {
    assert_eq!(PopularityRange::preset("Viral"), Some(PopularityRange::VIRAL));
    assert_eq!(PopularityRange::preset("hits").map(|p| p.to_string()), Some("50-80".to_string()));
    assert_eq!(PopularityRange::preset("niche"), Some(PopularityRange::NICHE));
    assert_eq!(PopularityRange::preset("mainstream"), None);
    assert!(PopularityRange::VIRAL.contains(80));
    assert!(!PopularityRange::VIRAL.contains(79));
}

#[test]
fn test_list_genres_popular_first() {
    let genres = list_genres(None);
    assert_eq!(genres.len(), ALL_GENRES.len());
    assert!(genres[..POPULAR_GENRES.len()].iter().all(|g| is_popular_genre(g)));

    let rest = &genres[POPULAR_GENRES.len()..];
    assert!(rest.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_list_genres_filter() {
    let metal = list_genres(Some("Metal"));
    assert!(!metal.is_empty());
    assert!(metal.iter().all(|g| g.contains("metal")));
    assert!(list_genres(Some("zzz")).is_empty());
}

#[test]
fn test_preferences_serde_defaults() {
    let prefs: Preferences = serde_json::from_str(r#"{"genres":["jazz"]}"#).unwrap();
    assert_eq!(prefs.genres, vec!["jazz"]);
    assert!(prefs.artists.is_empty());
    assert_eq!(prefs.popularity, None);
}

#[test]
fn test_mood_presets() {
    let happy = mood::find("Happy").unwrap();
    let thresholds = happy.thresholds();
    assert_eq!(thresholds.get("min_valence"), Some(&0.7));
    assert_eq!(thresholds.get("min_energy"), Some(&0.6));
    assert_eq!(mood::active(&thresholds).map(|p| p.id), Some("happy"));
    assert!(mood::find("angry").is_none());
}

#[test]
fn test_mood_toggle() {
    let happy = mood::find("happy").unwrap();
    let calm = mood::find("calm").unwrap();

    let on = mood::toggle(&MoodThresholds::new(), happy);
    assert_eq!(on, happy.thresholds());

    let switched = mood::toggle(&on, calm);
    assert_eq!(switched, calm.thresholds());

    let off = mood::toggle(&switched, calm);
    assert!(off.is_empty());
}

#[test]
fn test_mood_describe() {
    let calm = mood::find("calm").unwrap().thresholds();
    assert_eq!(mood::describe(&calm), "Max energy: 0.3 • Max tempo: 100");
    assert_eq!(mood::describe(&MoodThresholds::new()), "");
}
