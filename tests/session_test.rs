mod common;

use common::{ids, track, tracks};
use tastemix::management::{FavoritesManager, PlaylistState, SessionManager};

#[test]
fn test_session_starts_not_generated() {
    let session = SessionManager::default();
    assert_eq!(session.state(), &PlaylistState::NotGenerated);
    assert!(!session.state().is_generated());
    assert!(!session.state().is_empty_result());
    assert!(session.tracks().is_empty());
}

#[test]
fn test_empty_generation_is_distinct_from_not_generated() {
    let mut session = SessionManager::default();
    session.replace(Vec::new());

    assert!(session.state().is_generated());
    assert!(session.state().is_empty_result());
    assert_ne!(session.state(), &PlaylistState::NotGenerated);
}

#[test]
fn test_replace_discards_previous_result() {
    let mut session = SessionManager::default();
    session.replace(tracks("a", 3));
    session.replace(tracks("b", 2));
    assert_eq!(ids(session.tracks()), vec!["b0", "b1"]);
}

#[test]
fn test_merge_more_appends_only_new_ids() {
    let mut session = SessionManager::default();
    session.replace(tracks("t", 3));

    let mut more = tracks("t", 2);
    more.push(track("new", 50, "2000", "x"));
    let added = session.merge_more(more);

    assert_eq!(added, 1);
    assert_eq!(ids(session.tracks()), vec!["t0", "t1", "t2", "new"]);
}

#[test]
fn test_merge_more_without_previous_generation() {
    let mut session = SessionManager::default();
    assert_eq!(session.merge_more(tracks("t", 2)), 2);
    assert!(session.state().is_generated());
}

#[test]
fn test_add_and_remove_single_tracks() {
    let mut session = SessionManager::new(PlaylistState::Generated(tracks("t", 2)));

    assert!(session.add_track(track("x", 50, "2000", "a")));
    assert!(!session.add_track(track("x", 50, "2000", "a")));
    assert!(session.find("x").is_some());

    assert_eq!(session.remove_track("t0").map(|t| t.id), Some("t0".to_string()));
    assert!(session.remove_track("t0").is_none());
    assert_eq!(ids(session.tracks()), vec!["t1", "x"]);
}

#[test]
fn test_remove_from_not_generated_is_none() {
    let mut session = SessionManager::default();
    assert!(session.remove_track("t0").is_none());
}

#[test]
fn test_playlist_state_serialization() {
    let state = PlaylistState::Generated(vec![track("a", 50, "2000", "x")]);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["state"], "generated");
    assert_eq!(json["tracks"][0]["id"], "a");

    let restored: PlaylistState = serde_json::from_value(json).unwrap();
    assert_eq!(restored, state);

    let empty = serde_json::to_value(PlaylistState::NotGenerated).unwrap();
    assert_eq!(empty["state"], "not_generated");
}

#[test]
fn test_favorites_toggle() {
    let mut favorites = FavoritesManager::default();

    assert!(favorites.toggle(track("a", 50, "2000", "x")));
    assert!(favorites.toggle(track("b", 50, "2000", "x")));
    assert!(favorites.is_favorite("a"));
    assert_eq!(favorites.count(), 2);

    assert!(!favorites.toggle(track("a", 50, "2000", "x")));
    assert!(!favorites.is_favorite("a"));
    assert_eq!(ids(favorites.all()), vec!["b"]);
    assert!(favorites.get("b").is_some());
}
