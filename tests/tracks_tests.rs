// Host-side tests for track list loading and fallback.

use pulse_core::*;

const LIST: &str = r#"[
  {"id":"7","name":"Song","author":"Band","src":"/music/song.mp3"},
  {"id":"8","name":"Other","author":"Band","src":"https://cdn.example.com/other.mp3"}
]"#;

#[test]
fn default_list_has_three_remote_tracks() {
    let tracks = default_tracks();
    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].id, "1");
    assert_eq!(tracks[0].name, "稻香");
    assert_eq!(tracks[0].author, "周杰伦");
    assert!(tracks.iter().all(|t| t.src.ends_with(".mp3")));
    let mut ids: Vec<_> = tracks.iter().map(|t| t.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn non_empty_array_replaces_defaults() {
    let tracks = resolve_track_list(Ok(LIST.to_string()));
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].src, "https://cdn.example.com/other.mp3");
}

#[test]
fn every_failure_falls_back_to_defaults() {
    let outcomes = [
        Err(TrackListError::Fetch("offline".into())),
        Err(TrackListError::Status(404)),
        Ok("[]".to_string()),
        Ok("{\"tracks\":[]}".to_string()),
        Ok("not json".to_string()),
        Ok("null".to_string()),
    ];
    for outcome in outcomes {
        assert_eq!(resolve_track_list(outcome), default_tracks());
    }
}

#[test]
fn empty_array_is_reported_as_empty() {
    assert_eq!(parse_track_list("[]"), Err(TrackListError::Empty));
    assert!(matches!(
        parse_track_list("{}"),
        Err(TrackListError::Decode(_))
    ));
}

#[test]
fn find_track_by_id() {
    let tracks = parse_track_list(LIST).unwrap();
    assert_eq!(find_track(&tracks, "8").unwrap().name, "Other");
    assert!(find_track(&tracks, "1").is_none());
}
