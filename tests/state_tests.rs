// Host-side tests for playback and overlay state.

use pulse_core::*;
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct MockMedia {
    calls: RefCell<Vec<&'static str>>,
    paused: Cell<bool>,
}

impl MediaElement for MockMedia {
    fn resume_output(&self) {
        self.calls.borrow_mut().push("resume");
    }
    fn play(&self) {
        self.calls.borrow_mut().push("play");
        self.paused.set(false);
    }
    fn pause(&self) {
        self.calls.borrow_mut().push("pause");
        self.paused.set(true);
    }
    fn is_paused(&self) -> bool {
        self.paused.get()
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    assert!(state.set_tracks(default_tracks()).is_none());
    state
}

#[test]
fn initial_state_is_idle() {
    let state = AppState::new();
    assert!(state.current_track.is_none());
    assert!(state.audio_url.is_none());
    assert!(!state.paused && !state.loading && !state.dragging && !state.uploading);
    assert_eq!(state.alert_message(), "");
}

#[test]
fn selecting_a_track_resolves_its_source() {
    let mut state = loaded_state();
    let change = state.select_track("2").unwrap();
    assert_eq!(change.url, "/music/xiaoban.mp3");
    assert_eq!(change.replaced, None);
    assert_eq!(state.audio_url.as_deref(), Some("/music/xiaoban.mp3"));
    assert!(state.loading);
    assert!(state.is_active(&state.tracks[1].clone()));
    assert!(!state.is_active(&state.tracks[0].clone()));
}

#[test]
fn switching_tracks_reports_the_replaced_url() {
    let mut state = loaded_state();
    state.select_track("1");
    let change = state.select_track("3").unwrap();
    assert_eq!(change.replaced.as_deref(), Some(default_tracks()[0].src.as_str()));
}

#[test]
fn reselecting_the_playing_track_is_a_no_op() {
    let mut state = loaded_state();
    state.select_track("1");
    state.audio_playing();
    assert!(state.select_track("1").is_none());
    assert!(!state.loading);
}

#[test]
fn unknown_track_changes_selection_but_not_audio() {
    let mut state = loaded_state();
    assert!(state.select_track("nope").is_none());
    assert_eq!(state.current_track.as_deref(), Some("nope"));
    assert!(state.audio_url.is_none());
}

#[test]
fn selection_made_before_list_arrives_resolves_later() {
    let mut state = AppState::new();
    assert!(state.select_track("2").is_none());
    let change = state.set_tracks(default_tracks()).unwrap();
    assert_eq!(change.url, "/music/xiaoban.mp3");
}

#[test]
fn upload_clears_track_selection() {
    let mut state = loaded_state();
    state.select_track("1");
    state.set_dragging(true);
    let change = state
        .accept_upload("mine.mp3", "blob:http://localhost/abc".into())
        .unwrap();
    assert_eq!(change.url, "blob:http://localhost/abc");
    assert!(change.replaced.is_some());
    assert!(state.current_track.is_none());
    assert_eq!(state.upload_name.as_deref(), Some("mine.mp3"));
    assert!(state.uploading && !state.dragging);
    assert!(state.tracks.iter().all(|t| !state.is_active(t)));
    assert!(state.tracks.iter().all(|t| Some(&t.src) != state.audio_url.as_ref()));
}

#[test]
fn selecting_a_track_after_upload_clears_file_name() {
    let mut state = loaded_state();
    state.accept_upload("mine.mp3", "blob:x".into());
    let change = state.select_track("1").unwrap();
    assert_eq!(change.replaced.as_deref(), Some("blob:x"));
    assert!(state.upload_name.is_none());
}

#[test]
fn toggle_without_element_does_nothing() {
    let mut state = loaded_state();
    assert!(!state.toggle_pause::<MockMedia>(None));
    assert!(!state.paused);
}

#[test]
fn toggle_pauses_then_resumes_element() {
    let mut state = loaded_state();
    let media = MockMedia::default();
    assert!(state.toggle_pause(Some(&media)));
    assert!(state.paused);
    assert!(media.is_paused());
    assert!(state.toggle_pause(Some(&media)));
    assert!(!state.paused);
    assert_eq!(*media.calls.borrow(), vec!["pause", "resume", "play"]);
}

#[test]
fn uploading_flag_holds_until_element_reports() {
    let mut state = loaded_state();
    state.accept_upload("a.mp3", "blob:a".into());
    assert!(state.uploading);
    state.audio_loaded();
    assert!(!state.uploading);

    state.accept_upload("b.mp3", "blob:b".into());
    state.audio_failed();
    assert!(!state.uploading);
}

#[test]
fn picking_a_track_ends_an_upload() {
    let mut state = loaded_state();
    state.accept_upload("a.mp3", "blob:a".into());
    state.select_track("2");
    assert!(!state.uploading);
}

#[test]
fn failed_open_lets_the_same_track_retry() {
    let mut state = loaded_state();
    state.select_track("1");
    assert_eq!(
        state.source_failed().as_deref(),
        Some(default_tracks()[0].src.as_str())
    );
    state.audio_failed();
    let retry = state.select_track("1").unwrap();
    assert_eq!(retry.url, default_tracks()[0].src);
    assert_eq!(retry.replaced, None);
}

#[test]
fn failed_upload_hands_back_object_url() {
    let mut state = loaded_state();
    state.accept_upload("a.mp3", "blob:a".into());
    assert_eq!(state.source_failed().as_deref(), Some("blob:a"));
    assert!(!state.uploading);
    assert!(state.audio_url.is_none());
}

#[test]
fn unmounted_state_ignores_new_sources() {
    let mut state = loaded_state();
    state.select_track("1");
    assert!(state.is_mounted());
    assert_eq!(
        state.unmount().as_deref(),
        Some(default_tracks()[0].src.as_str())
    );
    assert!(!state.is_mounted());

    assert!(state.select_track("2").is_none());
    assert!(state.accept_upload("late.mp3", "blob:late".into()).is_none());
    assert!(state.set_tracks(default_tracks()).is_none());
    assert!(state.audio_url.is_none());
    assert!(!state.loading && !state.uploading);

    let media = MockMedia::default();
    assert!(!state.toggle_pause(Some(&media)));
    assert!(media.calls.borrow().is_empty());
}

#[test]
fn audio_error_raises_alert_and_stops_loading() {
    let mut state = loaded_state();
    state.select_track("1");
    let generation = state.audio_failed();
    assert_eq!(state.alert_message(), "Audio not found");
    assert!(!state.loading);
    state.expire_alert(generation);
    assert_eq!(state.alert_message(), "");
}

#[test]
fn stale_expiry_keeps_newer_alert() {
    let mut state = loaded_state();
    let first = state.audio_failed();
    let second = state.audio_failed();
    assert_ne!(first, second);
    state.expire_alert(first);
    assert_eq!(state.alert_message(), "Audio not found");
    state.expire_alert(second);
    assert!(state.alert.is_none());
}

#[test]
fn loaded_data_clears_alert_and_playing_clears_loading() {
    let mut state = loaded_state();
    state.select_track("1");
    state.audio_failed();
    state.audio_loaded();
    assert!(state.alert.is_none());
    state.select_track("2");
    assert!(state.loading);
    state.audio_playing();
    assert!(!state.loading);
}
