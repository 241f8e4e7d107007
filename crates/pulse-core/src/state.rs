//! Playback and overlay state.
//!
//! Holds everything the overlay shows and decides when the audio URL changes.
//! The web frontend applies the returned [`SourceChange`] by replacing the
//! current session, then re-renders the overlay from this state.

use crate::constants::AUDIO_NOT_FOUND;
use crate::tracks::{find_track, Track};

/// Minimal control surface of a playable element.
pub trait MediaElement {
    /// Wake the output path, e.g. a suspended audio context, before playing.
    fn resume_output(&self);
    fn play(&self);
    fn pause(&self);
    fn is_paused(&self) -> bool;
}

/// The audio URL moved; a new session is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceChange {
    pub url: String,
    /// URL that was active before, if any.
    pub replaced: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub tracks: Vec<Track>,
    pub current_track: Option<String>,
    pub audio_url: Option<String>,
    pub paused: bool,
    pub loading: bool,
    pub alert: Option<Alert>,
    pub upload_name: Option<String>,
    pub uploading: bool,
    pub dragging: bool,
    alert_generation: u64,
    unmounted: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list. A selection made before the list arrived is
    /// resolved against the new list.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) -> Option<SourceChange> {
        self.tracks = tracks;
        if self.unmounted {
            return None;
        }
        let id = self.current_track.clone()?;
        self.resolve_selection(&id)
    }

    pub fn select_track(&mut self, id: &str) -> Option<SourceChange> {
        if self.unmounted {
            return None;
        }
        self.current_track = Some(id.to_string());
        self.upload_name = None;
        self.resolve_selection(id)
    }

    fn resolve_selection(&mut self, id: &str) -> Option<SourceChange> {
        let src = find_track(&self.tracks, id)?.src.clone();
        if self.audio_url.as_deref() == Some(src.as_str()) {
            return None;
        }
        self.loading = true;
        self.uploading = false;
        Some(self.switch_url(src))
    }

    /// Start playing a locally picked file through its object URL.
    ///
    /// `uploading` stays raised until the element reports data or an error.
    pub fn accept_upload(&mut self, file_name: &str, object_url: String) -> Option<SourceChange> {
        if self.unmounted {
            return None;
        }
        self.uploading = true;
        self.dragging = false;
        self.current_track = None;
        self.upload_name = Some(file_name.to_string());
        self.loading = true;
        Some(self.switch_url(object_url))
    }

    /// The session for the current URL could not be opened. Forgets the URL
    /// so the same source can be picked again; returns it for cleanup.
    pub fn source_failed(&mut self) -> Option<String> {
        self.uploading = false;
        self.audio_url.take()
    }

    fn switch_url(&mut self, url: String) -> SourceChange {
        let replaced = self.audio_url.replace(url.clone());
        SourceChange { url, replaced }
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Flip play/pause on `element`. Returns `false` when there is nothing to toggle.
    pub fn toggle_pause<M: MediaElement>(&mut self, element: Option<&M>) -> bool {
        if self.unmounted {
            return false;
        }
        let Some(el) = element else {
            return false;
        };
        if self.paused {
            el.resume_output();
            el.play();
        } else {
            el.pause();
        }
        self.paused = !self.paused;
        true
    }

    /// Audio failed to load. Returns the generation to pass to [`Self::expire_alert`].
    pub fn audio_failed(&mut self) -> u64 {
        self.alert_generation += 1;
        self.alert = Some(Alert {
            message: AUDIO_NOT_FOUND.to_string(),
            generation: self.alert_generation,
        });
        self.loading = false;
        self.uploading = false;
        self.alert_generation
    }

    pub fn audio_loaded(&mut self) {
        self.alert = None;
        self.uploading = false;
    }

    pub fn audio_playing(&mut self) {
        self.loading = false;
    }

    /// Clear the alert raised as `generation`; a newer alert stays up.
    pub fn expire_alert(&mut self, generation: u64) {
        if self
            .alert
            .as_ref()
            .is_some_and(|a| a.generation == generation)
        {
            self.alert = None;
        }
    }

    pub fn alert_message(&self) -> &str {
        self.alert.as_ref().map(|a| a.message.as_str()).unwrap_or("")
    }

    pub fn is_active(&self, track: &Track) -> bool {
        self.current_track.as_deref() == Some(track.id.as_str())
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted
    }

    /// Stop accepting new sources. Returns the last URL for cleanup.
    pub fn unmount(&mut self) -> Option<String> {
        self.unmounted = true;
        self.uploading = false;
        self.dragging = false;
        self.loading = false;
        self.audio_url.take()
    }
}
