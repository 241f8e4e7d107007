use pulse_core::{resolve_track_list, Track, TrackListError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET the track list body. Any failure maps onto [`TrackListError`].
pub async fn fetch_track_list(url: &str) -> Result<String, TrackListError> {
    let window = web::window().ok_or_else(|| TrackListError::Fetch("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| TrackListError::Fetch(format!("{:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| TrackListError::Fetch(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(TrackListError::Status(resp.status()));
    }
    let text = resp
        .text()
        .map_err(|e| TrackListError::Fetch(format!("{:?}", e)))?;
    JsFuture::from(text)
        .await
        .map_err(|e| TrackListError::Fetch(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| TrackListError::Decode("body is not text".into()))
}

/// Fetch once and fall back to the default list on any failure.
pub async fn load_tracks(url: &str) -> Vec<Track> {
    resolve_track_list(fetch_track_list(url).await)
}
