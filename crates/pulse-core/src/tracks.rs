//! Track list loading with a hardcoded fallback.

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub author: String,
    pub src: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum TrackListError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed track list: {0}")]
    Decode(String),
    #[error("track list is empty")]
    Empty,
}

/// Used whenever the remote list is unavailable or unusable.
pub fn default_tracks() -> Vec<Track> {
    [
        ("1", "稻香", "周杰伦", "https://suminhan.cn/music/daoxiang.mp3"),
        ("2", "小半", "陈粒", "/music/xiaoban.mp3"),
        ("3", "给电影人的情书", "蔡琴", "/music/geidianyingrendeqingshu.mp3"),
    ]
    .into_iter()
    .map(|(id, name, author, src)| Track {
        id: id.to_string(),
        name: name.to_string(),
        author: author.to_string(),
        src: src.to_string(),
    })
    .collect()
}

pub fn parse_track_list(body: &str) -> Result<Vec<Track>, TrackListError> {
    let tracks: Vec<Track> =
        serde_json::from_str(body).map_err(|e| TrackListError::Decode(e.to_string()))?;
    if tracks.is_empty() {
        return Err(TrackListError::Empty);
    }
    Ok(tracks)
}

/// Turn a fetch outcome into the list to show. Never fails.
pub fn resolve_track_list(outcome: Result<String, TrackListError>) -> Vec<Track> {
    match outcome.and_then(|body| parse_track_list(&body)) {
        Ok(tracks) => {
            log::info!("[tracks] loaded {} tracks", tracks.len());
            tracks
        }
        Err(e) => {
            log::warn!("[tracks] falling back to default list: {}", e);
            default_tracks()
        }
    }
}

pub fn find_track<'a>(tracks: &'a [Track], id: &str) -> Option<&'a Track> {
    tracks.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_unknown_fields() {
        let body = r#"[{"id":"a","name":"n","author":"x","src":"/a.mp3","cover":"/a.png"}]"#;
        let tracks = parse_track_list(body).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].src, "/a.mp3");
    }

    #[test]
    fn parse_rejects_entry_missing_src() {
        let body = r#"[{"id":"a","name":"n","author":"x"}]"#;
        assert!(matches!(
            parse_track_list(body),
            Err(TrackListError::Decode(_))
        ));
    }
}
