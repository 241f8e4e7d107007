// Element ids and classes expected in index.html.

pub const STAGE_ID: &str = "stage"; // canvas container, also carries data-* config
pub const SURFACE_ID: &str = "surface"; // full-screen click target for play/pause
pub const TRACK_LIST_ID: &str = "track-list";
pub const UPLOAD_LABEL_ID: &str = "upload-label";
pub const UPLOAD_INPUT_ID: &str = "upload-input";
pub const UPLOAD_TEXT_ID: &str = "upload-text";
pub const LOADING_ID: &str = "loading";
pub const ALERT_ID: &str = "alert";

pub const TRACK_ITEM_CLASS: &str = "track";
pub const TRACK_ACTIVE_CLASS: &str = "active";
pub const TRACK_ID_ATTR: &str = "data-track-id";

// Overlay copy
pub const LOADING_TEXT: &str = "Loading…";
pub const UPLOAD_PROMPT: &str = "Click here to upload an audio file";
pub const UPLOAD_RELEASE: &str = "Release to upload";
pub const UPLOAD_BUSY: &str = "Uploading";
