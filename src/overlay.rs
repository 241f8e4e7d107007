use crate::constants::*;
use crate::dom;
use pulse_core::AppState;
use web_sys as web;

/// Rebuild the track list. Called only when the list itself is replaced.
pub fn render_track_list(document: &web::Document, state: &AppState) {
    let Some(list) = document.get_element_by_id(TRACK_LIST_ID) else {
        return;
    };
    list.set_inner_html("");
    for track in &state.tracks {
        let Ok(item) = document.create_element("div") else {
            continue;
        };
        item.set_class_name(TRACK_ITEM_CLASS);
        _ = item.set_attribute(TRACK_ID_ATTR, &track.id);
        item.set_text_content(Some(&format!("{} - {}", track.name, track.author)));
        _ = list.append_child(&item);
    }
    sync(document, state);
}

/// Bring every overlay element in line with `state`.
pub fn sync(document: &web::Document, state: &AppState) {
    if let Some(list) = document.get_element_by_id(TRACK_LIST_ID) {
        let items = list.children();
        for i in 0..items.length() {
            let Some(item) = items.item(i) else {
                continue;
            };
            let active = item
                .get_attribute(TRACK_ID_ATTR)
                .is_some_and(|id| state.current_track.as_deref() == Some(id.as_str()));
            _ = item.class_list().toggle_with_force(TRACK_ACTIVE_CLASS, active);
        }
    }

    let upload_text = if state.uploading {
        UPLOAD_BUSY
    } else if state.dragging {
        UPLOAD_RELEASE
    } else {
        state.upload_name.as_deref().unwrap_or(UPLOAD_PROMPT)
    };
    dom::set_text(document, UPLOAD_TEXT_ID, upload_text);

    dom::set_visible(document, LOADING_ID, state.loading);
    if state.loading {
        dom::set_text(document, LOADING_ID, LOADING_TEXT);
    }

    if let Some(el) = document.get_element_by_id(ALERT_ID) {
        let msg = state.alert_message();
        el.set_text_content(Some(msg));
        let opacity = if msg.is_empty() { "0" } else { "1" };
        _ = el.set_attribute(
            "style",
            &format!("opacity:{};transition:opacity 0.2s linear", opacity),
        );
    }
}
