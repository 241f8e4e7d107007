use crate::constants::{SURFACE_ID, TRACK_ID_ATTR, TRACK_LIST_ID};
use crate::dom;
use crate::App;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One delegated listener on the list; items are rebuilt whenever the list is replaced.
pub(crate) fn wire_track_list(app: &Rc<App>) -> anyhow::Result<()> {
    let list = dom::element(&app.document, TRACK_LIST_ID)?;
    let app = app.clone();
    dom::add_listener(&list, "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        let Some(id) = clicked_track_id(&ev) else {
            return;
        };
        log::info!("[click] select track {}", id);
        let change = app.state.borrow_mut().select_track(&id);
        match change {
            Some(change) => app.apply_change(change),
            None => app.sync_overlay(),
        }
    });
    Ok(())
}

fn clicked_track_id(ev: &web::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let item = target
        .closest(&format!("[{}]", TRACK_ID_ATTR))
        .ok()
        .flatten()?;
    item.get_attribute(TRACK_ID_ATTR)
}

pub(crate) fn wire_surface(app: &Rc<App>) -> anyhow::Result<()> {
    let surface = dom::element(&app.document, SURFACE_ID)?;
    let app = app.clone();
    dom::add_listener(&surface, "click", move |_: web::MouseEvent| {
        app.toggle_pause();
    });
    Ok(())
}
