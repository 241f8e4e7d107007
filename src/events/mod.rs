use crate::dom;
use crate::App;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod upload;

pub(crate) fn wire_all(app: &Rc<App>) -> anyhow::Result<()> {
    pointer::wire_track_list(app)?;
    pointer::wire_surface(app)?;
    upload::wire_upload(app)?;
    wire_pagehide();
    Ok(())
}

// Leaving the page counts as an unmount, unless it is kept in the bfcache.
fn wire_pagehide() {
    if let Some(w) = web::window() {
        dom::add_listener(&w, "pagehide", move |ev: web::PageTransitionEvent| {
            if pulse_core::unmounts_on_pagehide(ev.persisted()) {
                crate::unmount();
            } else {
                log::info!("[page] hidden into bfcache, keeping session");
            }
        });
    }
}
