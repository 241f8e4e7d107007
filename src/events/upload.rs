use crate::constants::{UPLOAD_INPUT_ID, UPLOAD_LABEL_ID};
use crate::dom;
use crate::App;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(crate) fn wire_upload(app: &Rc<App>) -> anyhow::Result<()> {
    let label = dom::element(&app.document, UPLOAD_LABEL_ID)?;
    let input: web::HtmlInputElement = dom::element(&app.document, UPLOAD_INPUT_ID)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    input.set_accept(app.config.upload_accept);

    // Clicks on the upload control must not reach the play/pause surface.
    dom::add_listener(&label, "click", |ev: web::MouseEvent| ev.stop_propagation());

    {
        let app = app.clone();
        dom::add_listener(&input, "change", move |ev: web::Event| {
            ev.prevent_default();
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file(&app, &file);
            }
            // allow picking the same file again
            input.set_value("");
        });
    }

    {
        let app = app.clone();
        dom::add_listener(&label, "dragover", move |ev: web::DragEvent| {
            ev.prevent_default();
            if !app.state.borrow().dragging {
                app.state.borrow_mut().set_dragging(true);
                app.sync_overlay();
            }
        });
    }

    {
        let app = app.clone();
        dom::add_listener(&label, "dragleave", move |ev: web::DragEvent| {
            ev.stop_propagation();
            app.state.borrow_mut().set_dragging(false);
            app.sync_overlay();
        });
    }

    {
        let app = app.clone();
        dom::add_listener(&label, "drop", move |ev: web::DragEvent| {
            ev.prevent_default();
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => accept_file(&app, &file),
                None => {
                    app.state.borrow_mut().set_dragging(false);
                    app.sync_overlay();
                }
            }
        });
    }

    Ok(())
}

fn accept_file(app: &Rc<App>, file: &web::File) {
    // no session will ever own (and revoke) the URL
    if !app.state.borrow().is_mounted() {
        return;
    }
    let url = match web::Url::create_object_url_with_blob(file) {
        Ok(url) => url,
        Err(e) => {
            log::error!("[upload] object url error: {:?}", e);
            return;
        }
    };
    let name = file.name();
    log::info!("[upload] {} ({} bytes)", name, file.size());
    let change = app.state.borrow_mut().accept_upload(&name, url);
    match change {
        Some(change) => app.apply_change(change),
        None => app.sync_overlay(),
    }
}
