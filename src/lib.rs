#![cfg(target_arch = "wasm32")]
use pulse_core::{AppState, Config, SessionSlot, SourceChange};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod session;
mod tracks;

use audio::AudioHooks;
use session::{SessionParams, WebSession};

/// The mounted widget: overlay state plus the one live audio session.
pub(crate) struct App {
    document: web::Document,
    stage: web::Element,
    config: Config,
    state: Rc<RefCell<AppState>>,
    sessions: RefCell<SessionSlot<WebSession>>,
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

impl App {
    pub(crate) fn sync_overlay(&self) {
        overlay::sync(&self.document, &self.state.borrow());
    }

    /// Replace the session for a new audio URL.
    pub(crate) fn apply_change(self: &Rc<Self>, change: SourceChange) {
        if !self.state.borrow().is_mounted() {
            return;
        }
        let SourceChange { url, replaced } = change;
        let result = self.sessions.borrow_mut().replace(&url, |url| {
            WebSession::open(
                url,
                SessionParams {
                    document: &self.document,
                    stage: &self.stage,
                    state: self.state.clone(),
                    fft_size: self.config.fft_size,
                    hooks: self.audio_hooks(),
                },
            )
        });
        if let Some(old) = replaced {
            revoke_if_object_url(&old);
        }
        match result {
            Ok(()) => self.sync_overlay(),
            Err(e) => {
                log::error!("[session] failed to open {}: {:?}", url, e);
                // forget the URL so picking the same source retries
                let failed = self.state.borrow_mut().source_failed();
                if let Some(failed) = failed {
                    revoke_if_object_url(&failed);
                }
                self.on_audio_error();
            }
        }
    }

    fn audio_hooks(self: &Rc<Self>) -> AudioHooks {
        let on_error = {
            let app = Rc::downgrade(self);
            move || with_app(&app, |app| app.on_audio_error())
        };
        let on_loaded = {
            let app = Rc::downgrade(self);
            move || {
                with_app(&app, |app| {
                    app.state.borrow_mut().audio_loaded();
                    app.sync_overlay();
                })
            }
        };
        let on_playing = {
            let app = Rc::downgrade(self);
            move || {
                with_app(&app, |app| {
                    app.state.borrow_mut().audio_playing();
                    app.sync_overlay();
                })
            }
        };
        AudioHooks {
            on_error: Box::new(on_error),
            on_loaded: Box::new(on_loaded),
            on_playing: Box::new(on_playing),
        }
    }

    fn on_audio_error(self: &Rc<Self>) {
        log::warn!("[audio] failed to load {:?}", self.state.borrow().audio_url);
        let generation = self.state.borrow_mut().audio_failed();
        self.sync_overlay();

        let app = Rc::downgrade(self);
        let expire = Closure::once_into_js(move || {
            with_app(&app, |app| {
                app.state.borrow_mut().expire_alert(generation);
                app.sync_overlay();
            })
        });
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                expire.unchecked_ref(),
                self.config.alert_hide_delay_ms,
            );
        }
    }

    pub(crate) fn toggle_pause(&self) {
        let media = self.sessions.borrow().resources().map(|s| s.media());
        let toggled = self.state.borrow_mut().toggle_pause(media.as_ref());
        if !toggled {
            return;
        }
        let paused = self.state.borrow().paused;
        log::info!("[click] paused={}", paused);
        if !paused {
            if let Some(s) = self.sessions.borrow().resources() {
                s.resume_frames();
            }
        }
        self.sync_overlay();
    }

    fn unmount(&self) {
        let last = self.state.borrow_mut().unmount();
        self.sessions.borrow_mut().clear();
        if let Some(url) = last {
            revoke_if_object_url(&url);
        }
        log::info!("unmounted");
    }
}

fn with_app(app: &Weak<App>, f: impl FnOnce(&Rc<App>)) {
    if let Some(app) = app.upgrade() {
        f(&app);
    }
}

fn revoke_if_object_url(url: &str) {
    if url.starts_with("blob:") {
        _ = web::Url::revoke_object_url(url);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pulse-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear down the live session and detach the canvas.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.unmount();
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let stage = dom::element(&document, constants::STAGE_ID)?;

    let (config, errors) = Config::default().with_overrides(|key| stage.get_attribute(key));
    for e in errors {
        log::warn!("[config] ignoring override: {}", e);
    }
    log::info!(
        "[config] tracks={} fft={} alert={}ms",
        config.tracks_url,
        config.fft_size,
        config.alert_hide_delay_ms
    );

    let app = Rc::new(App {
        document,
        stage,
        config,
        state: Rc::new(RefCell::new(AppState::new())),
        sessions: RefCell::new(SessionSlot::new()),
    });
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    events::wire_all(&app)?;
    app.sync_overlay();

    let tracks_url = app.config.tracks_url.clone();
    let weak = Rc::downgrade(&app);
    spawn_local(async move {
        let tracks = tracks::load_tracks(&tracks_url).await;
        with_app(&weak, |app| {
            let change = app.state.borrow_mut().set_tracks(tracks);
            overlay::render_track_list(&app.document, &app.state.borrow());
            if let Some(change) = change {
                app.apply_change(change);
            }
        });
    });

    Ok(())
}
