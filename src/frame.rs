use crate::audio::AudioPipeline;
use crate::render;
use pulse_core::{plan_frame, AppState, MediaElement, ParticleField};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub audio: Rc<RefCell<AudioPipeline>>,
    pub field: ParticleField,
    pub spectrum: Vec<u8>,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    /// Run one frame. Returns whether another frame should be requested.
    pub fn frame(&mut self) -> bool {
        let app_paused = self.state.borrow().paused;
        let element_paused = self.audio.borrow().media.is_paused();
        let plan = plan_frame(app_paused, Some(element_paused));

        if plan.refresh {
            self.audio.borrow().read_spectrum(&mut self.spectrum);
            self.field.apply_spectrum(&self.spectrum);
        }

        if plan.draw {
            if let Some(g) = &mut self.gpu {
                let updated = plan.refresh.then(|| self.field.instances());
                if let Err(e) = g.render(updated) {
                    log::error!("render error: {:?}", e);
                }
            }
        }
        plan.reschedule
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop over one [`FrameContext`].
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            if frame_ctx.borrow_mut().frame() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    handle_clone.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));
        let frame_loop = Self { tick, handle };
        frame_loop.ensure_running();
        frame_loop
    }

    /// Request a frame unless one is already pending or the loop was stopped.
    pub fn ensure_running(&self) {
        if self.handle.get().is_some() {
            return;
        }
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.handle.set(request_frame(cb));
        }
    }

    /// Cancel the pending frame and drop the callback (and the context it owns).
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
