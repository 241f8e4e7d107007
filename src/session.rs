use crate::audio::{AudioHooks, AudioPipeline, MediaHandle};
use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::GpuState;
use pulse_core::{ParticleField, SessionResources};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything owned by one audio URL: element + context + analyser, canvas,
/// frame loop. Released through [`SessionResources`].
pub struct WebSession {
    audio: Rc<RefCell<AudioPipeline>>,
    canvas: web::HtmlCanvasElement,
    stage: web::Element,
    frame_loop: FrameLoop,
}

pub struct SessionParams<'a> {
    pub document: &'a web::Document,
    pub stage: &'a web::Element,
    pub state: Rc<RefCell<pulse_core::AppState>>,
    pub fft_size: u32,
    pub hooks: AudioHooks,
}

impl WebSession {
    pub fn open(url: &str, params: SessionParams<'_>) -> anyhow::Result<Self> {
        let SessionParams {
            document,
            stage,
            state,
            fft_size,
            hooks,
        } = params;

        let canvas = dom::create_viewport_canvas(document)?;
        stage
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("attach canvas: {:?}", e))?;

        let paused = state.borrow().paused;
        let audio = match AudioPipeline::open(url, fft_size, paused, hooks) {
            Ok(a) => Rc::new(RefCell::new(a)),
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };

        let field = ParticleField::new();
        let spectrum = vec![0u8; audio.borrow().bin_count()];
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            state,
            audio: audio.clone(),
            field,
            spectrum,
            gpu: None,
        }));
        spawn_gpu_init(canvas.clone(), Rc::downgrade(&frame_ctx));
        let frame_loop = FrameLoop::start(frame_ctx);

        Ok(Self {
            audio,
            canvas,
            stage: stage.clone(),
            frame_loop,
        })
    }

    pub fn media(&self) -> MediaHandle {
        self.audio.borrow().media.clone()
    }

    pub fn resume_frames(&self) {
        self.frame_loop.ensure_running();
    }
}

// The GPU comes up asynchronously; a session torn down meanwhile drops the result.
fn spawn_gpu_init(canvas: web::HtmlCanvasElement, frame_ctx: Weak<RefCell<FrameContext>>) {
    spawn_local(async move {
        let instances = match frame_ctx.upgrade() {
            Some(ctx) => ctx.borrow().field.instances().to_vec(),
            None => return,
        };
        match GpuState::new(&canvas, &instances).await {
            Ok(gpu) => match frame_ctx.upgrade() {
                Some(ctx) => ctx.borrow_mut().gpu = Some(gpu),
                None => log::info!("[gpu] session closed before init finished"),
            },
            Err(e) => log::error!("WebGPU init error: {:?}", e),
        }
    });
}

impl SessionResources for WebSession {
    fn cancel_frame(&mut self) {
        self.frame_loop.stop();
    }

    fn pause_audio(&mut self) {
        self.audio.borrow().pause();
    }

    fn close_audio(&mut self) {
        self.audio.borrow_mut().close();
    }

    fn detach_surface(&mut self) {
        if self.canvas.parent_node().is_some() {
            _ = self.stage.remove_child(&self.canvas);
        }
    }
}
