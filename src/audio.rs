use pulse_core::MediaElement;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Thin wrapper so the core playback logic can drive a real `<audio>`.
///
/// The element only reaches the speakers through `audio_ctx`, so the context
/// travels with it.
#[derive(Clone)]
pub struct MediaHandle {
    element: web::HtmlAudioElement,
    audio_ctx: web::AudioContext,
}

impl MediaElement for MediaHandle {
    // A context created outside a user gesture (e.g. from a drop) starts suspended.
    fn resume_output(&self) {
        match self.audio_ctx.resume() {
            Ok(promise) => settle_in_background(promise, "resume"),
            Err(e) => log::warn!("[audio] resume error: {:?}", e),
        }
    }

    fn play(&self) {
        match self.element.play() {
            Ok(promise) => settle_in_background(promise, "play"),
            Err(e) => log::warn!("[audio] play error: {:?}", e),
        }
    }

    fn pause(&self) {
        _ = self.element.pause();
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }
}

/// Callbacks fired by the element while it loads.
pub struct AudioHooks {
    pub on_error: Box<dyn FnMut()>,
    pub on_loaded: Box<dyn FnMut()>,
    pub on_playing: Box<dyn FnMut()>,
}

/// One element, one context, one analyser; created and released together.
pub struct AudioPipeline {
    pub media: MediaHandle,
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl AudioPipeline {
    pub fn open(url: &str, fft_size: u32, paused: bool, hooks: AudioHooks) -> anyhow::Result<Self> {
        let element =
            web::HtmlAudioElement::new_with_src(url).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_loop(true);

        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let analyser = match route_through_analyser(&audio_ctx, &element, fft_size) {
            Ok(a) => a,
            Err(e) => {
                _ = audio_ctx.close();
                return Err(e);
            }
        };

        let AudioHooks {
            on_error,
            on_loaded,
            on_playing,
        } = hooks;
        let listeners: Vec<(&'static str, Closure<dyn FnMut()>)> = vec![
            ("error", Closure::wrap(on_error)),
            ("loadeddata", Closure::wrap(on_loaded)),
            ("playing", Closure::wrap(on_playing)),
        ];
        for (event, closure) in &listeners {
            _ = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }

        let media = MediaHandle {
            element,
            audio_ctx: audio_ctx.clone(),
        };
        media.resume_output();
        if !paused {
            media.play();
        }
        log::info!(
            "[audio] opened fft={} bins={} paused={}",
            analyser.fft_size(),
            analyser.frequency_bin_count(),
            paused
        );

        Ok(Self {
            media,
            audio_ctx,
            analyser,
            listeners,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    /// Fill `buf` with byte magnitudes; `buf` is resized to the bin count if needed.
    pub fn read_spectrum(&self, buf: &mut Vec<u8>) {
        let bins = self.bin_count();
        if buf.len() != bins {
            buf.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(buf);
    }

    pub fn pause(&self) {
        self.media.pause();
    }

    /// Detach listeners and close the context. The element itself is left paused.
    pub fn close(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            _ = self
                .media
                .element
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        match self.audio_ctx.close() {
            Ok(promise) => settle_in_background(promise, "close"),
            Err(e) => log::warn!("[audio] close error: {:?}", e),
        }
    }
}

// Autoplay refusals and late close failures only get logged.
fn settle_in_background(promise: js_sys::Promise, what: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] {} rejected: {:?}", what, e);
        }
    });
}

// element -> analyser -> destination
fn route_through_analyser(
    audio_ctx: &web::AudioContext,
    element: &web::HtmlAudioElement,
    fft_size: u32,
) -> anyhow::Result<web::AnalyserNode> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| {
        log::error!("AnalyserNode error: {:?}", e);
        anyhow::anyhow!("{:?}", e)
    })?;
    analyser.set_fft_size(fft_size);
    let source = audio_ctx
        .create_media_element_source(element)
        .map_err(|e| anyhow::anyhow!("MediaElementSource error: {:?}", e))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    analyser
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(analyser)
}
