//! Disposable per-URL sessions.
//!
//! A session bundles the audio element, its processing context, the frame
//! callback and the rendering surface. They are acquired together and released
//! together; dropping a [`Session`] releases everything.

/// Release hooks for the platform handles owned by one session.
pub trait SessionResources {
    fn cancel_frame(&mut self);
    fn pause_audio(&mut self);
    fn close_audio(&mut self);
    fn detach_surface(&mut self);
}

pub struct Session<R: SessionResources> {
    url: String,
    resources: Option<R>,
}

impl<R: SessionResources> Session<R> {
    pub fn new(url: impl Into<String>, resources: R) -> Self {
        Self {
            url: url.into(),
            resources: Some(resources),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn resources(&self) -> Option<&R> {
        self.resources.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.resources.is_some()
    }

    /// Release all handles. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(mut r) = self.resources.take() {
            log::info!("[session] teardown {}", self.url);
            r.cancel_frame();
            r.pause_audio();
            r.close_audio();
            r.detach_surface();
        }
    }
}

impl<R: SessionResources> Drop for Session<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Holds at most one live session.
pub struct SessionSlot<R: SessionResources> {
    current: Option<Session<R>>,
}

impl<R: SessionResources> Default for SessionSlot<R> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<R: SessionResources> SessionSlot<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear down the current session, then build one for `url`.
    ///
    /// The old session is fully released before `build` runs. If `build`
    /// fails the slot stays empty.
    pub fn replace<E>(
        &mut self,
        url: &str,
        build: impl FnOnce(&str) -> Result<R, E>,
    ) -> Result<(), E> {
        self.clear();
        let resources = build(url)?;
        log::info!("[session] open {}", url);
        self.current = Some(Session::new(url, resources));
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(mut s) = self.current.take() {
            s.teardown();
        }
    }

    pub fn current(&self) -> Option<&Session<R>> {
        self.current.as_ref()
    }

    pub fn resources(&self) -> Option<&R> {
        self.current.as_ref().and_then(|s| s.resources())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// A `pagehide` into the back/forward cache keeps the page alive for a later
/// restore; only a real unload tears the widget down.
pub fn unmounts_on_pagehide(persisted: bool) -> bool {
    !persisted
}
