/// What one animation-frame callback should do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FramePlan {
    /// Request another animation frame.
    pub reschedule: bool,
    /// Pull analyser data and recompute the particle buffer.
    pub refresh: bool,
    /// Issue the draw call.
    pub draw: bool,
}

/// Decide a frame from the app's pause flag and the element's own state.
///
/// `element_paused` is `None` while no audio element exists. Only an element
/// that reports itself playing moves the particles; an unpaused app still
/// draws the static field while audio loads.
pub fn plan_frame(app_paused: bool, element_paused: Option<bool>) -> FramePlan {
    if app_paused {
        return FramePlan::default();
    }
    FramePlan {
        reschedule: true,
        refresh: element_paused == Some(false),
        draw: true,
    }
}
