//! The image performance listener
//!
//! Translates each lifecycle callback into tracker mutation plus a
//! dispatched notification, per the transition table:
//!
//! ```text
//! on_submit                 -> Requested              (+ Visible)
//! on_intermediate_image_set -> IntermediateAvailable
//! on_final_image_set        -> Success
//! on_failure                -> Error                  (+ Invisible)
//! on_release                -> Canceled unless the status is already
//!                              terminal               (+ Invisible, always)
//! on_image_drawn            -> Draw
//! on_empty_event            -> EmptyEvent (notifier called directly)
//! ```

use std::sync::Arc;

use perf_dispatch::{
    AsyncPolicy, DispatchQueue, EventDispatcher, MonotonicClock, PerfNotifier,
};
use perf_state::{
    CallerContext, DimensionsInfo, ErrorCause, Extras, ImageInfo, ImageLoadStatus,
    ImagePerfState, VisibilityState,
};

use crate::controller::ControllerListener;

/// Performance listener for one image controller
///
/// Owns the lifecycle tracker exclusively; the hosting platform
/// serializes callbacks into a given listener instance. Notifications
/// go out through an [`EventDispatcher`] that snapshots the tracker
/// before every delivery.
pub struct ImagePerfListener {
    state: ImagePerfState,
    clock: Arc<dyn MonotonicClock>,
    dispatcher: EventDispatcher,
}

impl ImagePerfListener {
    /// Create a listener dispatching through the process-wide worker
    pub fn new(
        clock: Arc<dyn MonotonicClock>,
        notifier: Arc<dyn PerfNotifier>,
        policy: Arc<dyn AsyncPolicy>,
    ) -> Self {
        Self {
            state: ImagePerfState::new(),
            clock,
            dispatcher: EventDispatcher::with_global_worker(notifier, policy),
        }
    }

    /// Create a listener with an explicit dispatch queue
    pub fn with_queue(
        clock: Arc<dyn MonotonicClock>,
        notifier: Arc<dyn PerfNotifier>,
        policy: Arc<dyn AsyncPolicy>,
        queue: Arc<dyn DispatchQueue>,
    ) -> Self {
        Self {
            state: ImagePerfState::new(),
            clock,
            dispatcher: EventDispatcher::new(notifier, policy, queue),
        }
    }

    /// Read access to the lifecycle tracker
    pub fn state(&self) -> &ImagePerfState {
        &self.state
    }

    /// Clear the tracker back to its freshly-constructed condition
    ///
    /// Idempotent; callable at any point in the lifecycle.
    pub fn reset_state(&mut self) {
        self.state.reset();
    }

    /// Close the listener
    ///
    /// Resets the tracker. Does not stop the shared log worker: that
    /// thread is process-wide and may serve other listener instances.
    pub fn close(&mut self) {
        self.reset_state();
    }

    fn report_view_visible(&mut self, now: u64) {
        self.state.visible = true;
        self.state.visibility_event_time_ms = Some(now);

        self.dispatcher
            .update_visibility(&self.state, VisibilityState::Visible);
    }

    fn report_view_invisible(&mut self, now: u64) {
        self.state.visible = false;
        self.state.invisibility_event_time_ms = Some(now);

        self.dispatcher
            .update_visibility(&self.state, VisibilityState::Invisible);
    }
}

impl ControllerListener for ImagePerfListener {
    fn on_submit(
        &mut self,
        id: &str,
        caller_context: Option<CallerContext>,
        extras: Option<Extras>,
    ) {
        let now = self.clock.now_ms();

        // Full reset first: nothing from the previous request may
        // survive into the new lifecycle
        self.state.reset_point_timestamps();

        self.state.submit_time_ms = Some(now);
        self.state.controller_id = Some(id.to_string());
        self.state.caller_context = caller_context;
        self.state.extra_data = extras;

        self.dispatcher
            .update_status(&mut self.state, ImageLoadStatus::Requested);
        self.report_view_visible(now);
    }

    fn on_intermediate_image_set(&mut self, id: &str, image_info: Option<ImageInfo>) {
        let now = self.clock.now_ms();

        self.state.intermediate_image_set_time_ms = Some(now);
        self.state.controller_id = Some(id.to_string());
        self.state.image_info = image_info;

        self.dispatcher
            .update_status(&mut self.state, ImageLoadStatus::IntermediateAvailable);
    }

    fn on_final_image_set(
        &mut self,
        id: &str,
        image_info: Option<ImageInfo>,
        extras: Option<Extras>,
    ) {
        let now = self.clock.now_ms();

        self.state.extra_data = extras;
        self.state.final_image_set_time_ms = Some(now);
        self.state.request_end_time_ms = Some(now);
        self.state.controller_id = Some(id.to_string());
        self.state.image_info = image_info;

        self.dispatcher
            .update_status(&mut self.state, ImageLoadStatus::Success);
    }

    fn on_failure(&mut self, id: &str, error: Option<ErrorCause>, extras: Option<Extras>) {
        let now = self.clock.now_ms();

        self.state.extra_data = extras;
        self.state.failure_time_ms = Some(now);
        self.state.controller_id = Some(id.to_string());
        self.state.error = error;

        self.dispatcher
            .update_status(&mut self.state, ImageLoadStatus::Error);
        self.report_view_invisible(now);
    }

    fn on_release(&mut self, id: &str, extras: Option<Extras>) {
        let now = self.clock.now_ms();

        self.state.extra_data = extras;
        self.state.controller_id = Some(id.to_string());

        // A release after success, error or draw is not a cancellation
        if !self.state.image_load_status.is_terminal() {
            self.state.cancel_time_ms = Some(now);
            self.dispatcher
                .update_status(&mut self.state, ImageLoadStatus::Canceled);
        }

        self.report_view_invisible(now);
    }

    fn on_image_drawn(&mut self, id: &str, image_info: ImageInfo, dimensions: DimensionsInfo) {
        self.state.controller_id = Some(id.to_string());
        self.state.image_draw_time_ms = Some(self.clock.now_ms());
        self.state.image_info = Some(image_info);
        self.state.dimensions_info = Some(dimensions);

        self.dispatcher
            .update_status(&mut self.state, ImageLoadStatus::Draw);
    }

    fn on_empty_event(&mut self, _caller_context: Option<CallerContext>) {
        // No tracker mutation; the notifier is invoked directly,
        // bypassing the async/sync decision
        self.dispatcher
            .notify_direct(&self.state, ImageLoadStatus::EmptyEvent);
    }
}

impl std::fmt::Debug for ImagePerfListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePerfListener")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
