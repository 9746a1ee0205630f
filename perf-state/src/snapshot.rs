//! Immutable snapshot of a tracker, taken at dispatch time
//!
//! Async delivery hands a snapshot (never the live tracker) to the
//! worker thread, so a reset racing a queued message cannot leak
//! post-reset values into a pre-reset event.

use crate::info::{DimensionsInfo, Extras, ImageInfo};
use crate::state::{CallerContext, ErrorCause};
use crate::status::ImageLoadStatus;

/// Immutable copy of every [`ImagePerfState`] field
///
/// Produced by [`ImagePerfState::snapshot`]; consumed by notifier
/// sinks on whichever thread delivers the event.
///
/// [`ImagePerfState`]: crate::state::ImagePerfState
/// [`ImagePerfState::snapshot`]: crate::state::ImagePerfState::snapshot
#[derive(Clone)]
pub struct ImagePerfSnapshot {
    /// Request identifier assigned by the controller
    pub controller_id: Option<String>,
    /// Opaque caller context from the platform
    pub caller_context: Option<CallerContext>,
    /// Extra data attached to the most recent event
    pub extra_data: Option<Extras>,

    /// When the request was submitted
    pub submit_time_ms: Option<u64>,
    /// When an intermediate image was set
    pub intermediate_image_set_time_ms: Option<u64>,
    /// When the final image was set
    pub final_image_set_time_ms: Option<u64>,
    /// When the request ended
    pub request_end_time_ms: Option<u64>,
    /// When the request failed
    pub failure_time_ms: Option<u64>,
    /// When the request was canceled
    pub cancel_time_ms: Option<u64>,
    /// When the view became visible
    pub visibility_event_time_ms: Option<u64>,
    /// When the view became invisible
    pub invisibility_event_time_ms: Option<u64>,
    /// When the image was drawn
    pub image_draw_time_ms: Option<u64>,

    /// Metadata of the last image reported by the pipeline
    pub image_info: Option<ImageInfo>,
    /// Failure cause of the last error
    pub error: Option<ErrorCause>,
    /// Status recorded when the snapshot was taken
    pub image_load_status: ImageLoadStatus,
    /// Visibility recorded when the snapshot was taken
    pub visible: bool,
    /// Dimensions recorded on draw
    pub dimensions_info: Option<DimensionsInfo>,
}

impl ImagePerfSnapshot {
    /// Submit-to-end duration, when both endpoints were recorded
    pub fn image_request_duration_ms(&self) -> Option<u64> {
        duration(self.submit_time_ms, self.request_end_time_ms)
    }

    /// Submit-to-intermediate latency, when both endpoints were recorded
    pub fn intermediate_image_latency_ms(&self) -> Option<u64> {
        duration(self.submit_time_ms, self.intermediate_image_set_time_ms)
    }

    /// Submit-to-final latency, when both endpoints were recorded
    pub fn final_image_latency_ms(&self) -> Option<u64> {
        duration(self.submit_time_ms, self.final_image_set_time_ms)
    }
}

/// End minus start, unset unless both are recorded and ordered
fn duration(start: Option<u64>, end: Option<u64>) -> Option<u64> {
    match (start, end) {
        (Some(start), Some(end)) => end.checked_sub(start),
        _ => None,
    }
}

impl std::fmt::Debug for ImagePerfSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePerfSnapshot")
            .field("controller_id", &self.controller_id)
            .field("image_load_status", &self.image_load_status)
            .field("visible", &self.visible)
            .field("submit_time_ms", &self.submit_time_ms)
            .field("request_end_time_ms", &self.request_end_time_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImagePerfState;

    #[test]
    fn test_durations_from_recorded_endpoints() {
        let mut state = ImagePerfState::new();
        state.submit_time_ms = Some(100);
        state.intermediate_image_set_time_ms = Some(140);
        state.final_image_set_time_ms = Some(250);
        state.request_end_time_ms = Some(250);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.image_request_duration_ms(), Some(150));
        assert_eq!(snapshot.intermediate_image_latency_ms(), Some(40));
        assert_eq!(snapshot.final_image_latency_ms(), Some(150));
    }

    #[test]
    fn test_durations_unset_without_endpoints() {
        let mut state = ImagePerfState::new();
        state.submit_time_ms = Some(100);

        let snapshot = state.snapshot();
        assert!(snapshot.image_request_duration_ms().is_none());
        assert!(snapshot.intermediate_image_latency_ms().is_none());
        assert!(snapshot.final_image_latency_ms().is_none());
    }

    #[test]
    fn test_duration_unset_when_end_precedes_start() {
        // A reset mid-lifecycle can leave a lone stale endpoint; the
        // accessor must not underflow
        let mut state = ImagePerfState::new();
        state.submit_time_ms = Some(500);
        state.request_end_time_ms = Some(100);

        assert!(state.snapshot().image_request_duration_ms().is_none());
    }
}
