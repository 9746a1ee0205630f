//! The mutable per-listener lifecycle tracker
//!
//! One `ImagePerfState` instance lives for its listener's whole
//! lifetime and is reused across requests via explicit reset. The
//! tracker is NOT thread-safe: the platform serializes lifecycle
//! callbacks into a listener, and cross-thread consumers only ever see
//! immutable snapshots.

use std::any::Any;
use std::sync::Arc;

use crate::info::{DimensionsInfo, Extras, ImageInfo};
use crate::snapshot::ImagePerfSnapshot;
use crate::status::ImageLoadStatus;

/// Opaque reference to the platform object that issued the request
pub type CallerContext = Arc<dyn Any + Send + Sync>;

/// Opaque failure cause reported by the pipeline
pub type ErrorCause = Arc<dyn std::error::Error + Send + Sync>;

/// Mutable record of one image request's lifecycle
///
/// All timestamps are milliseconds since an arbitrary monotonic epoch;
/// `None` means the event has not been recorded for the current
/// request.
///
/// Invariant: a new submit must call [`reset_point_timestamps`] before
/// stamping any field of the new lifecycle, so no timestamp from the
/// previous request survives into the next one.
///
/// [`reset_point_timestamps`]: ImagePerfState::reset_point_timestamps
#[derive(Clone, Default)]
pub struct ImagePerfState {
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
    /// When the request ended (stamped together with the final image)
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
    /// Last status recorded for this request
    pub image_load_status: ImageLoadStatus,
    /// Last known visibility of the view
    pub visible: bool,
    /// Dimensions recorded on draw
    pub dimensions_info: Option<DimensionsInfo>,
}

impl ImagePerfState {
    /// Create a fresh tracker with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything back to the freshly-constructed condition
    ///
    /// Idempotent; safe to call at any point in the lifecycle.
    pub fn reset(&mut self) {
        tracing::trace!(controller_id = ?self.controller_id, "resetting image perf state");
        *self = Self::default();
    }

    /// Clear all point timestamps and transient per-request fields
    ///
    /// Called at the start of a new submit. Identity fields
    /// (controller id, caller context, extras) are left alone because
    /// the submit callback overwrites them immediately.
    pub fn reset_point_timestamps(&mut self) {
        self.submit_time_ms = None;
        self.intermediate_image_set_time_ms = None;
        self.final_image_set_time_ms = None;
        self.request_end_time_ms = None;
        self.failure_time_ms = None;
        self.cancel_time_ms = None;
        self.visibility_event_time_ms = None;
        self.invisibility_event_time_ms = None;
        self.image_draw_time_ms = None;

        self.image_info = None;
        self.error = None;
        self.dimensions_info = None;
    }

    /// Take an immutable snapshot of the current tracker contents
    ///
    /// The snapshot is fully decoupled from the tracker: a later reset
    /// or new request cannot be observed through it. Dispatch paths
    /// must snapshot before crossing a thread boundary.
    pub fn snapshot(&self) -> ImagePerfSnapshot {
        ImagePerfSnapshot {
            controller_id: self.controller_id.clone(),
            caller_context: self.caller_context.clone(),
            extra_data: self.extra_data.clone(),
            submit_time_ms: self.submit_time_ms,
            intermediate_image_set_time_ms: self.intermediate_image_set_time_ms,
            final_image_set_time_ms: self.final_image_set_time_ms,
            request_end_time_ms: self.request_end_time_ms,
            failure_time_ms: self.failure_time_ms,
            cancel_time_ms: self.cancel_time_ms,
            visibility_event_time_ms: self.visibility_event_time_ms,
            invisibility_event_time_ms: self.invisibility_event_time_ms,
            image_draw_time_ms: self.image_draw_time_ms,
            image_info: self.image_info.clone(),
            error: self.error.clone(),
            image_load_status: self.image_load_status,
            visible: self.visible,
            dimensions_info: self.dimensions_info.clone(),
        }
    }
}

impl std::fmt::Debug for ImagePerfState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePerfState")
            .field("controller_id", &self.controller_id)
            .field("image_load_status", &self.image_load_status)
            .field("visible", &self.visible)
            .field("submit_time_ms", &self.submit_time_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::ImageInfo;

    fn populated_state() -> ImagePerfState {
        let mut state = ImagePerfState::new();
        state.controller_id = Some("req-1".to_string());
        state.submit_time_ms = Some(10);
        state.intermediate_image_set_time_ms = Some(20);
        state.final_image_set_time_ms = Some(30);
        state.request_end_time_ms = Some(30);
        state.failure_time_ms = Some(40);
        state.cancel_time_ms = Some(50);
        state.visibility_event_time_ms = Some(10);
        state.invisibility_event_time_ms = Some(50);
        state.image_draw_time_ms = Some(60);
        state.image_info = Some(ImageInfo::new(100, 100));
        state.image_load_status = ImageLoadStatus::Success;
        state.visible = true;
        state
    }

    fn assert_all_unset(state: &ImagePerfState) {
        assert!(state.controller_id.is_none());
        assert!(state.caller_context.is_none());
        assert!(state.extra_data.is_none());
        assert!(state.submit_time_ms.is_none());
        assert!(state.intermediate_image_set_time_ms.is_none());
        assert!(state.final_image_set_time_ms.is_none());
        assert!(state.request_end_time_ms.is_none());
        assert!(state.failure_time_ms.is_none());
        assert!(state.cancel_time_ms.is_none());
        assert!(state.visibility_event_time_ms.is_none());
        assert!(state.invisibility_event_time_ms.is_none());
        assert!(state.image_draw_time_ms.is_none());
        assert!(state.image_info.is_none());
        assert!(state.error.is_none());
        assert!(state.dimensions_info.is_none());
        assert_eq!(state.image_load_status, ImageLoadStatus::Unknown);
        assert!(!state.visible);
    }

    #[test]
    fn test_fresh_state_is_all_unset() {
        assert_all_unset(&ImagePerfState::new());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = populated_state();
        state.reset();
        assert_all_unset(&state);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = populated_state();
        state.reset();
        state.reset();
        assert_all_unset(&state);
    }

    #[test]
    fn test_reset_point_timestamps_keeps_identity() {
        let mut state = populated_state();
        state.reset_point_timestamps();

        // Identity survives, timestamps and transient fields do not
        assert_eq!(state.controller_id.as_deref(), Some("req-1"));
        assert!(state.submit_time_ms.is_none());
        assert!(state.intermediate_image_set_time_ms.is_none());
        assert!(state.final_image_set_time_ms.is_none());
        assert!(state.request_end_time_ms.is_none());
        assert!(state.failure_time_ms.is_none());
        assert!(state.cancel_time_ms.is_none());
        assert!(state.visibility_event_time_ms.is_none());
        assert!(state.invisibility_event_time_ms.is_none());
        assert!(state.image_draw_time_ms.is_none());
        assert!(state.image_info.is_none());
        assert!(state.error.is_none());
        assert!(state.dimensions_info.is_none());
    }

    #[test]
    fn test_snapshot_is_decoupled_from_tracker() {
        let mut state = populated_state();
        let snapshot = state.snapshot();

        state.reset();

        // The snapshot still holds the pre-reset values
        assert_eq!(snapshot.controller_id.as_deref(), Some("req-1"));
        assert_eq!(snapshot.submit_time_ms, Some(10));
        assert_eq!(snapshot.image_load_status, ImageLoadStatus::Success);
        assert!(snapshot.visible);
    }
}
