//! Notifier sink contract

use perf_state::{ImageLoadStatus, ImagePerfSnapshot, VisibilityState};

/// Sink receiving lifecycle and visibility notifications
///
/// Implementations run interchangeably on the caller's thread (sync
/// dispatch) or the shared log worker (async dispatch), so they must
/// be reasonably non-blocking. Panics are not caught by the dispatch
/// layer: on the async path a panic unwinds the worker thread and the
/// worker is not restarted.
pub trait PerfNotifier: Send + Sync {
    /// Called when the request's load status changed
    fn notify_status_updated(&self, snapshot: &ImagePerfSnapshot, status: ImageLoadStatus);

    /// Called when the view's visibility changed
    fn notify_visibility_updated(&self, snapshot: &ImagePerfSnapshot, visibility: VisibilityState);
}
