//! Cross-thread dispatch messages
//!
//! Tagged variants carry a strongly-typed payload plus the snapshot
//! and notifier, so no integer code ever needs decoding on the worker
//! side and an out-of-range payload cannot exist.

use std::sync::Arc;

use perf_state::{ImageLoadStatus, ImagePerfSnapshot, VisibilityState};

use crate::notifier::PerfNotifier;

/// One queued notification, consumed exactly once by [`deliver`]
///
/// [`deliver`]: DispatchMessage::deliver
pub enum DispatchMessage {
    /// The request's load status changed
    StatusUpdate {
        /// Tracker snapshot taken at dispatch time
        snapshot: ImagePerfSnapshot,
        /// New status
        status: ImageLoadStatus,
        /// Sink to deliver to
        notifier: Arc<dyn PerfNotifier>,
    },

    /// The view's visibility changed
    VisibilityUpdate {
        /// Tracker snapshot taken at dispatch time
        snapshot: ImagePerfSnapshot,
        /// New visibility
        visibility: VisibilityState,
        /// Sink to deliver to
        notifier: Arc<dyn PerfNotifier>,
    },
}

impl DispatchMessage {
    /// Invoke the carried notifier with the carried payload
    pub fn deliver(self) {
        match self {
            DispatchMessage::StatusUpdate {
                snapshot,
                status,
                notifier,
            } => notifier.notify_status_updated(&snapshot, status),
            DispatchMessage::VisibilityUpdate {
                snapshot,
                visibility,
                notifier,
            } => notifier.notify_visibility_updated(&snapshot, visibility),
        }
    }

    /// Controller id of the request this message belongs to, if set
    pub fn controller_id(&self) -> Option<&str> {
        match self {
            DispatchMessage::StatusUpdate { snapshot, .. }
            | DispatchMessage::VisibilityUpdate { snapshot, .. } => {
                snapshot.controller_id.as_deref()
            }
        }
    }
}

impl std::fmt::Debug for DispatchMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchMessage::StatusUpdate { status, .. } => f
                .debug_struct("StatusUpdate")
                .field("controller_id", &self.controller_id())
                .field("status", status)
                .finish(),
            DispatchMessage::VisibilityUpdate { visibility, .. } => f
                .debug_struct("VisibilityUpdate")
                .field("controller_id", &self.controller_id())
                .field("visibility", visibility)
                .finish(),
        }
    }
}
