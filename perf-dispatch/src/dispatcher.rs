//! Per-event routing between sync and async delivery

use std::sync::Arc;

use perf_state::{ImageLoadStatus, ImagePerfState, VisibilityState};

use crate::message::DispatchMessage;
use crate::notifier::PerfNotifier;
use crate::policy::AsyncPolicy;
use crate::queue::{DispatchQueue, SharedLogWorker};

/// Routes tracker updates to a notifier, inline or via the queue
///
/// The async policy is queried once per event and never cached. Both
/// paths hand the notifier an immutable snapshot taken before the
/// routing decision, so the caller is free to mutate or reset the
/// tracker immediately after the call returns.
pub struct EventDispatcher {
    notifier: Arc<dyn PerfNotifier>,
    policy: Arc<dyn AsyncPolicy>,
    queue: Arc<dyn DispatchQueue>,
}

impl EventDispatcher {
    /// Create a dispatcher with an explicit queue
    pub fn new(
        notifier: Arc<dyn PerfNotifier>,
        policy: Arc<dyn AsyncPolicy>,
        queue: Arc<dyn DispatchQueue>,
    ) -> Self {
        Self {
            notifier,
            policy,
            queue,
        }
    }

    /// Create a dispatcher backed by the process-wide log worker
    pub fn with_global_worker(
        notifier: Arc<dyn PerfNotifier>,
        policy: Arc<dyn AsyncPolicy>,
    ) -> Self {
        struct GlobalQueue;

        impl DispatchQueue for GlobalQueue {
            fn enqueue(&self, message: DispatchMessage) {
                SharedLogWorker::global().enqueue(message);
            }
        }

        Self::new(notifier, policy, Arc::new(GlobalQueue))
    }

    /// Record the new status on the tracker and dispatch it
    pub fn update_status(&self, state: &mut ImagePerfState, status: ImageLoadStatus) {
        state.image_load_status = status;
        let snapshot = state.snapshot();

        if self.policy.enabled() {
            self.queue.enqueue(DispatchMessage::StatusUpdate {
                snapshot,
                status,
                notifier: Arc::clone(&self.notifier),
            });
        } else {
            self.notifier.notify_status_updated(&snapshot, status);
        }
    }

    /// Dispatch a visibility transition
    ///
    /// The visibility flag and timestamps are already on the tracker;
    /// this only routes the notification.
    pub fn update_visibility(&self, state: &ImagePerfState, visibility: VisibilityState) {
        let snapshot = state.snapshot();

        if self.policy.enabled() {
            self.queue.enqueue(DispatchMessage::VisibilityUpdate {
                snapshot,
                visibility,
                notifier: Arc::clone(&self.notifier),
            });
        } else {
            self.notifier.notify_visibility_updated(&snapshot, visibility);
        }
    }

    /// Invoke the notifier directly, bypassing the policy and queue
    ///
    /// Used for empty events, which carry no tracker mutation.
    pub fn notify_direct(&self, state: &ImagePerfState, status: ImageLoadStatus) {
        self.notifier.notify_status_updated(&state.snapshot(), status);
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher").finish_non_exhaustive()
    }
}
