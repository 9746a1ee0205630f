//! Sync/Async Notification Dispatch
//!
//! Routes (snapshot, status-or-visibility) pairs from a lifecycle
//! listener to a notifier sink, either inline on the caller's thread
//! or through a single shared background worker.
//!
//! # Features
//!
//! - **Per-event policy**: the async/sync decision is re-queried on
//!   every event, so a runtime toggle takes effect immediately
//! - **Snapshot delivery**: messages carry an immutable tracker
//!   snapshot, never the live tracker
//! - **Lazy shared worker**: one process-wide log thread, started on
//!   first async dispatch, never torn down
//! - **Injectable queue**: tests substitute [`InlineDispatch`] for the
//!   real worker
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use perf_dispatch::{EventDispatcher, InlineDispatch, PerfNotifier};
//! use perf_state::{ImageLoadStatus, ImagePerfSnapshot, ImagePerfState, VisibilityState};
//!
//! struct PrintNotifier;
//!
//! impl PerfNotifier for PrintNotifier {
//!     fn notify_status_updated(&self, snapshot: &ImagePerfSnapshot, status: ImageLoadStatus) {
//!         println!("{:?} -> {:?}", snapshot.controller_id, status);
//!     }
//!     fn notify_visibility_updated(&self, snapshot: &ImagePerfSnapshot, visibility: VisibilityState) {
//!         println!("{:?} -> {:?}", snapshot.controller_id, visibility);
//!     }
//! }
//!
//! let dispatcher = EventDispatcher::new(
//!     Arc::new(PrintNotifier),
//!     Arc::new(|| false),
//!     Arc::new(InlineDispatch),
//! );
//!
//! let mut state = ImagePerfState::new();
//! dispatcher.update_status(&mut state, ImageLoadStatus::Requested);
//! ```

// Modules
pub mod clock;
pub mod dispatcher;
pub mod message;
pub mod notifier;
pub mod policy;
pub mod queue;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports - Public API
pub use clock::{MonotonicClock, SystemMonotonicClock};
pub use dispatcher::EventDispatcher;
pub use message::DispatchMessage;
pub use notifier::PerfNotifier;
pub use policy::AsyncPolicy;
pub use queue::{DispatchQueue, InlineDispatch, SharedLogWorker};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::clock::{MonotonicClock, SystemMonotonicClock};
    pub use crate::dispatcher::EventDispatcher;
    pub use crate::message::DispatchMessage;
    pub use crate::notifier::PerfNotifier;
    pub use crate::policy::AsyncPolicy;
    pub use crate::queue::{DispatchQueue, InlineDispatch, SharedLogWorker};
}
