//! Image Request Performance Listener
//!
//! Observes the lifecycle of an image request (submit, intermediate,
//! final, failure, release, draw) plus the implicit visibility
//! transitions of the view showing it, stamps each event with a
//! monotonic timestamp, and forwards immutable state snapshots to a
//! notifier sink - synchronously or via a shared background worker,
//! decided per event by a runtime policy.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use perf_listener::{ControllerListener, ImagePerfListener, TracingPerfNotifier};
//! use perf_dispatch::SystemMonotonicClock;
//! use perf_state::ImageInfo;
//!
//! let mut listener = ImagePerfListener::new(
//!     Arc::new(SystemMonotonicClock::new()),
//!     Arc::new(TracingPerfNotifier),
//!     Arc::new(|| false), // sync dispatch
//! );
//!
//! listener.on_submit("request-1", None, None);
//! listener.on_final_image_set("request-1", Some(ImageInfo::new(640, 480)), None);
//! listener.close();
//! ```
//!
//! # Architecture
//!
//! ```text
//! platform callbacks ──> ImagePerfListener
//!                            │  mutates ImagePerfState, stamps times
//!                            ▼
//!                        EventDispatcher ── policy? ──┬─ sync: notifier
//!                                                     └─ async: SharedLogWorker ──> notifier
//! ```

// Modules
pub mod controller;
pub mod listener;
pub mod logging;
pub mod notifiers;

// Re-exports - Public API
pub use controller::ControllerListener;
pub use listener::ImagePerfListener;
pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
pub use notifiers::TracingPerfNotifier;

// Re-export the collaborating crates' surfaces for convenience
pub use perf_dispatch::{
    AsyncPolicy, DispatchQueue, EventDispatcher, InlineDispatch, MonotonicClock, PerfNotifier,
    SharedLogWorker, SystemMonotonicClock,
};
pub use perf_state::{
    CallerContext, DimensionsInfo, ErrorCause, Extras, ImageInfo, ImageLoadStatus,
    ImagePerfSnapshot, ImagePerfState, VisibilityState,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::ControllerListener;
    pub use crate::listener::ImagePerfListener;
    pub use crate::notifiers::TracingPerfNotifier;
    pub use perf_dispatch::prelude::*;
    pub use perf_state::prelude::*;
}
