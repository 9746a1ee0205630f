//! Image Request Lifecycle State Tracking
//!
//! Data model for observing a single image request's lifecycle: load
//! status and visibility enums, image metadata, the mutable
//! `ImagePerfState` tracker owned by a listener, and the immutable
//! `ImagePerfSnapshot` handed to notifier sinks.
//!
//! # Quick Start
//!
//! ```rust
//! use perf_state::{ImageLoadStatus, ImagePerfState};
//!
//! let mut state = ImagePerfState::new();
//! state.controller_id = Some("request-1".to_string());
//! state.submit_time_ms = Some(100);
//! state.image_load_status = ImageLoadStatus::Requested;
//!
//! // Snapshots are decoupled copies for cross-thread delivery
//! let snapshot = state.snapshot();
//! state.reset();
//! assert_eq!(snapshot.controller_id.as_deref(), Some("request-1"));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ImagePerfState (mutable, one per listener, reset per request)
//!     │
//!     └── snapshot() ──> ImagePerfSnapshot (immutable copy,
//!                        safe to hand to another thread)
//! ```

// Modules
pub mod error;
pub mod info;
pub mod snapshot;
pub mod state;
pub mod status;

// Re-exports - Public API
pub use error::CodeError;
pub use info::{DimensionsInfo, Extras, ImageInfo};
pub use snapshot::ImagePerfSnapshot;
pub use state::{CallerContext, ErrorCause, ImagePerfState};
pub use status::{ImageLoadStatus, VisibilityState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::CodeError;
    pub use crate::info::{DimensionsInfo, Extras, ImageInfo};
    pub use crate::snapshot::ImagePerfSnapshot;
    pub use crate::state::{CallerContext, ErrorCause, ImagePerfState};
    pub use crate::status::{ImageLoadStatus, VisibilityState};
}
