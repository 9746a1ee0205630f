//! Reference notifier sinks

use perf_dispatch::PerfNotifier;
use perf_state::{ImageLoadStatus, ImagePerfSnapshot, VisibilityState};

/// Notifier that forwards snapshots to `tracing` events
///
/// Useful as a default sink during development and as the example
/// sink; production embedders typically aggregate into their own
/// metrics pipeline instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPerfNotifier;

impl PerfNotifier for TracingPerfNotifier {
    fn notify_status_updated(&self, snapshot: &ImagePerfSnapshot, status: ImageLoadStatus) {
        tracing::info!(
            controller_id = ?snapshot.controller_id,
            status = ?status,
            submit_time_ms = ?snapshot.submit_time_ms,
            request_duration_ms = ?snapshot.image_request_duration_ms(),
            intermediate_latency_ms = ?snapshot.intermediate_image_latency_ms(),
            final_latency_ms = ?snapshot.final_image_latency_ms(),
            "image load status updated"
        );
    }

    fn notify_visibility_updated(
        &self,
        snapshot: &ImagePerfSnapshot,
        visibility: VisibilityState,
    ) {
        tracing::info!(
            controller_id = ?snapshot.controller_id,
            visibility = ?visibility,
            visibility_event_time_ms = ?snapshot.visibility_event_time_ms,
            invisibility_event_time_ms = ?snapshot.invisibility_event_time_ms,
            "image visibility updated"
        );
    }
}
