//! Run a full image request lifecycle through the listener and log
//! every notification via tracing.
//!
//! ```sh
//! cargo run --example basic_usage
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use perf_listener::{
    ControllerListener, ImagePerfListener, LoggingMode, SystemMonotonicClock,
    TracingPerfNotifier,
};
use perf_state::{DimensionsInfo, ImageInfo};

fn main() {
    perf_listener::init_logging(LoggingMode::Development).expect("logging init failed");

    let mut listener = ImagePerfListener::new(
        Arc::new(SystemMonotonicClock::new()),
        Arc::new(TracingPerfNotifier),
        Arc::new(|| false), // sync dispatch: everything logs inline
    );

    listener.on_submit("demo-request", None, None);
    thread::sleep(Duration::from_millis(30));

    listener.on_intermediate_image_set("demo-request", Some(ImageInfo::new(32, 32)));
    thread::sleep(Duration::from_millis(50));

    listener.on_final_image_set("demo-request", Some(ImageInfo::new(640, 480)), None);
    listener.on_image_drawn(
        "demo-request",
        ImageInfo::new(640, 480),
        DimensionsInfo {
            viewport_width: 1080,
            viewport_height: 720,
            encoded_width: 640,
            encoded_height: 480,
            decoded_width: 640,
            decoded_height: 480,
            scale_type: "center_crop".to_string(),
        },
    );

    let snapshot = listener.state().snapshot();
    println!(
        "request took {:?} ms (intermediate after {:?} ms)",
        snapshot.image_request_duration_ms(),
        snapshot.intermediate_image_latency_ms(),
    );

    listener.on_release("demo-request", None);
    listener.close();
}
