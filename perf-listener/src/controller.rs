//! The controller-listener capability set
//!
//! Seven lifecycle entry points matching what an image-loading
//! platform calls on a controller listener. The platform serializes
//! calls into one listener instance; implementations do not need to
//! tolerate concurrent callbacks.

use perf_state::{CallerContext, DimensionsInfo, ErrorCause, Extras, ImageInfo};

/// Lifecycle callbacks for one logical image request
pub trait ControllerListener {
    /// The request was submitted to the pipeline
    fn on_submit(&mut self, id: &str, caller_context: Option<CallerContext>, extras: Option<Extras>);

    /// A preview or progressive scan became available
    fn on_intermediate_image_set(&mut self, id: &str, image_info: Option<ImageInfo>);

    /// The final image was set
    fn on_final_image_set(
        &mut self,
        id: &str,
        image_info: Option<ImageInfo>,
        extras: Option<Extras>,
    );

    /// The request failed
    fn on_failure(&mut self, id: &str, error: Option<ErrorCause>, extras: Option<Extras>);

    /// The request was released by the controller
    fn on_release(&mut self, id: &str, extras: Option<Extras>);

    /// The image was drawn to the screen
    fn on_image_drawn(&mut self, id: &str, image_info: ImageInfo, dimensions: DimensionsInfo);

    /// A controller event arrived with no associated request
    fn on_empty_event(&mut self, caller_context: Option<CallerContext>);
}
