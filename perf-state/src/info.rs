//! Image metadata carried by lifecycle events

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque key/value bag attached by the platform to lifecycle events
pub type Extras = HashMap<String, serde_json::Value>;

/// Metadata about a decoded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Encoded size in bytes, when known
    pub size_bytes: Option<u64>,
    /// Format label (e.g. "jpeg", "webp"), when known
    pub format: Option<String>,
}

impl ImageInfo {
    /// Create image info with only dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            size_bytes: None,
            format: None,
        }
    }
}

/// Viewport and image dimensions recorded when the image is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionsInfo {
    /// Width of the viewport the image was drawn into
    pub viewport_width: u32,
    /// Height of the viewport the image was drawn into
    pub viewport_height: u32,
    /// Encoded image width
    pub encoded_width: u32,
    /// Encoded image height
    pub encoded_height: u32,
    /// Decoded image width
    pub decoded_width: u32,
    /// Decoded image height
    pub decoded_height: u32,
    /// Scale type used to fit the image to the viewport
    pub scale_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_info_new_has_no_optional_fields() {
        let info = ImageInfo::new(640, 480);

        assert_eq!(info.width, 640);
        assert_eq!(info.height, 480);
        assert!(info.size_bytes.is_none());
        assert!(info.format.is_none());
    }

    #[test]
    fn test_extras_hold_arbitrary_json_values() {
        let mut extras = Extras::new();
        extras.insert("origin".to_string(), serde_json::json!("disk"));
        extras.insert("attempt".to_string(), serde_json::json!(2));

        assert_eq!(extras["origin"], "disk");
        assert_eq!(extras["attempt"], 2);
    }
}
