//! Load status and visibility enums
//!
//! Each enum carries a stable integer code for analytics sinks that
//! persist numeric values. Decoding an unknown code is a typed error,
//! never a silent skip.

use serde::{Deserialize, Serialize};

use crate::error::CodeError;

/// Lifecycle status of an image request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageLoadStatus {
    /// No lifecycle event recorded yet (fresh or reset tracker)
    #[default]
    Unknown,
    /// The request was submitted to the pipeline
    Requested,
    /// A preview or progressive scan is available
    IntermediateAvailable,
    /// The final image was set
    Success,
    /// The request failed
    Error,
    /// The request was released before completing
    Canceled,
    /// The image was drawn to the screen
    Draw,
    /// A no-op controller event with no associated request
    EmptyEvent,
}

impl ImageLoadStatus {
    /// Stable integer code for this status
    pub fn code(&self) -> i32 {
        match self {
            ImageLoadStatus::Unknown => -1,
            ImageLoadStatus::Requested => 0,
            ImageLoadStatus::IntermediateAvailable => 1,
            ImageLoadStatus::Success => 2,
            ImageLoadStatus::Error => 3,
            ImageLoadStatus::Canceled => 4,
            ImageLoadStatus::Draw => 5,
            ImageLoadStatus::EmptyEvent => 6,
        }
    }

    /// Whether this status ends the request lifecycle
    ///
    /// A release arriving after a terminal status does not cancel the
    /// request.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ImageLoadStatus::Success | ImageLoadStatus::Error | ImageLoadStatus::Draw
        )
    }
}

impl TryFrom<i32> for ImageLoadStatus {
    type Error = CodeError;

    fn try_from(code: i32) -> Result<Self, CodeError> {
        match code {
            -1 => Ok(ImageLoadStatus::Unknown),
            0 => Ok(ImageLoadStatus::Requested),
            1 => Ok(ImageLoadStatus::IntermediateAvailable),
            2 => Ok(ImageLoadStatus::Success),
            3 => Ok(ImageLoadStatus::Error),
            4 => Ok(ImageLoadStatus::Canceled),
            5 => Ok(ImageLoadStatus::Draw),
            6 => Ok(ImageLoadStatus::EmptyEvent),
            other => Err(CodeError::InvalidStatusCode(other)),
        }
    }
}

/// Visibility of the view showing the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityState {
    /// The view became invisible
    Invisible,
    /// The view became visible
    Visible,
}

impl VisibilityState {
    /// Stable integer code for this visibility state
    pub fn code(&self) -> i32 {
        match self {
            VisibilityState::Invisible => 0,
            VisibilityState::Visible => 1,
        }
    }
}

impl TryFrom<i32> for VisibilityState {
    type Error = CodeError;

    fn try_from(code: i32) -> Result<Self, CodeError> {
        match code {
            0 => Ok(VisibilityState::Invisible),
            1 => Ok(VisibilityState::Visible),
            other => Err(CodeError::InvalidVisibilityCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        let all = [
            ImageLoadStatus::Unknown,
            ImageLoadStatus::Requested,
            ImageLoadStatus::IntermediateAvailable,
            ImageLoadStatus::Success,
            ImageLoadStatus::Error,
            ImageLoadStatus::Canceled,
            ImageLoadStatus::Draw,
            ImageLoadStatus::EmptyEvent,
        ];

        for status in all {
            assert_eq!(ImageLoadStatus::try_from(status.code()), Ok(status));
        }
    }

    #[test]
    fn test_invalid_status_code_is_an_error() {
        let result = ImageLoadStatus::try_from(42);
        assert_eq!(result, Err(CodeError::InvalidStatusCode(42)));
    }

    #[test]
    fn test_invalid_visibility_code_is_an_error() {
        let result = VisibilityState::try_from(-7);
        assert_eq!(result, Err(CodeError::InvalidVisibilityCode(-7)));
    }

    #[test]
    fn test_visibility_codes_round_trip() {
        assert_eq!(
            VisibilityState::try_from(VisibilityState::Visible.code()),
            Ok(VisibilityState::Visible)
        );
        assert_eq!(
            VisibilityState::try_from(VisibilityState::Invisible.code()),
            Ok(VisibilityState::Invisible)
        );
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ImageLoadStatus::Success.is_terminal());
        assert!(ImageLoadStatus::Error.is_terminal());
        assert!(ImageLoadStatus::Draw.is_terminal());

        assert!(!ImageLoadStatus::Unknown.is_terminal());
        assert!(!ImageLoadStatus::Requested.is_terminal());
        assert!(!ImageLoadStatus::IntermediateAvailable.is_terminal());
        assert!(!ImageLoadStatus::Canceled.is_terminal());
        assert!(!ImageLoadStatus::EmptyEvent.is_terminal());
    }

    #[test]
    fn test_default_status_is_unknown() {
        assert_eq!(ImageLoadStatus::default(), ImageLoadStatus::Unknown);
    }
}
