use std::fmt;

use thiserror::Error;

/// Which list a missing or out-of-range selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Window,
    Monitor,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => f.write_str("window"),
            Self::Monitor => f.write_str("monitor"),
        }
    }
}

/// Why a resize attempt was rejected or failed.
///
/// Every variant ends the attempt: nothing is retried and nothing is
/// persisted. The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// No window or monitor chosen, or the index is out of range.
    #[error("Please select a {0}.")]
    InvalidSelection(Selection),

    /// Width or height is not a positive integer.
    #[error("Invalid width or height.")]
    InvalidDimensions,

    /// The selected window closed and no window with its title was found
    /// after one re-scan.
    #[error("The selected window no longer exists.")]
    WindowNotFound,

    /// The OS rejected the move/resize call.
    #[error("Failed to resize window: {0}")]
    OsOperationFailed(String),
}
