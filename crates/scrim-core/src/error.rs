//! Error types for overlay construction and resource acquisition

/// Errors raised by the overlay controller
///
/// Only configuration problems surface here. Gesture ambiguity and unknown
/// preset names are resolved locally and never become errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OverlayError {
    /// The top-level mount host was never installed (environment mis-initialized)
    #[error("Mount host '{0}' is not installed")]
    MountHostMissing(String),

    /// Another overlay already holds the page scroll lock
    #[error("Page scroll is already locked by another overlay")]
    ScrollLockHeld,
}
