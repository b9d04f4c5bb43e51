//! Headless controller for dismissible overlays
//!
//! This crate contains everything about a modal overlay that is not painting:
//!
//! - **Mount gateway** ([`mount`]): root-level hosts overlays attach to, so
//!   ancestor layout cannot clip them
//! - **Dismissal arbiter** ([`arbiter`]): tells real outside-clicks apart from
//!   drag-selections that happen to end on the backdrop
//! - **Lifecycle controller** ([`lifecycle`]): open/close state machine, enter
//!   and exit transitions, listener and scroll-lock lifetime
//!
//! The caller owns the `is_open` flag. Event methods on [`Overlay`] return a
//! [`Dismissal`] when the caller should close it; the controller never flips
//! the flag itself.
//!
//! ```ignore
//! let env = OverlayEnv::standard();
//! let mut overlay = Overlay::new(&env)?;
//!
//! overlay.sync(&OverlayConfig::default().open(true), Instant::now());
//! if overlay.escape_pressed(Instant::now()).is_some() {
//!     // caller sets is_open = false
//! }
//! ```

pub mod arbiter;
pub mod config;
pub mod env;
pub mod error;
pub mod lifecycle;
pub mod listeners;
pub mod mount;
pub mod preset;
pub mod scroll_lock;

pub use arbiter::{
    DismissalArbiter, IgnoreReason, PointerPosition, PointerRelease, ReleaseTarget, Verdict,
    DRAG_TOLERANCE,
};
pub use config::OverlayConfig;
pub use env::OverlayEnv;
pub use error::OverlayError;
pub use lifecycle::{Dismissal, Overlay, Phase, Presence, Visual};
pub use listeners::{ListenerKind, ListenerRegistry};
pub use mount::{HostRegistry, MountHost, OverlayId, ROOT_HOST_ID};
pub use preset::{Edge, Effect, EnterPreset, ExitPreset, Frame, Transition, PRESET_DURATION};
pub use scroll_lock::{Overflow, ScrollLock};
