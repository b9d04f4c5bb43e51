//! iced rendering for scrim overlays
//!
//! `scrim-core` decides when an overlay is open, what it looks like at a
//! given instant, and whether a gesture dismisses it. This crate turns that
//! state into iced elements.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **View functions**: [`modal_view`] takes the controller plus callbacks
//!   and returns an `Element`, following the state + callback style
//! - **Portal**: [`Portal`] stacks rendered overlays above the page in mount
//!   order
//! - **Subscriptions**: [`cursor_tracking`] and [`dismissal_keys`] feed window
//!   input back to the controller

pub mod modal;
pub mod portal;
pub mod subscription;

pub use modal::{modal_view, Interactivity, ModalEvent, BACKDROP_ALPHA, CARD_PADDING};
pub use portal::Portal;
pub use subscription::{cursor_tracking, dismissal_keys, pointer_input, OverlayInput};
