//! Modal overlay widget
//!
//! Renders a [`scrim_core::Overlay`] as a full-window backdrop with the
//! caller's content centred above it.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ backdrop (press / release -> ModalEvent)      │
//! │        ┌──────────────────────────┐           │
//! │        │                      [×] │           │
//! │        │   caller content         │           │
//! │        │   (release -> Content)   │           │
//! │        └──────────────────────────┘           │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The view only reports raw gestures as [`ModalEvent`]s. The application
//! feeds them back to the overlay controller together with the tracked
//! cursor position; the controller decides whether they dismiss.
//!
//! While an overlay is closing it is still painted but its backdrop and
//! content stop producing events. Content that owns its own buttons should
//! check [`Visual::interactive`](scrim_core::Visual) and leave them without
//! `on_press` during that window.

mod style;
mod view;

use scrim_core::ReleaseTarget;

pub use style::{backdrop_style, card_style, BACKDROP_ALPHA, CARD_PADDING};
pub use view::{modal_view, Interactivity};

/// Raw gestures reported by the modal view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Pointer pressed on the backdrop or the content
    Pressed,
    /// Pointer released over the backdrop or the content
    Released(ReleaseTarget),
    /// The × button was clicked
    CloseRequested,
}
