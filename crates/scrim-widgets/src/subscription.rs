//! Window-level input bridged to overlay controllers
//!
//! iced delivers cursor coordinates only with move events, so the
//! application tracks the last position and hands it to
//! [`Overlay::pointer_down`](scrim_core::Overlay::pointer_down) when the
//! backdrop reports a press. Touch contacts move the tracked position too,
//! since `mouse_area` reports finger presses and lifts as presses and
//! releases.
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     Subscription::batch([
//!         cursor_tracking().map(Message::Input),
//!         dismissal_keys(&self.env.listeners).map(Message::Input),
//!     ])
//! }
//! ```

use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, touch, window, Event, Point, Subscription};
use scrim_core::ListenerRegistry;

/// Input relevant to open overlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayInput {
    /// Cursor or finger moved anywhere in the window
    CursorMoved(Point),
    /// Escape pressed and not consumed by a focused widget
    EscapePressed,
}

/// Track the cursor and touch contacts across the whole window
pub fn cursor_tracking() -> Subscription<OverlayInput> {
    event::listen_with(cursor_event)
}

/// Escape key presses, only while some overlay holds its listeners
///
/// Presses already captured by a widget are skipped. With a focused
/// `text_input` the first Escape only unfocuses the field and a second one
/// reaches the overlay.
pub fn dismissal_keys(listeners: &ListenerRegistry) -> Subscription<OverlayInput> {
    if listeners.is_listening() {
        event::listen_with(key_event)
    } else {
        Subscription::none()
    }
}

fn cursor_event(event: Event, _status: event::Status, _window: window::Id) -> Option<OverlayInput> {
    pointer_input(&event)
}

/// Position update carried by a mouse or touch event, if any
pub fn pointer_input(event: &Event) -> Option<OverlayInput> {
    match *event {
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerPressed { position, .. })
        | Event::Touch(touch::Event::FingerMoved { position, .. })
        | Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(OverlayInput::CursorMoved(position))
        }
        _ => None,
    }
}

fn key_event(event: Event, status: event::Status, _window: window::Id) -> Option<OverlayInput> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => escape_input(&key, status),
        _ => None,
    }
}

fn escape_input(key: &Key, status: event::Status) -> Option<OverlayInput> {
    match (key, status) {
        (Key::Named(Named::Escape), event::Status::Ignored) => Some(OverlayInput::EscapePressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_maps_when_unhandled() {
        let input = escape_input(&Key::Named(Named::Escape), event::Status::Ignored);
        assert_eq!(input, Some(OverlayInput::EscapePressed));
    }

    #[test]
    fn test_escape_captured_by_widget_is_ignored() {
        let input = escape_input(&Key::Named(Named::Escape), event::Status::Captured);
        assert_eq!(input, None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let input = escape_input(&Key::Character("a".into()), event::Status::Ignored);
        assert_eq!(input, None);
        let input = escape_input(&Key::Named(Named::Enter), event::Status::Ignored);
        assert_eq!(input, None);
    }

    #[test]
    fn test_cursor_moves_are_forwarded() {
        let position = Point::new(12.0, 34.0);
        let input = cursor_event(
            Event::Mouse(mouse::Event::CursorMoved { position }),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert_eq!(input, Some(OverlayInput::CursorMoved(position)));
    }

    #[test]
    fn test_finger_contacts_move_tracked_position() {
        let finger = touch::Finger(0);
        let position = Point::new(300.0, 40.0);
        let events = [
            touch::Event::FingerPressed { id: finger, position },
            touch::Event::FingerMoved { id: finger, position },
            touch::Event::FingerLifted { id: finger, position },
        ];
        for contact in events {
            let input = cursor_event(Event::Touch(contact), event::Status::Ignored, window::Id::unique());
            assert_eq!(input, Some(OverlayInput::CursorMoved(position)));
        }
    }

    #[test]
    fn test_lost_finger_is_ignored() {
        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(1),
            position: Point::new(1.0, 1.0),
        });
        assert_eq!(pointer_input(&lost), None);
    }
}
