//! Modal view function

use std::time::Instant;

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text, Space};
use iced::{Element, Length, Padding};
use scrim_core::{Frame, Overlay, Presence, ReleaseTarget, Visual};

use super::style::{backdrop_style, card_style, CARD_PADDING};
use super::ModalEvent;

/// Which event hooks a rendered layer carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactivity {
    /// Backdrop and content report presses and releases
    pub pointer_events: bool,
    /// Backdrop swallows wheel events (page scroll lock)
    pub wheel_blocked: bool,
    /// × button has an `on_press`
    pub close_enabled: bool,
}

impl Interactivity {
    /// Event hooks for a layer painted with `visual`
    ///
    /// Only the overlay that owns the scroll lock blocks the wheel.
    pub fn of(visual: Visual, holds_scroll_lock: bool) -> Self {
        let live = visual.interactive && visual.presence == Presence::Mounted;
        Self {
            pointer_events: live,
            wheel_blocked: live && holds_scroll_lock,
            close_enabled: live,
        }
    }
}

/// Render an overlay at `now`
///
/// Returns `None` while the overlay is closed (hidden). Mount the result on a
/// [`Portal`](crate::Portal) rather than inline so it paints above the whole
/// window.
///
/// # Arguments
/// * `overlay` - Controller whose state drives the paint
/// * `now` - Frame time used to sample transitions
/// * `content` - Caller content placed inside the card
/// * `on_event` - Maps raw modal gestures to the caller's message type
pub fn modal_view<'a, Message, F>(
    overlay: &Overlay,
    now: Instant,
    content: Element<'a, Message>,
    on_event: F,
) -> Option<Element<'a, Message>>
where
    Message: Clone + 'a,
    F: Fn(ModalEvent) -> Message,
{
    let visual = overlay.visual(now);
    if visual.presence == Presence::Hidden {
        return None;
    }
    let config = overlay.config();
    let frame = visual.frame;
    let hooks = Interactivity::of(visual, overlay.holds_scroll_lock());

    let close_row: Element<'a, Message> = if config.show_close_affordance {
        let close_btn = button(text("×").size(20))
            .on_press_maybe(hooks.close_enabled.then(|| on_event(ModalEvent::CloseRequested)))
            .style(button::secondary);
        row![Space::new().width(Length::Fill), close_btn]
            .width(Length::Fill)
            .into()
    } else {
        Space::new().height(0).into()
    };

    let card = container(column![close_row, content].spacing(5))
        .padding(CARD_PADDING * frame.scale)
        .style(card_style(frame.opacity, &config.extra_style_class));

    let card: Element<'a, Message> = if hooks.pointer_events {
        opaque(
            mouse_area(card)
                .on_press(on_event(ModalEvent::Pressed))
                .on_release(on_event(ModalEvent::Released(ReleaseTarget::Content))),
        )
    } else {
        card.into()
    };

    let positioned = center(container(card).padding(offset_padding(frame)))
        .width(Length::Fill)
        .height(Length::Fill);

    let backdrop = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(backdrop_style(frame.opacity));

    let backdrop: Element<'a, Message> = if hooks.pointer_events {
        let area = mouse_area(backdrop)
            .on_press(on_event(ModalEvent::Pressed))
            .on_release(on_event(ModalEvent::Released(ReleaseTarget::Backdrop)));
        if hooks.wheel_blocked {
            // Swallow wheel events so the page underneath cannot scroll
            opaque(area)
        } else {
            area.into()
        }
    } else {
        backdrop.into()
    };

    Some(stack![backdrop, positioned].into())
}

/// Padding that shifts a centred element by the frame's offset
fn offset_padding(frame: Frame) -> Padding {
    let (dx, dy) = frame.offset;
    Padding {
        top: (2.0 * dy).max(0.0),
        right: (-2.0 * dx).max(0.0),
        bottom: (-2.0 * dy).max(0.0),
        left: (2.0 * dx).max(0.0),
    }
}
