//! Edit record modal

use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Element, Length};

use super::message::Message;
use crate::data::Record;

/// State for the edit modal
#[derive(Debug, Clone, Default)]
pub struct EditState {
    /// Whether the edit modal is open
    pub is_open: bool,
    /// Record being edited
    pub target: Option<u64>,
    /// Draft name (text input)
    pub draft_name: String,
    /// Validation feedback
    pub status: String,
}

impl EditState {
    /// Open the modal seeded from a record
    pub fn show(&mut self, record: &Record) {
        self.target = Some(record.id);
        self.draft_name = record.name.clone();
        self.status.clear();
        self.is_open = true;
    }

    /// Close the modal, keeping the draft painted through the exit transition
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn can_save(&self) -> bool {
        !self.draft_name.trim().is_empty()
    }
}

/// Render the edit form
///
/// The × close button is drawn by the modal itself.
pub fn view(state: &EditState, interactive: bool) -> Element<'_, Message> {
    let title = text("Edit Record").size(24);

    let name_input = text_input("Name", &state.draft_name)
        .on_input_maybe(interactive.then_some(Message::EditNameChanged))
        .on_submit_maybe((interactive && state.can_save()).then_some(Message::SaveEdit))
        .padding(8)
        .width(Length::Fill);

    let status: Element<Message> = if state.status.is_empty() {
        Space::new().height(0).into()
    } else {
        text(&state.status)
            .size(12)
            .color(iced::Color::from_rgb(0.9, 0.2, 0.2))
            .into()
    };

    let cancel_btn = button(text("Cancel"))
        .on_press_maybe(interactive.then_some(Message::CancelEdit))
        .style(button::secondary);

    let save_btn = button(text("Save"))
        .on_press_maybe((interactive && state.can_save()).then_some(Message::SaveEdit))
        .style(button::primary);

    let actions = row![Space::new().width(Length::Fill), cancel_btn, save_btn]
        .spacing(10)
        .width(Length::Fill);

    column![title, name_input, status, actions]
        .spacing(15)
        .width(Length::Fixed(400.0))
        .into()
}
