//! Delete confirmation modal
//!
//! Non-dismissible: escape and backdrop clicks are ignored, only the Cancel
//! and Delete buttons close it.

use iced::widget::{button, column, row, text, Space};
use iced::{Element, Length};

use super::message::Message;
use crate::data::Record;

/// State for the delete confirmation modal
#[derive(Debug, Clone, Default)]
pub struct DeleteState {
    /// Whether the delete modal is open
    pub is_open: bool,
    /// Record about to be deleted
    ///
    /// Kept after closing so the exit transition still has something to paint.
    pub target: Option<Record>,
}

impl DeleteState {
    /// Open the modal for a record
    pub fn show(&mut self, record: Record) {
        self.target = Some(record);
        self.is_open = true;
    }

    /// Close the modal
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Render the delete confirmation body
///
/// Buttons stay inert while `interactive` is false (exit transition).
pub fn view(state: &DeleteState, interactive: bool) -> Element<'_, Message> {
    let Some(ref record) = state.target else {
        return Space::new().into();
    };

    let title = text("Confirm Delete").size(24);

    let description = text(format!("Delete \"{}\" <{}>?", record.name, record.email)).size(16);
    let warning = text("⚠ This cannot be undone.")
        .size(14)
        .color(iced::Color::from_rgb(0.9, 0.2, 0.2));

    let cancel_btn = button(text("Cancel"))
        .on_press_maybe(interactive.then_some(Message::CancelDelete))
        .style(button::secondary);

    let delete_btn = button(text("Delete"))
        .on_press_maybe(interactive.then_some(Message::ConfirmDelete))
        .style(button::danger);

    let actions = row![Space::new().width(Length::Fill), cancel_btn, delete_btn]
        .spacing(10)
        .width(Length::Fill);

    column![title, description, warning, actions]
        .spacing(15)
        .width(Length::Fixed(450.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_keeps_target_for_exit() {
        let mut state = DeleteState::default();
        state.show(Record::new(7, "Ken", "ken@example.com", "viewer"));
        state.close();
        assert!(!state.is_open);
        assert_eq!(state.target.as_ref().map(|r| r.id), Some(7));
    }
}
