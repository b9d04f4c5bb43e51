//! Records table

use iced::widget::{button, column, container, row, rule, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use super::message::Message;
use crate::data::Record;

const NAME_WIDTH: f32 = 220.0;
const EMAIL_WIDTH: f32 = 260.0;
const ROLE_WIDTH: f32 = 100.0;

/// Render the records table
///
/// Row buttons are disabled while `locked` (a modal is up).
pub fn view(records: &[Record], locked: bool) -> Element<'_, Message> {
    let header = row![
        text("Name").size(14).width(Length::Fixed(NAME_WIDTH)),
        text("Email").size(14).width(Length::Fixed(EMAIL_WIDTH)),
        text("Role").size(14).width(Length::Fixed(ROLE_WIDTH)),
    ]
    .spacing(10);

    if records.is_empty() {
        return column![header, rule::horizontal(1), text("No records").size(14)]
            .spacing(8)
            .into();
    }

    let rows: Vec<Element<Message>> = records.iter().map(|record| record_row(record, locked)).collect();

    column![
        header,
        rule::horizontal(1),
        scrollable(column(rows).spacing(6)).height(Length::Fill),
    ]
    .spacing(8)
    .into()
}

fn record_row(record: &Record, locked: bool) -> Element<'_, Message> {
    let edit_btn = button(text("Edit").size(12))
        .on_press_maybe((!locked).then_some(Message::EditRecord(record.id)))
        .style(button::secondary);
    let delete_btn = button(text("Delete").size(12))
        .on_press_maybe((!locked).then_some(Message::DeleteRecord(record.id)))
        .style(button::danger);

    container(
        row![
            text(&record.name).width(Length::Fixed(NAME_WIDTH)),
            text(&record.email).width(Length::Fixed(EMAIL_WIDTH)),
            text(&record.role).width(Length::Fixed(ROLE_WIDTH)),
            Space::new().width(Length::Fill),
            edit_btn,
            delete_btn,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(6)
    .into()
}
