//! Application messages

use scrim_widgets::{ModalEvent, OverlayInput};

use crate::data::Record;

/// Which dashboard dialog a modal gesture belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Edit,
    Delete,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Records
    Refresh,
    RecordsLoaded(Result<Vec<Record>, String>),

    // Edit dialog
    EditRecord(u64),
    EditNameChanged(String),
    SaveEdit,
    CancelEdit,

    // Delete dialog
    DeleteRecord(u64),
    ConfirmDelete,
    CancelDelete,

    // Overlays
    Modal(ModalKind, ModalEvent),
    Input(OverlayInput),
    Tick,

    // Appearance
    ToggleTheme,
}
