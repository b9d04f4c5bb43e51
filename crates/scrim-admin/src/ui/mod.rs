//! User interface modules for scrim-admin

pub mod app;
pub mod delete_modal;
pub mod edit_modal;
pub mod handlers;
pub mod message;
pub mod table;

pub use app::AdminApp;
pub use message::Message;
