//! scrim-admin - CRUD dashboard built on scrim overlays
//!
//! A records table whose edit and delete dialogs are scrim modals mounted on
//! the window's root overlay host.

pub mod config;
pub mod data;
pub mod ui;
