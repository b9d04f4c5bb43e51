//! Record message handlers
//!
//! Handles: Refresh, RecordsLoaded, EditRecord, SaveEdit, CancelEdit,
//! DeleteRecord, ConfirmDelete, CancelDelete

use iced::Task;

use super::super::app::AdminApp;
use super::super::message::Message;
use crate::data::Record;

impl AdminApp {
    /// Handle Refresh message
    pub fn handle_refresh(&mut self) -> Task<Message> {
        if self.loading {
            log::debug!("Refresh requested while a fetch is running");
            return Task::none();
        }
        self.load_records()
    }

    /// Handle RecordsLoaded message
    pub fn handle_records_loaded(&mut self, result: Result<Vec<Record>, String>) {
        self.loading = false;
        match result {
            Ok(records) => {
                log::info!("Loaded {} records", records.len());
                self.status = format!("{} records loaded", records.len());
                self.records.replace(records);
            }
            Err(e) => {
                log::error!("Failed to load records: {}", e);
                self.status = format!("Failed to load records: {}", e);
            }
        }
    }

    /// Handle EditRecord message
    pub fn handle_edit_record(&mut self, id: u64) {
        let Some(record) = self.records.get(id) else {
            log::warn!("Edit requested for unknown record {}", id);
            return;
        };
        self.edit.show(record);
        self.sync_overlays();
    }

    /// Handle SaveEdit message
    pub fn handle_save_edit(&mut self) {
        let Some(id) = self.edit.target else {
            return;
        };
        match self.records.rename(id, &self.edit.draft_name) {
            Ok(()) => {
                log::info!("Renamed record {}", id);
                self.status = String::from("Saved");
                self.edit.close();
                self.sync_overlays();
            }
            Err(e) => {
                // Stay open so the user can fix the name
                self.edit.status = e.to_string();
            }
        }
    }

    /// Handle CancelEdit message
    pub fn handle_cancel_edit(&mut self) {
        self.edit.close();
        self.sync_overlays();
    }

    /// Handle DeleteRecord message
    pub fn handle_delete_record(&mut self, id: u64) {
        let Some(record) = self.records.get(id) else {
            log::warn!("Delete requested for unknown record {}", id);
            return;
        };
        self.delete.show(record.clone());
        self.sync_overlays();
    }

    /// Handle ConfirmDelete message
    pub fn handle_confirm_delete(&mut self) {
        if let Some(id) = self.delete.target.as_ref().map(|record| record.id) {
            match self.records.remove(id) {
                Some(record) => {
                    log::info!("Deleted record {} ({})", record.id, record.name);
                    self.status = format!("Deleted \"{}\"", record.name);
                }
                None => log::warn!("Record {} was already gone", id),
            }
        }
        self.delete.close();
        self.sync_overlays();
    }

    /// Handle CancelDelete message
    pub fn handle_cancel_delete(&mut self) {
        self.delete.close();
        self.sync_overlays();
    }
}
