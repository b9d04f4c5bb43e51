//! Theme handler
//!
//! Handles: ToggleTheme

use super::super::app::AdminApp;
use crate::config;

impl AdminApp {
    /// Handle ToggleTheme message (switch and persist)
    pub fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        log::info!("Theme switched to {:?}", self.config.theme);

        if let Err(e) = config::save_config(&self.config, &self.config_path) {
            log::warn!("Failed to save theme: {:#}", e);
            self.status = format!("Theme not saved: {}", e);
        }
    }
}
