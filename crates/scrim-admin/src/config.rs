//! Dashboard configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/scrim-admin/config.yaml

use anyhow::{Context, Result};
use scrim_core::{EnterPreset, ExitPreset, OverlayConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Modal behaviour shared by every dashboard overlay
    pub modal: ModalConfig,
    /// Colour scheme
    pub theme: ThemeMode,
}

/// Modal configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Play enter/exit transitions (false = instant)
    pub animate: bool,
    /// Allow escape and outside clicks to close edit dialogs
    pub dismissible: bool,
    /// Enter preset name, e.g. "zoomIn" or "slideInFromUp"
    pub enter_preset: EnterPreset,
    /// Exit preset name, e.g. "zoomOut" or "slideOutToDown"
    pub exit_preset: ExitPreset,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            animate: true,
            dismissible: true,
            enter_preset: EnterPreset::default(),
            exit_preset: ExitPreset::default(),
        }
    }
}

impl ModalConfig {
    /// Overlay settings derived from this section (closed)
    pub fn overlay_config(&self) -> OverlayConfig {
        OverlayConfig::default()
            .animate(self.animate)
            .dismissible(self.dismissible)
            .presets(self.enter_preset.clone(), self.exit_preset.clone())
    }
}

/// Light or dark colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrim-admin")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> DashboardConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return DashboardConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<DashboardConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - presets {} / {}, animate: {}",
                    config.modal.enter_preset,
                    config.modal.exit_preset,
                    config.modal.animate
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                DashboardConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            DashboardConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates the parent directory if needed.
pub fn save_config(config: &DashboardConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}
