//! Per-render overlay configuration
//!
//! The caller rebuilds an [`OverlayConfig`] on every render and hands it to
//! [`Overlay::sync`](crate::Overlay::sync). Nothing about it persists inside
//! the controller beyond the latest copy.

use serde::{Deserialize, Serialize};

use crate::preset::{EnterPreset, ExitPreset, Transition};

/// Caller-supplied overlay settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Whether the caller wants the overlay open. Owned by the caller.
    pub is_open: bool,
    /// Escape key and outside clicks close the overlay
    pub dismissible: bool,
    /// Render the × close button
    pub show_close_affordance: bool,
    /// Run enter/exit transitions; `false` switches instantly
    pub animate: bool,
    pub enter_preset: EnterPreset,
    pub exit_preset: ExitPreset,
    /// Extra style hook forwarded to the renderer (theme variant name)
    pub extra_style_class: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            is_open: false,
            dismissible: true,
            show_close_affordance: true,
            animate: true,
            enter_preset: EnterPreset::ZoomIn,
            exit_preset: ExitPreset::ZoomOut,
            extra_style_class: String::new(),
        }
    }
}

impl OverlayConfig {
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn close_affordance(mut self, show: bool) -> Self {
        self.show_close_affordance = show;
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn presets(mut self, enter: EnterPreset, exit: ExitPreset) -> Self {
        self.enter_preset = enter;
        self.exit_preset = exit;
        self
    }

    pub fn style_class(mut self, class: impl Into<String>) -> Self {
        self.extra_style_class = class.into();
        self
    }

    /// Transition to run when opening
    pub fn enter_transition(&self) -> Transition {
        if self.animate {
            self.enter_preset.transition()
        } else {
            Transition::INSTANT
        }
    }

    /// Transition to run when closing
    pub fn exit_transition(&self) -> Transition {
        if self.animate {
            self.exit_preset.transition()
        } else {
            Transition::INSTANT
        }
    }
}
