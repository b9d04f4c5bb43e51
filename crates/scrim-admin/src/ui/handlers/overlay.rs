//! Overlay gesture and frame handlers
//!
//! Handles: Modal, Input, Tick

use scrim_core::{Dismissal, Overlay, PointerPosition, PointerRelease};
use scrim_widgets::{ModalEvent, OverlayInput};

use super::super::app::AdminApp;
use super::super::message::ModalKind;

impl AdminApp {
    /// Push dialog open flags and modal settings into the overlay controllers
    ///
    /// Call after any change to `edit.is_open` or `delete.is_open`.
    pub fn sync_overlays(&mut self) {
        let base = self.config.modal.overlay_config();

        let edit = base.clone().style_class("accent").open(self.edit.is_open);
        self.edit_overlay.sync(&edit, self.now);

        let delete = base
            .dismissible(false)
            .close_affordance(false)
            .style_class("danger")
            .open(self.delete.is_open);
        self.delete_overlay.sync(&delete, self.now);
    }

    /// Handle a gesture reported by a modal view
    pub fn handle_modal_event(&mut self, kind: ModalKind, event: ModalEvent) {
        let now = self.now;
        let cursor = self.cursor.map(|point| PointerPosition::new(point.x, point.y));
        let overlay = self.overlay_mut(kind);

        let dismissal = match event {
            ModalEvent::Pressed => {
                if let Some(position) = cursor {
                    overlay.pointer_down(position);
                }
                None
            }
            ModalEvent::Released(target) => {
                let Some(position) = cursor else {
                    log::debug!("Release on {:?} modal before any cursor movement", kind);
                    return;
                };
                overlay.pointer_up(PointerRelease { position, target }, now)
            }
            ModalEvent::CloseRequested => overlay.close_affordance(now),
        };

        if let Some(dismissal) = dismissal {
            self.apply_dismissal(kind, dismissal);
        }
    }

    /// Handle window input
    pub fn handle_input(&mut self, input: OverlayInput) {
        match input {
            OverlayInput::CursorMoved(position) => self.cursor = Some(position),
            OverlayInput::EscapePressed => {
                let now = self.now;
                // Every active overlay holds its own key listener
                for kind in [ModalKind::Delete, ModalKind::Edit] {
                    if let Some(dismissal) = self.overlay_mut(kind).escape_pressed(now) {
                        self.apply_dismissal(kind, dismissal);
                    }
                }
            }
        }
    }

    /// Handle Tick message (advance running transitions)
    pub fn handle_tick(&mut self) {
        self.edit_overlay.tick(self.now);
        self.delete_overlay.tick(self.now);
    }

    fn overlay_mut(&mut self, kind: ModalKind) -> &mut Overlay {
        match kind {
            ModalKind::Edit => &mut self.edit_overlay,
            ModalKind::Delete => &mut self.delete_overlay,
        }
    }

    /// The overlay asked to close; mirror it in the dialog's open flag
    fn apply_dismissal(&mut self, kind: ModalKind, dismissal: Dismissal) {
        log::info!("{:?} dialog dismissed ({:?})", kind, dismissal);
        match kind {
            ModalKind::Edit => self.edit.close(),
            ModalKind::Delete => self.delete.close(),
        }
        self.sync_overlays();
    }
}
