//! Composition of overlays mounted on a host
//!
//! A [`Portal`] collects the rendered layers for one [`MountHost`] and stacks
//! them above the page content in the host's attach order, so a later
//! overlay always paints over an earlier one regardless of where in the
//! view tree it was built.

use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::Stack;
use iced::{Element, Length};
use scrim_core::{MountHost, Overlay, OverlayId};

/// Layers waiting to be composed onto a mount host
pub struct Portal<'a, Message> {
    host: Arc<MountHost>,
    layers: HashMap<OverlayId, Element<'a, Message>>,
}

impl<'a, Message: 'a> Portal<'a, Message> {
    pub fn new(host: Arc<MountHost>) -> Self {
        Self {
            host,
            layers: HashMap::new(),
        }
    }

    /// Queue an overlay's rendered layer
    ///
    /// `None` (a hidden overlay) is skipped. Layers for overlays attached to a
    /// different host are dropped with a warning.
    pub fn mount(&mut self, overlay: &Overlay, layer: Option<Element<'a, Message>>) {
        let Some(layer) = layer else {
            return;
        };
        if overlay.host_id() != self.host.id() {
            log::warn!(
                "overlay {} belongs to host '{}', not '{}'",
                overlay.id().get(),
                overlay.host_id(),
                self.host.id()
            );
            return;
        }
        self.layers.insert(overlay.id(), layer);
    }

    /// Number of layers queued so far
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Stack queued layers above `base`
    pub fn compose(mut self, base: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        let base = base.into();
        if self.layers.is_empty() {
            return base;
        }

        let mut children = Vec::with_capacity(self.layers.len() + 1);
        children.push(base);
        for id in self.host.slots() {
            if let Some(layer) = self.layers.remove(&id) {
                children.push(layer);
            }
        }

        Stack::with_children(children)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;
    use scrim_core::{OverlayEnv, ROOT_HOST_ID};

    #[test]
    fn test_mount_skips_hidden_and_foreign_layers() {
        let env = OverlayEnv::isolated();
        let root = env.hosts.install(ROOT_HOST_ID);
        env.hosts.install("side-panel");
        let on_root = Overlay::new(&env).unwrap();
        let on_side = Overlay::on_host(&env, "side-panel").unwrap();

        let mut portal: Portal<'_, ()> = Portal::new(root);
        portal.mount(&on_root, None);
        assert!(portal.is_empty());

        portal.mount(&on_side, Some(text("side").into()));
        assert!(portal.is_empty());

        portal.mount(&on_root, Some(text("root").into()));
        assert_eq!(portal.len(), 1);
    }
}
