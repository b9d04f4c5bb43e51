//! Shared environment handed to every overlay
//!
//! Bundles the process-wide collaborators an overlay touches: the mount
//! hosts, the listener registry, and the page scroll lock.

use std::sync::Arc;

use crate::listeners::ListenerRegistry;
use crate::mount::HostRegistry;
use crate::scroll_lock::ScrollLock;

#[derive(Debug, Clone)]
pub struct OverlayEnv {
    pub hosts: Arc<HostRegistry>,
    pub listeners: Arc<ListenerRegistry>,
    pub scroll: Arc<ScrollLock>,
}

impl OverlayEnv {
    /// Application environment: root host installed, global scroll lock
    pub fn standard() -> Self {
        Self {
            hosts: HostRegistry::with_root(),
            listeners: ListenerRegistry::new(),
            scroll: ScrollLock::global(),
        }
    }

    /// Environment with a private scroll lock and no hosts installed
    ///
    /// Embedders install their own hosts; tests use it to stay independent
    /// of the global lock.
    pub fn isolated() -> Self {
        Self {
            hosts: HostRegistry::new(),
            listeners: ListenerRegistry::new(),
            scroll: Arc::new(ScrollLock::new()),
        }
    }
}
