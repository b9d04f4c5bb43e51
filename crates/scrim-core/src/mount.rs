//! Mount gateway: top-level attachment points for overlay content
//!
//! Overlays never render where their owning component sits. Each overlay is
//! attached to a [`MountHost`] installed once at the top of the UI, so
//! ancestor clipping and stacking order cannot hide it. Slots are keyed by
//! [`OverlayId`]: attaching the same overlay again on the next render keeps its
//! position instead of creating a new layer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::OverlayError;

/// Well-known id of the root-level host shared by all overlays
pub const ROOT_HOST_ID: &str = "overlay-root";

/// Process-unique overlay identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        OverlayId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A top-level attachment point holding overlay slots in paint order
#[derive(Debug)]
pub struct MountHost {
    id: String,
    slots: Mutex<Vec<OverlayId>>,
}

impl MountHost {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            slots: Mutex::new(Vec::new()),
        }
    }

    fn slots_mut(&self) -> MutexGuard<'_, Vec<OverlayId>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attach an overlay, returning its slot index
    ///
    /// Idempotent: an overlay that is already attached keeps its slot.
    pub fn attach(&self, overlay: OverlayId) -> usize {
        let mut slots = self.slots_mut();
        if let Some(index) = slots.iter().position(|&slot| slot == overlay) {
            return index;
        }
        slots.push(overlay);
        log::debug!("Attached overlay {:?} to host '{}'", overlay, self.id);
        slots.len() - 1
    }

    pub fn detach(&self, overlay: OverlayId) {
        let mut slots = self.slots_mut();
        slots.retain(|&slot| slot != overlay);
    }

    /// Attached overlays, bottom-most first
    pub fn slots(&self) -> Vec<OverlayId> {
        self.slots_mut().clone()
    }

    pub fn contains(&self, overlay: OverlayId) -> bool {
        self.slots_mut().contains(&overlay)
    }
}

/// The set of installed mount hosts (the document's root-level containers)
#[derive(Debug, Default)]
pub struct HostRegistry {
    hosts: Mutex<HashMap<String, Arc<MountHost>>>,
}

impl HostRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registry with the well-known [`ROOT_HOST_ID`] host already installed
    pub fn with_root() -> Arc<Self> {
        let registry = Self::new();
        registry.install(ROOT_HOST_ID);
        registry
    }

    fn hosts(&self) -> MutexGuard<'_, HashMap<String, Arc<MountHost>>> {
        self.hosts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a host; installing an existing id returns the existing host
    pub fn install(&self, id: &str) -> Arc<MountHost> {
        let mut hosts = self.hosts();
        let host = hosts
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(MountHost::new(id)));
        Arc::clone(host)
    }

    /// Look up an installed host
    ///
    /// A missing host means the environment was never initialized; callers
    /// must treat the error as fatal.
    pub fn resolve(&self, id: &str) -> Result<Arc<MountHost>, OverlayError> {
        self.hosts()
            .get(id)
            .cloned()
            .ok_or_else(|| OverlayError::MountHostMissing(id.to_string()))
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.hosts().contains_key(id)
    }
}
