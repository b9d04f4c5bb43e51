//! Registry of dismissal-related event listeners
//!
//! Overlays register listeners on activation and hold the returned
//! [`ListenerHandle`]s; dropping a handle unregisters it. The host UI asks
//! [`ListenerRegistry::is_listening`] to decide whether global keyboard and
//! pointer events need to be routed at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Kind of event a listener observes
///
/// Only `KeyDown` gates a subscription. The pointer kinds are counted so
/// leaks show up in [`ListenerRegistry::total`]; pointer routing itself
/// follows [`Visual::interactive`](crate::Visual), which is true exactly
/// while an overlay holds these registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Escape key presses
    KeyDown,
    /// Pointer presses on the backdrop
    PointerDown,
    /// Pointer releases anywhere in the overlay
    PointerUp,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 3] = [
        ListenerKind::KeyDown,
        ListenerKind::PointerDown,
        ListenerKind::PointerUp,
    ];

    fn index(self) -> usize {
        match self {
            ListenerKind::KeyDown => 0,
            ListenerKind::PointerDown => 1,
            ListenerKind::PointerUp => 2,
        }
    }
}

/// Counts active listeners per kind
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    counts: [AtomicUsize; 3],
}

impl ListenerRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a listener; it stays active until the handle is dropped
    pub fn register(self: &Arc<Self>, kind: ListenerKind) -> ListenerHandle {
        self.counts[kind.index()].fetch_add(1, Ordering::Relaxed);
        ListenerHandle {
            registry: Arc::clone(self),
            kind,
        }
    }

    /// Active listeners of one kind
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.counts[kind.index()].load(Ordering::Relaxed)
    }

    /// Active listeners of every kind
    pub fn total(&self) -> usize {
        ListenerKind::ALL.iter().map(|&kind| self.count(kind)).sum()
    }

    pub fn is_listening(&self) -> bool {
        self.total() > 0
    }
}

/// A registered listener; unregisters on drop
#[derive(Debug)]
pub struct ListenerHandle {
    registry: Arc<ListenerRegistry>,
    kind: ListenerKind,
}

impl ListenerHandle {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.registry.counts[self.kind.index()].fetch_sub(1, Ordering::Relaxed);
    }
}
