//! Page scroll locking
//!
//! While an overlay is open the page behind it must not scroll. The lock is
//! process-wide state with exactly one owner at a time: acquiring it saves the
//! page's current overflow mode and forces [`Overflow::Hidden`]; dropping the
//! returned guard restores the saved mode.
//!
//! Nested overlays are not reference counted. A second acquire while the lock
//! is held fails with [`OverlayError::ScrollLockHeld`].

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use crate::error::OverlayError;

/// Page overflow behaviour (what the page does with content taller than the window)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Scroll when needed
    #[default]
    Auto,
    /// Always show scrollbars
    Scroll,
    /// Never scroll
    Hidden,
}

#[derive(Debug, Default)]
struct PageScroll {
    overflow: Overflow,
    /// Overflow to restore on release; `Some` while locked
    saved: Option<Overflow>,
}

/// Process-wide scroll lock for the hosting page
#[derive(Debug, Default)]
pub struct ScrollLock {
    page: Mutex<PageScroll>,
}

static GLOBAL: LazyLock<Arc<ScrollLock>> = LazyLock::new(|| Arc::new(ScrollLock::new()));

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock shared by every overlay in the process
    pub fn global() -> Arc<ScrollLock> {
        Arc::clone(&GLOBAL)
    }

    fn page(&self) -> MutexGuard<'_, PageScroll> {
        // State is two plain fields; a panic elsewhere cannot leave it torn
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Effective overflow mode of the page right now
    pub fn overflow(&self) -> Overflow {
        self.page().overflow
    }

    /// Whether page scrolling is currently suppressed by an overlay
    pub fn is_locked(&self) -> bool {
        self.page().saved.is_some()
    }

    /// Change the page's own overflow mode
    ///
    /// While locked the change is deferred: it becomes the mode restored on
    /// release, and the page stays hidden until then.
    pub fn set_overflow(&self, overflow: Overflow) {
        let mut page = self.page();
        match page.saved {
            Some(_) => page.saved = Some(overflow),
            None => page.overflow = overflow,
        }
    }

    /// Lock page scrolling until the returned guard is dropped
    pub fn acquire(self: &Arc<Self>) -> Result<ScrollLockGuard, OverlayError> {
        let mut page = self.page();
        if page.saved.is_some() {
            log::warn!("Scroll lock requested while already held; nested overlays are not supported");
            return Err(OverlayError::ScrollLockHeld);
        }
        page.saved = Some(page.overflow);
        page.overflow = Overflow::Hidden;
        log::debug!("Page scroll locked (saved {:?})", page.saved);

        Ok(ScrollLockGuard {
            lock: Arc::clone(self),
        })
    }

    fn release(&self) {
        let mut page = self.page();
        if let Some(saved) = page.saved.take() {
            page.overflow = saved;
            log::debug!("Page scroll restored to {:?}", saved);
        }
    }
}

/// Ownership of the page scroll lock; releases it on drop
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: Arc<ScrollLock>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}
