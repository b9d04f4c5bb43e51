//! Dismissal arbitration for pointer gestures
//!
//! A bare "was the click target the backdrop?" check closes overlays whenever
//! a user starts selecting text inside the dialog and releases the button over
//! the backdrop. The arbiter instead pairs each pointer-up with the position
//! recorded at pointer-down and only treats short, stationary gestures that end
//! outside the content as outside-clicks.

/// Maximum per-axis pointer travel (logical pixels) for a gesture to count as a click
pub const DRAG_TOLERANCE: f32 = 15.0;

/// Screen position of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where a pointer-up landed relative to the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTarget {
    /// On the backdrop, outside the content boundary
    Backdrop,
    /// Inside the content boundary (dialog body, buttons, selected text)
    Content,
}

/// A completed pointer-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRelease {
    pub position: PointerPosition,
    pub target: ReleaseTarget,
}

/// Why a gesture was not treated as a dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The overlay opted out of outside-click dismissal
    NotDismissible,
    /// No pointer-down was observed for this gesture
    NoSnapshot,
    /// The gesture ended on the overlay content
    InsideContent,
    /// The pointer travelled further than [`DRAG_TOLERANCE`]
    Dragged,
}

/// Outcome of evaluating one pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Dismiss,
    Ignore(IgnoreReason),
}

impl Verdict {
    pub fn is_dismiss(self) -> bool {
        matches!(self, Verdict::Dismiss)
    }
}

/// Classify a gesture without touching any state
pub fn classify(
    down: Option<PointerPosition>,
    release: PointerRelease,
    dismissible: bool,
) -> Verdict {
    if !dismissible {
        return Verdict::Ignore(IgnoreReason::NotDismissible);
    }
    let Some(down) = down else {
        return Verdict::Ignore(IgnoreReason::NoSnapshot);
    };
    if release.target == ReleaseTarget::Content {
        return Verdict::Ignore(IgnoreReason::InsideContent);
    }

    let dx = (release.position.x - down.x).abs();
    let dy = (release.position.y - down.y).abs();
    if dx > DRAG_TOLERANCE || dy > DRAG_TOLERANCE {
        return Verdict::Ignore(IgnoreReason::Dragged);
    }

    Verdict::Dismiss
}

/// Per-overlay gesture tracker holding the pointer-down snapshot
#[derive(Debug, Default)]
pub struct DismissalArbiter {
    snapshot: Option<PointerPosition>,
}

impl DismissalArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-down inside the tracked backdrop region
    pub fn pointer_down(&mut self, position: PointerPosition) {
        self.snapshot = Some(position);
    }

    /// Evaluate a pointer-up against the recorded snapshot
    ///
    /// The snapshot is consumed whatever the verdict, so a stale pointer-down
    /// can never pair with a later release.
    pub fn pointer_up(&mut self, release: PointerRelease, dismissible: bool) -> Verdict {
        let verdict = classify(self.snapshot.take(), release, dismissible);
        log::debug!("Pointer release at {:?}: {:?}", release.position, verdict);
        verdict
    }

    /// Drop any pending snapshot (open/close transitions, teardown)
    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    pub fn snapshot(&self) -> Option<PointerPosition> {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(x: f32, y: f32, target: ReleaseTarget) -> PointerRelease {
        PointerRelease {
            position: PointerPosition::new(x, y),
            target,
        }
    }

    #[test]
    fn test_small_movement_on_backdrop_dismisses() {
        let mut arbiter = DismissalArbiter::new();
        arbiter.pointer_down(PointerPosition::new(100.0, 100.0));
        let verdict = arbiter.pointer_up(release(105.0, 103.0, ReleaseTarget::Backdrop), true);
        assert_eq!(verdict, Verdict::Dismiss);
        assert!(arbiter.snapshot().is_none());
    }

    #[test]
    fn test_drag_does_not_dismiss() {
        let mut arbiter = DismissalArbiter::new();
        arbiter.pointer_down(PointerPosition::new(100.0, 100.0));
        let verdict = arbiter.pointer_up(release(140.0, 100.0, ReleaseTarget::Backdrop), true);
        assert_eq!(verdict, Verdict::Ignore(IgnoreReason::Dragged));
        assert!(arbiter.snapshot().is_none(), "snapshot must be cleared after a drag");
    }

    #[test]
    fn test_release_inside_content_does_not_dismiss() {
        let mut arbiter = DismissalArbiter::new();
        arbiter.pointer_down(PointerPosition::new(100.0, 100.0));
        let verdict = arbiter.pointer_up(release(100.0, 100.0, ReleaseTarget::Content), true);
        assert_eq!(verdict, Verdict::Ignore(IgnoreReason::InsideContent));
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let down = Some(PointerPosition::new(0.0, 0.0));
        assert!(classify(down, release(15.0, 15.0, ReleaseTarget::Backdrop), true).is_dismiss());
        assert!(!classify(down, release(15.5, 0.0, ReleaseTarget::Backdrop), true).is_dismiss());
        assert!(!classify(down, release(0.0, -16.0, ReleaseTarget::Backdrop), true).is_dismiss());
    }

    #[test]
    fn test_missing_snapshot_never_dismisses() {
        let mut arbiter = DismissalArbiter::new();
        let verdict = arbiter.pointer_up(release(0.0, 0.0, ReleaseTarget::Backdrop), true);
        assert_eq!(verdict, Verdict::Ignore(IgnoreReason::NoSnapshot));
    }

    #[test]
    fn test_not_dismissible_wins_over_everything() {
        let mut arbiter = DismissalArbiter::new();
        arbiter.pointer_down(PointerPosition::new(10.0, 10.0));
        let verdict = arbiter.pointer_up(release(10.0, 10.0, ReleaseTarget::Backdrop), false);
        assert_eq!(verdict, Verdict::Ignore(IgnoreReason::NotDismissible));
        assert!(arbiter.snapshot().is_none());
    }

    #[test]
    fn test_stale_snapshot_cannot_dismiss_twice() {
        let mut arbiter = DismissalArbiter::new();
        arbiter.pointer_down(PointerPosition::new(50.0, 50.0));
        assert!(arbiter
            .pointer_up(release(50.0, 50.0, ReleaseTarget::Backdrop), true)
            .is_dismiss());
        // Second release without a new pointer-down
        assert_eq!(
            arbiter.pointer_up(release(50.0, 50.0, ReleaseTarget::Backdrop), true),
            Verdict::Ignore(IgnoreReason::NoSnapshot)
        );
    }

    #[test]
    fn test_latest_pointer_down_wins() {
        let mut arbiter = DismissalArbiter::new();
        arbiter.pointer_down(PointerPosition::new(0.0, 0.0));
        arbiter.pointer_down(PointerPosition::new(200.0, 200.0));
        assert!(arbiter
            .pointer_up(release(205.0, 195.0, ReleaseTarget::Backdrop), true)
            .is_dismiss());
    }
}
