//! Quantified dismissal and resource properties of the overlay controller

use std::time::{Duration, Instant};

use proptest::prelude::*;
use scrim_core::{
    Dismissal, Overflow, Overlay, OverlayConfig, OverlayEnv, Phase, PointerPosition,
    PointerRelease, ReleaseTarget, DRAG_TOLERANCE, ROOT_HOST_ID,
};

fn env() -> OverlayEnv {
    let env = OverlayEnv::isolated();
    env.hosts.install(ROOT_HOST_ID);
    env
}

fn open_overlay(env: &OverlayEnv, config: OverlayConfig) -> Overlay {
    let mut overlay = Overlay::new(env).unwrap();
    overlay.sync(&config.open(true), Instant::now());
    overlay
}

fn gesture(overlay: &mut Overlay, down: (f32, f32), up: (f32, f32), target: ReleaseTarget) -> Option<Dismissal> {
    overlay.pointer_down(PointerPosition::new(down.0, down.1));
    overlay.pointer_up(
        PointerRelease {
            position: PointerPosition::new(up.0, up.1),
            target,
        },
        Instant::now(),
    )
}

proptest! {
    #[test]
    fn small_backdrop_gestures_dismiss_exactly_once(
        x in 0.0f32..2000.0,
        y in 0.0f32..2000.0,
        dx in -DRAG_TOLERANCE..=DRAG_TOLERANCE,
        dy in -DRAG_TOLERANCE..=DRAG_TOLERANCE,
    ) {
        let env = env();
        let mut overlay = open_overlay(&env, OverlayConfig::default());
        // Stay exactly within tolerance despite float rounding of x + dx
        let up = (x + dx, y + dy);
        prop_assume!((up.0 - x).abs() <= DRAG_TOLERANCE && (up.1 - y).abs() <= DRAG_TOLERANCE);

        prop_assert_eq!(gesture(&mut overlay, (x, y), up, ReleaseTarget::Backdrop), Some(Dismissal::OutsideClick));
        prop_assert_eq!(gesture(&mut overlay, (x, y), up, ReleaseTarget::Backdrop), None);
    }

    #[test]
    fn dragged_gestures_never_dismiss(
        x in 0.0f32..2000.0,
        y in 0.0f32..2000.0,
        travel in (DRAG_TOLERANCE + 0.5)..500.0,
        horizontal in any::<bool>(),
        negative in any::<bool>(),
    ) {
        let env = env();
        let mut overlay = open_overlay(&env, OverlayConfig::default().animate(false));
        let signed = if negative { -travel } else { travel };
        let up = if horizontal { (x + signed, y) } else { (x, y + signed) };

        prop_assert_eq!(gesture(&mut overlay, (x, y), up, ReleaseTarget::Backdrop), None);
        prop_assert_eq!(overlay.phase(), Phase::Open);
    }

    #[test]
    fn releases_inside_content_never_dismiss(
        down in (0.0f32..2000.0, 0.0f32..2000.0),
        up in (0.0f32..2000.0, 0.0f32..2000.0),
    ) {
        let env = env();
        let mut overlay = open_overlay(&env, OverlayConfig::default());
        prop_assert_eq!(gesture(&mut overlay, down, up, ReleaseTarget::Content), None);
        prop_assert!(overlay.is_active());
    }

    #[test]
    fn non_dismissible_overlays_ignore_escape_and_clicks(
        down in (0.0f32..2000.0, 0.0f32..2000.0),
        up in (0.0f32..2000.0, 0.0f32..2000.0),
        on_content in any::<bool>(),
    ) {
        let env = env();
        let mut overlay = open_overlay(&env, OverlayConfig::default().dismissible(false));
        let target = if on_content { ReleaseTarget::Content } else { ReleaseTarget::Backdrop };

        prop_assert_eq!(overlay.escape_pressed(Instant::now()), None);
        prop_assert_eq!(gesture(&mut overlay, down, up, target), None);
        prop_assert!(overlay.is_active());
    }
}

#[test]
fn reference_scenarios() {
    let env = env();

    let mut overlay = open_overlay(&env, OverlayConfig::default());
    assert_eq!(
        gesture(&mut overlay, (100.0, 100.0), (105.0, 103.0), ReleaseTarget::Backdrop),
        Some(Dismissal::OutsideClick)
    );

    let mut overlay = open_overlay(&env, OverlayConfig::default());
    assert_eq!(gesture(&mut overlay, (100.0, 100.0), (140.0, 100.0), ReleaseTarget::Backdrop), None);
    drop(overlay);

    let mut overlay = open_overlay(&env, OverlayConfig::default());
    assert_eq!(gesture(&mut overlay, (100.0, 100.0), (100.0, 100.0), ReleaseTarget::Content), None);
}

#[test]
fn listener_count_is_stable_across_cycles() {
    let env = env();
    let before = env.listeners.total();
    let config = OverlayConfig::default();
    let mut overlay = Overlay::new(&env).unwrap();
    let mut now = Instant::now();

    for cycle in 0..25 {
        overlay.sync(&config.clone().open(true), now);
        now += Duration::from_millis(600);
        overlay.tick(now);

        // Alternate the ways an activation can end
        if cycle % 2 == 0 {
            assert!(overlay.escape_pressed(now).is_some());
        }
        overlay.sync(&config.clone().open(false), now);
        now += Duration::from_millis(600);
        overlay.tick(now);
        assert_eq!(overlay.phase(), Phase::Closed);
    }

    assert_eq!(env.listeners.total(), before);
}

#[test]
fn scroll_state_restored_after_any_sequence() {
    let env = env();
    env.scroll.set_overflow(Overflow::Scroll);
    let config = OverlayConfig::default();
    let mut now = Instant::now();

    {
        let mut overlay = Overlay::new(&env).unwrap();
        // Open, close mid-enter, reopen mid-exit, dismiss, reopen
        overlay.sync(&config.clone().open(true), now);
        now += Duration::from_millis(100);
        overlay.sync(&config.clone().open(false), now);
        now += Duration::from_millis(50);
        overlay.sync(&config.clone().open(true), now);
        assert_eq!(env.scroll.overflow(), Overflow::Hidden);
        assert!(overlay.escape_pressed(now).is_some());
        assert_eq!(env.scroll.overflow(), Overflow::Scroll);
        overlay.sync(&config.clone().open(true), now);
        assert!(env.scroll.is_locked());
        // Torn down while open
    }

    assert!(!env.scroll.is_locked());
    assert_eq!(env.scroll.overflow(), Overflow::Scroll);
    assert_eq!(env.listeners.total(), 0);
}
