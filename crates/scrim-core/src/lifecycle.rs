//! Overlay lifecycle controller
//!
//! Drives one overlay through `Closed -> Opening -> Open -> Closing -> Closed`.
//!
//! ## Activation
//!
//! Entering `Opening`/`Open` activates the overlay: escape, pointer-down and
//! pointer-up listeners are registered and the page scroll lock is acquired.
//! Leaving that window (a dismissal, `is_open` going false, or the overlay
//! being dropped) deactivates it. Activation resources are RAII handles held
//! in one [`Activation`] value, so every exit path releases them, including
//! a drop in the middle of a transition.
//!
//! ## Transitions
//!
//! Time is passed in by the host (`now` arguments, usually from a frame tick).
//! While `Closing` the content stays mounted but non-interactive until the
//! exit preset finishes; afterwards it stays attached to its host but hidden,
//! so a quick reopen does not rebuild it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::arbiter::{DismissalArbiter, PointerPosition, PointerRelease, Verdict};
use crate::config::OverlayConfig;
use crate::env::OverlayEnv;
use crate::error::OverlayError;
use crate::listeners::{ListenerHandle, ListenerKind, ListenerRegistry};
use crate::mount::{MountHost, OverlayId, ROOT_HOST_ID};
use crate::preset::{Frame, Transition};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    /// Opening or Open: listeners registered, scroll locked
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Opening | Phase::Open)
    }
}

/// What triggered a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    EscapeKey,
    OutsideClick,
    CloseAffordance,
}

/// Whether the overlay is painted at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Attached to its host but not painted
    Hidden,
    /// Painted (possibly mid-transition)
    Mounted,
}

/// Paint state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub frame: Frame,
    /// Receives pointer events; false while closing
    pub interactive: bool,
    pub presence: Presence,
}

/// Resources held for the duration of one activation
#[derive(Debug)]
struct Activation {
    _listeners: Vec<ListenerHandle>,
    scroll: Option<ScrollLockGuard>,
}

/// A transition in flight, moving the shown level from `from` to `to`
///
/// Always runs for the full preset duration, even when reversing a partial
/// transition, so an exit keeps the content mounted for the exit preset's
/// whole duration.
#[derive(Debug, Clone, Copy)]
struct Running {
    started: Instant,
    transition: Transition,
    from: f32,
    to: f32,
}

impl Running {
    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    fn progress(&self, now: Instant) -> f32 {
        self.transition.progress(self.elapsed(now))
    }

    /// Shown level (0.0 hidden, 1.0 resting) at `now`
    fn shown(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }
}

/// Controller for a single overlay instance
#[derive(Debug)]
pub struct Overlay {
    id: OverlayId,
    host: Arc<MountHost>,
    listeners: Arc<ListenerRegistry>,
    scroll: Arc<ScrollLock>,
    config: OverlayConfig,
    phase: Phase,
    arbiter: DismissalArbiter,
    activation: Option<Activation>,
    running: Option<Running>,
}

impl Overlay {
    /// Create an overlay mounted on the root host
    ///
    /// Fails with [`OverlayError::MountHostMissing`] if the environment has no
    /// root host installed.
    pub fn new(env: &OverlayEnv) -> Result<Self, OverlayError> {
        Self::on_host(env, ROOT_HOST_ID)
    }

    /// Create an overlay mounted on a specific host
    pub fn on_host(env: &OverlayEnv, host_id: &str) -> Result<Self, OverlayError> {
        let host = env.hosts.resolve(host_id)?;
        let id = OverlayId::next();
        host.attach(id);

        Ok(Self {
            id,
            host,
            listeners: Arc::clone(&env.listeners),
            scroll: Arc::clone(&env.scroll),
            config: OverlayConfig::default(),
            phase: Phase::Closed,
            arbiter: DismissalArbiter::new(),
            activation: None,
            running: None,
        })
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn host_id(&self) -> &str {
        self.host.id()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Whether dismissal listeners are registered right now
    pub fn is_active(&self) -> bool {
        self.activation.is_some()
    }

    /// Whether this overlay currently owns the page scroll lock
    pub fn holds_scroll_lock(&self) -> bool {
        self.activation
            .as_ref()
            .is_some_and(|activation| activation.scroll.is_some())
    }

    /// Whether a transition is in flight (the host should keep ticking)
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Apply the caller's latest configuration
    ///
    /// Opening and closing follow `config.is_open`; calling this repeatedly
    /// with the same value is a no-op.
    pub fn sync(&mut self, config: &OverlayConfig, now: Instant) {
        self.config = config.clone();
        match (config.is_open, self.phase) {
            (true, Phase::Closed | Phase::Closing) => self.open(now),
            (false, Phase::Opening | Phase::Open) => self.close(now),
            _ => {}
        }
    }

    /// Advance transitions; call once per frame while [`is_animating`](Self::is_animating)
    pub fn tick(&mut self, now: Instant) {
        let Some(running) = self.running else {
            return;
        };
        if !running.transition.is_finished(running.elapsed(now)) {
            return;
        }

        self.running = None;
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                log::debug!("Overlay {:?} open", self.id);
            }
            Phase::Closing => {
                self.phase = Phase::Closed;
                log::debug!("Overlay {:?} closed", self.id);
            }
            Phase::Open | Phase::Closed => {}
        }
    }

    /// Escape key pressed
    pub fn escape_pressed(&mut self, now: Instant) -> Option<Dismissal> {
        if !self.is_active() || !self.config.dismissible {
            return None;
        }
        self.dismiss(Dismissal::EscapeKey, now)
    }

    /// Pointer pressed anywhere over the overlay
    pub fn pointer_down(&mut self, position: PointerPosition) {
        if self.is_active() {
            self.arbiter.pointer_down(position);
        }
    }

    /// Pointer released over the backdrop or the content
    pub fn pointer_up(&mut self, release: PointerRelease, now: Instant) -> Option<Dismissal> {
        if !self.is_active() {
            return None;
        }
        match self.arbiter.pointer_up(release, self.config.dismissible) {
            Verdict::Dismiss => self.dismiss(Dismissal::OutsideClick, now),
            Verdict::Ignore(_) => None,
        }
    }

    /// The × close button was activated
    ///
    /// Works for non-dismissible overlays too; the opt-out only covers escape
    /// and outside clicks.
    pub fn close_affordance(&mut self, now: Instant) -> Option<Dismissal> {
        if !self.is_active() || !self.config.show_close_affordance {
            return None;
        }
        self.dismiss(Dismissal::CloseAffordance, now)
    }

    /// Sample paint parameters at `now`
    pub fn visual(&self, now: Instant) -> Visual {
        match (self.phase, self.running) {
            (Phase::Closed, _) => Visual {
                frame: Frame::HIDDEN,
                interactive: false,
                presence: Presence::Hidden,
            },
            (Phase::Open, _) => Visual {
                frame: Frame::SHOWN,
                interactive: true,
                presence: Presence::Mounted,
            },
            (Phase::Opening, Some(running)) => Visual {
                frame: running.transition.effect.sample(running.shown(now)),
                interactive: true,
                presence: Presence::Mounted,
            },
            (Phase::Closing, Some(running)) => Visual {
                frame: running.transition.effect.sample(running.shown(now)),
                interactive: false,
                presence: Presence::Mounted,
            },
            (Phase::Opening, None) => Visual {
                frame: Frame::SHOWN,
                interactive: true,
                presence: Presence::Mounted,
            },
            (Phase::Closing, None) => Visual {
                frame: Frame::HIDDEN,
                interactive: false,
                presence: Presence::Mounted,
            },
        }
    }

    fn dismiss(&mut self, reason: Dismissal, now: Instant) -> Option<Dismissal> {
        log::info!("Overlay {:?} dismissed by {:?}", self.id, reason);
        self.close(now);
        Some(reason)
    }

    fn open(&mut self, now: Instant) {
        let transition = self.config.enter_transition();
        // Reversing a running exit starts the enter where the exit left off
        let shown = match (self.phase, self.running) {
            (Phase::Closing, Some(running)) => running.shown(now),
            _ => 0.0,
        };

        self.activate();
        self.host.attach(self.id);
        self.start(transition, shown, 1.0, now, Phase::Opening, Phase::Open);
        log::info!("Overlay {:?} opening ({:?})", self.id, self.config.enter_preset);
    }

    fn close(&mut self, now: Instant) {
        let transition = self.config.exit_transition();
        let shown = match (self.phase, self.running) {
            (Phase::Opening, Some(running)) => running.shown(now),
            _ => 1.0,
        };

        self.deactivate();
        self.start(transition, shown, 0.0, now, Phase::Closing, Phase::Closed);
        log::info!("Overlay {:?} closing ({:?})", self.id, self.config.exit_preset);
    }

    /// Run `transition` from shown level `from` to `to`, starting at `now`
    ///
    /// Any transition still running is cancelled.
    fn start(
        &mut self,
        transition: Transition,
        from: f32,
        to: f32,
        now: Instant,
        during: Phase,
        after: Phase,
    ) {
        if transition.duration.is_zero() {
            self.running = None;
            self.phase = after;
            return;
        }
        self.running = Some(Running {
            started: now,
            transition,
            from: from.clamp(0.0, 1.0),
            to,
        });
        self.phase = during;
    }

    fn activate(&mut self) {
        if self.activation.is_some() {
            return;
        }
        let listeners = ListenerKind::ALL
            .iter()
            .map(|&kind| self.listeners.register(kind))
            .collect();
        let scroll = match self.scroll.acquire() {
            Ok(guard) => Some(guard),
            Err(e) => {
                log::warn!("Overlay {:?} opened without scroll lock: {}", self.id, e);
                None
            }
        };

        self.arbiter.clear();
        self.activation = Some(Activation {
            _listeners: listeners,
            scroll,
        });
    }

    fn deactivate(&mut self) {
        self.arbiter.clear();
        self.activation = None;
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        if self.activation.is_some() {
            log::debug!("Overlay {:?} dropped while {:?}; releasing", self.id, self.phase);
        }
        self.deactivate();
        self.host.detach(self.id);
    }
}
