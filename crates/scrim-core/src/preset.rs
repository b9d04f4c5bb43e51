//! Transition presets for overlay enter/exit
//!
//! Presets are identified by name (`slideInFromUp`, `zoomOut`, ...) so they
//! can come straight from configuration files. Each known name maps to a
//! fixed [`Transition`]; anything else degrades to [`Transition::INSTANT`].
//!
//! | Enter              | Exit             | Effect                 |
//! |--------------------|------------------|------------------------|
//! | `slideInFromUp`    | `slideOutToUp`   | slide along top edge   |
//! | `slideInFromDown`  | `slideOutToDown` | slide along bottom edge|
//! | `slideInFromLeft`  | `slideOutToLeft` | slide along left edge  |
//! | `slideInFromRight` | `slideOutToRight`| slide along right edge |
//! | `zoomIn`           | `zoomOut`        | scale + fade           |

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Duration shared by every named preset
pub const PRESET_DURATION: Duration = Duration::from_millis(500);

/// Distance in logical pixels a slide starts from (or ends at)
pub const SLIDE_DISTANCE: f32 = 60.0;

/// Scale at the hidden end of a zoom
pub const ZOOM_HIDDEN_SCALE: f32 = 0.3;

/// Screen edge a slide moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Up,
    Down,
    Left,
    Right,
}

impl Edge {
    /// Unit vector pointing from the resting position towards this edge
    fn direction(self) -> (f32, f32) {
        match self {
            Edge::Up => (0.0, -1.0),
            Edge::Down => (0.0, 1.0),
            Edge::Left => (-1.0, 0.0),
            Edge::Right => (1.0, 0.0),
        }
    }
}

/// Visual effect a transition animates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Content travels to/from the given edge
    Slide(Edge),
    /// Content scales and fades around its centre
    Zoom,
    /// No animation; state changes immediately
    None,
}

/// Paint parameters for one frame of an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 0.0 (invisible) to 1.0 (fully opaque)
    pub opacity: f32,
    /// Content displacement in logical pixels
    pub offset: (f32, f32),
    /// Content scale factor around its centre
    pub scale: f32,
}

impl Frame {
    /// Fully displayed, no displacement
    pub const SHOWN: Frame = Frame {
        opacity: 1.0,
        offset: (0.0, 0.0),
        scale: 1.0,
    };

    /// Not painted at all
    pub const HIDDEN: Frame = Frame {
        opacity: 0.0,
        offset: (0.0, 0.0),
        scale: 1.0,
    };
}

impl Effect {
    /// Sample the effect at `shown`, where 0.0 is the hidden end and 1.0 is
    /// the resting, fully displayed state.
    pub fn sample(self, shown: f32) -> Frame {
        let shown = shown.clamp(0.0, 1.0);
        let eased = ease_out_cubic(shown);
        match self {
            Effect::Slide(edge) => {
                let (dx, dy) = edge.direction();
                let distance = SLIDE_DISTANCE * (1.0 - eased);
                Frame {
                    opacity: eased,
                    offset: (dx * distance, dy * distance),
                    scale: 1.0,
                }
            }
            Effect::Zoom => Frame {
                opacity: eased,
                offset: (0.0, 0.0),
                scale: ZOOM_HIDDEN_SCALE + (1.0 - ZOOM_HIDDEN_SCALE) * eased,
            },
            Effect::None => {
                if shown > 0.0 {
                    Frame::SHOWN
                } else {
                    Frame::HIDDEN
                }
            }
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// A resolved preset: what to animate and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub effect: Effect,
    pub duration: Duration,
}

impl Transition {
    /// Immediate state change, used for unknown presets and `animate = false`
    pub const INSTANT: Transition = Transition {
        effect: Effect::None,
        duration: Duration::ZERO,
    };

    fn preset(effect: Effect) -> Self {
        Self {
            effect,
            duration: PRESET_DURATION,
        }
    }

    /// Linear progress (0.0 to 1.0) after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the transition has run to completion after `elapsed`
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Named enter presets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnterPreset {
    SlideInFromUp,
    SlideInFromDown,
    SlideInFromLeft,
    SlideInFromRight,
    ZoomIn,
    /// Name that matched no preset; animates as [`Transition::INSTANT`]
    Unrecognized(String),
}

impl Default for EnterPreset {
    fn default() -> Self {
        EnterPreset::ZoomIn
    }
}

impl EnterPreset {
    /// Parse a preset name; unknown names are kept as [`EnterPreset::Unrecognized`]
    pub fn from_id(id: &str) -> Self {
        match id {
            "slideInFromUp" => EnterPreset::SlideInFromUp,
            "slideInFromDown" => EnterPreset::SlideInFromDown,
            "slideInFromLeft" => EnterPreset::SlideInFromLeft,
            "slideInFromRight" => EnterPreset::SlideInFromRight,
            "zoomIn" | "zoom" => EnterPreset::ZoomIn,
            other => EnterPreset::Unrecognized(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            EnterPreset::SlideInFromUp => "slideInFromUp",
            EnterPreset::SlideInFromDown => "slideInFromDown",
            EnterPreset::SlideInFromLeft => "slideInFromLeft",
            EnterPreset::SlideInFromRight => "slideInFromRight",
            EnterPreset::ZoomIn => "zoomIn",
            EnterPreset::Unrecognized(id) => id,
        }
    }

    /// Look up the transition for this preset
    pub fn transition(&self) -> Transition {
        match self {
            EnterPreset::SlideInFromUp => Transition::preset(Effect::Slide(Edge::Up)),
            EnterPreset::SlideInFromDown => Transition::preset(Effect::Slide(Edge::Down)),
            EnterPreset::SlideInFromLeft => Transition::preset(Effect::Slide(Edge::Left)),
            EnterPreset::SlideInFromRight => Transition::preset(Effect::Slide(Edge::Right)),
            EnterPreset::ZoomIn => Transition::preset(Effect::Zoom),
            EnterPreset::Unrecognized(id) => {
                log::warn!("Unknown enter preset '{}', falling back to instant", id);
                Transition::INSTANT
            }
        }
    }
}

impl From<String> for EnterPreset {
    fn from(id: String) -> Self {
        EnterPreset::from_id(&id)
    }
}

impl From<EnterPreset> for String {
    fn from(preset: EnterPreset) -> Self {
        preset.id().to_string()
    }
}

impl fmt::Display for EnterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Named exit presets, mirroring [`EnterPreset`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExitPreset {
    SlideOutToUp,
    SlideOutToDown,
    SlideOutToLeft,
    SlideOutToRight,
    ZoomOut,
    /// Name that matched no preset; animates as [`Transition::INSTANT`]
    Unrecognized(String),
}

impl Default for ExitPreset {
    fn default() -> Self {
        ExitPreset::ZoomOut
    }
}

impl ExitPreset {
    /// Parse a preset name; unknown names are kept as [`ExitPreset::Unrecognized`]
    pub fn from_id(id: &str) -> Self {
        match id {
            "slideOutToUp" => ExitPreset::SlideOutToUp,
            "slideOutToDown" => ExitPreset::SlideOutToDown,
            "slideOutToLeft" => ExitPreset::SlideOutToLeft,
            "slideOutToRight" => ExitPreset::SlideOutToRight,
            "zoomOut" | "zoom" => ExitPreset::ZoomOut,
            other => ExitPreset::Unrecognized(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ExitPreset::SlideOutToUp => "slideOutToUp",
            ExitPreset::SlideOutToDown => "slideOutToDown",
            ExitPreset::SlideOutToLeft => "slideOutToLeft",
            ExitPreset::SlideOutToRight => "slideOutToRight",
            ExitPreset::ZoomOut => "zoomOut",
            ExitPreset::Unrecognized(id) => id,
        }
    }

    /// Look up the transition for this preset
    pub fn transition(&self) -> Transition {
        match self {
            ExitPreset::SlideOutToUp => Transition::preset(Effect::Slide(Edge::Up)),
            ExitPreset::SlideOutToDown => Transition::preset(Effect::Slide(Edge::Down)),
            ExitPreset::SlideOutToLeft => Transition::preset(Effect::Slide(Edge::Left)),
            ExitPreset::SlideOutToRight => Transition::preset(Effect::Slide(Edge::Right)),
            ExitPreset::ZoomOut => Transition::preset(Effect::Zoom),
            ExitPreset::Unrecognized(id) => {
                log::warn!("Unknown exit preset '{}', falling back to instant", id);
                Transition::INSTANT
            }
        }
    }
}

impl From<String> for ExitPreset {
    fn from(id: String) -> Self {
        ExitPreset::from_id(&id)
    }
}

impl From<ExitPreset> for String {
    fn from(preset: ExitPreset) -> Self {
        preset.id().to_string()
    }
}

impl fmt::Display for ExitPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
