// Lumen output events
//
// Notifications the engine sends outward so the UI can follow along
// (button highlighting, speed selector visibility, color easing).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scene::SceneId;

/// How the display should move from one color to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionMode {
    /// Ease between colors, used for static colors
    Smooth { duration_ms: u32 },
    /// Jump straight to the new color, required for strobes
    Instant,
}

impl TransitionMode {
    /// Easing used whenever no scene is running
    pub const STATIC: TransitionMode = TransitionMode::Smooth { duration_ms: 150 };

    pub fn is_instant(&self) -> bool {
        matches!(self, TransitionMode::Instant)
    }
}

impl Default for TransitionMode {
    fn default() -> Self {
        Self::STATIC
    }
}

impl fmt::Display for TransitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionMode::Smooth { duration_ms } => write!(f, "ease {}ms", duration_ms),
            TransitionMode::Instant => write!(f, "none"),
        }
    }
}

/// Scene lifecycle notification, fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// A scene became the active one (highlight its button, show speeds)
    Activated(SceneId),
    /// No scene is running any more (clear highlights, hide speeds)
    Deactivated,
}

impl SceneEvent {
    pub fn scene(&self) -> Option<SceneId> {
        match self {
            SceneEvent::Activated(id) => Some(*id),
            SceneEvent::Deactivated => None,
        }
    }
}

impl fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneEvent::Activated(id) => write!(f, "activated {}", id),
            SceneEvent::Deactivated => write!(f, "deactivated"),
        }
    }
}
