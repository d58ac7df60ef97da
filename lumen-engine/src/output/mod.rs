// Lumen output seams
//
// The engine writes to exactly two places: a render sink that paints the
// display, and a listener that keeps the surrounding UI in sync.
//
// ```text
// SceneScheduler ──render_color()──▶ RenderSink      (display)
//        │
//        └──scene_activated()─────▶ SceneListener   (buttons, speed selector)
// ```

mod mock;

pub use mock::{RecordingListener, RecordingSink, SinkCall};

use lumen_utils::{Color, SceneId, TransitionMode};

/// Applies colors to the visible display.
///
/// Stateless from the engine's point of view: the engine never reads back
/// what it wrote.
pub trait RenderSink: Send {
    /// Paint `color` on the display
    fn render_color(&mut self, color: Color);

    /// Switch between eased and instant color changes
    fn set_transition(&mut self, _mode: TransitionMode) {}
}

/// Receives scene lifecycle notifications. Both methods default to no-ops.
pub trait SceneListener: Send {
    fn scene_activated(&mut self, _id: SceneId) {}

    fn scene_deactivated(&mut self) {}
}

/// Listener for hosts that have nothing to keep in sync
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl SceneListener for NoopListener {}
