// Lumen output mocks
//
// Recording implementations of `RenderSink` and `SceneListener` for tests.
// Clones share one log, so a test keeps a clone and hands the other to the
// scheduler.

use std::sync::{Arc, Mutex};

use lumen_utils::{Color, SceneEvent, SceneId, TransitionMode};

use super::{RenderSink, SceneListener};

/// One call observed by a `RecordingSink`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCall {
    Render(Color),
    Transition(TransitionMode),
}

/// Render sink that records every call.
///
/// # Example
///
/// ```ignore
/// let sink = RecordingSink::new();
/// let mut scheduler = SceneScheduler::new(sink.clone(), ManualClock::new(), EntropyRandom::new());
///
/// scheduler.start_scene(SceneId::Police);
/// assert_eq!(sink.last_color(), Some(Color::rgb(0xFF, 0, 0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in order
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Rendered colors in order
    pub fn colors(&self) -> Vec<Color> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                SinkCall::Render(color) => Some(*color),
                SinkCall::Transition(_) => None,
            })
            .collect()
    }

    /// Rendered colors as the hex strings a display would receive
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors().iter().map(Color::to_hex).collect()
    }

    pub fn render_count(&self) -> usize {
        self.colors().len()
    }

    pub fn last_color(&self) -> Option<Color> {
        self.colors().last().copied()
    }

    /// Most recent transition mode, if any was set
    pub fn transition(&self) -> Option<TransitionMode> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                SinkCall::Transition(mode) => Some(*mode),
                SinkCall::Render(_) => None,
            })
    }

    /// Forget everything recorded so far
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl RenderSink for RecordingSink {
    fn render_color(&mut self, color: Color) {
        self.calls.lock().unwrap().push(SinkCall::Render(color));
    }

    fn set_transition(&mut self, mode: TransitionMode) {
        self.calls.lock().unwrap().push(SinkCall::Transition(mode));
    }
}

/// Scene listener that records every notification
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<SceneEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SceneEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl SceneListener for RecordingListener {
    fn scene_activated(&mut self, id: SceneId) {
        self.events.lock().unwrap().push(SceneEvent::Activated(id));
    }

    fn scene_deactivated(&mut self) {
        self.events.lock().unwrap().push(SceneEvent::Deactivated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_records_in_order() {
        let mut sink = RecordingSink::new();
        sink.set_transition(TransitionMode::Instant);
        sink.render_color(Color::WHITE);
        sink.render_color(Color::BLACK);

        assert_eq!(
            sink.calls(),
            vec![
                SinkCall::Transition(TransitionMode::Instant),
                SinkCall::Render(Color::WHITE),
                SinkCall::Render(Color::BLACK),
            ]
        );
        assert_eq!(sink.hex_colors(), vec!["#FFFFFF", "#000000"]);
        assert_eq!(sink.transition(), Some(TransitionMode::Instant));
    }

    #[test]
    fn test_clones_share_log() {
        let sink = RecordingSink::new();
        let mut writer = sink.clone();
        writer.render_color(Color::WHITE);

        assert_eq!(sink.render_count(), 1);
        assert_eq!(sink.last_color(), Some(Color::WHITE));

        sink.reset();
        assert!(writer.calls().is_empty());
    }

    #[test]
    fn test_listener_records_events() {
        let listener = RecordingListener::new();
        let mut writer = listener.clone();
        writer.scene_activated(SceneId::Fire);
        writer.scene_deactivated();

        assert_eq!(
            listener.events(),
            vec![SceneEvent::Activated(SceneId::Fire), SceneEvent::Deactivated]
        );
    }
}
