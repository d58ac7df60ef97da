// Lumen scene programs: trait and construction
use lumen_utils::{Color, SceneId, SpeedMultiplier};

use super::{FireScene, PoliceScene, StormScene};
use crate::clock::Timestamp;
use crate::random::RandomSource;

/// Time-driven color generator behind one scene.
///
/// A program is polled once per frame. It keeps its own timing state and
/// only returns a color when a transition is due; the scheduler forwards
/// that color to the render sink.
pub trait SceneProgram: Send {
    fn scene(&self) -> SceneId;

    /// Color shown the moment the scene starts
    fn initial_color(&self) -> Color;

    /// Check whether the next transition is due at `now`.
    ///
    /// Returns the new color when it is, mutating the program's state.
    /// Durations are divided by `speed` at this comparison point.
    fn advance(
        &mut self,
        now: Timestamp,
        speed: SpeedMultiplier,
        rng: &mut dyn RandomSource,
    ) -> Option<Color>;

    /// Effective wait, in milliseconds, before the next transition
    fn pending_interval(&self, speed: SpeedMultiplier) -> f64;

    /// Time of the last transition (or of the start)
    fn last_transition(&self) -> Timestamp;

    /// Earliest time at which `advance` will emit
    fn next_due(&self, speed: SpeedMultiplier) -> Timestamp {
        self.last_transition() + self.pending_interval(speed)
    }
}

/// Build a fresh program for `id`, started at `now`
pub fn start_program(
    id: SceneId,
    now: Timestamp,
    rng: &mut dyn RandomSource,
) -> Box<dyn SceneProgram> {
    match id {
        SceneId::Police => Box::new(PoliceScene::new(now)),
        SceneId::Fire => Box::new(FireScene::new(now, rng)),
        SceneId::Storm => Box::new(StormScene::new(now, rng)),
    }
}
