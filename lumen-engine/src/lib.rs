// Lumen scene animation engine
//
// Drives time-based, speed-adjustable color scenes (police, fire, storm)
// from a host frame loop and keeps them mutually exclusive with static
// color selection.
//
// # Architecture
//
// ```text
// host frame loop ──on_frame(handle, now)──▶ SceneScheduler
//                                               │  advance()
//                                               ▼
//                                          SceneProgram  (police | fire | storm)
//                                               │  Some(color)
//                                               ▼
//                                          RenderSink
// ```
//
// # Usage
//
// ```ignore
// let mut scheduler = SceneScheduler::new(sink, SystemClock::new(), EntropyRandom::new());
// scheduler.start_scene(SceneId::Storm);
// loop {
//     let Some(handle) = scheduler.loop_handle() else { break };
//     scheduler.on_frame(handle, clock.now());
//     // wait for the next display refresh...
// }
// ```

pub mod animation;
pub mod clock;
pub mod history;
pub mod output;
pub mod panel;
pub mod random;
pub mod scheduler;

pub use animation::{FireScene, PoliceScene, SceneProgram, StormPhase, StormScene};
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use history::RecentColors;
pub use output::{NoopListener, RecordingListener, RecordingSink, RenderSink, SceneListener};
pub use panel::LightPanel;
pub use random::{EntropyRandom, RandomSource, ScriptedRandom};
pub use scheduler::{LoopHandle, SceneScheduler};
