// Lumen scene programs
// Time-driven color generators polled once per frame by the scheduler

pub mod engine;
pub mod fire;
pub mod police;
pub mod storm;

pub use engine::{start_program, SceneProgram};
pub use fire::FireScene;
pub use police::PoliceScene;
pub use storm::{StormPhase, StormScene};
