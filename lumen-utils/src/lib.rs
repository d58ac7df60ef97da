// Lumen shared vocabulary: colors, scenes, events, config and errors.

pub mod color;
pub mod config;
pub mod errors;
pub mod event;
pub mod scene;

pub use color::{Color, Intensity};
pub use config::EngineConfig;
pub use errors::{LumenError, LumenResult};
pub use event::{SceneEvent, TransitionMode};
pub use scene::{SceneId, SpeedMultiplier};
