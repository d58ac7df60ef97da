// Lumen scene scheduler
//
// Owns the one live scene program (if any), the loop handle that the host's
// frame loop ticks with, the playback speed and the last static color.
// Static colors and animated scenes are mutually exclusive: picking one
// always tears down the other.

use log::{debug, info, trace, warn};

use lumen_utils::{
    Color, EngineConfig, LumenResult, SceneId, SpeedMultiplier, TransitionMode,
};

use crate::animation::{start_program, SceneProgram};
use crate::clock::{Clock, Timestamp};
use crate::output::{NoopListener, RenderSink, SceneListener};
use crate::random::RandomSource;

/// Identifies one run of the animation loop.
///
/// A new handle is minted whenever a scene starts or restarts, which
/// cancels every frame still carrying an older handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopHandle(u64);

struct ActiveScene {
    id: SceneId,
    handle: LoopHandle,
    program: Box<dyn SceneProgram>,
}

pub struct SceneScheduler {
    sink: Box<dyn RenderSink>,
    listener: Box<dyn SceneListener>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    /// Restored when a scene is toggled off
    static_color: Color,
    speed: SpeedMultiplier,
    /// Active scene and loop handle live together so one is never set
    /// without the other
    active: Option<ActiveScene>,
    next_handle: u64,
}

impl SceneScheduler {
    pub fn new(
        sink: impl RenderSink + 'static,
        clock: impl Clock + 'static,
        rng: impl RandomSource + 'static,
    ) -> Self {
        Self {
            sink: Box::new(sink),
            listener: Box::new(NoopListener),
            clock: Box::new(clock),
            rng: Box::new(rng),
            static_color: EngineConfig::default().initial_color,
            speed: SpeedMultiplier::default(),
            active: None,
            next_handle: 0,
        }
    }

    /// Scheduler seeded with the configured initial color and speed
    pub fn from_config(
        config: &EngineConfig,
        sink: impl RenderSink + 'static,
        clock: impl Clock + 'static,
        rng: impl RandomSource + 'static,
    ) -> Self {
        Self::new(sink, clock, rng)
            .with_static_color(config.initial_color)
            .with_speed(config.default_speed)
    }

    pub fn with_listener(mut self, listener: impl SceneListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    pub fn with_static_color(mut self, color: Color) -> Self {
        self.static_color = color;
        self
    }

    pub fn with_speed(mut self, speed: SpeedMultiplier) -> Self {
        self.speed = speed;
        self
    }

    pub fn active_scene(&self) -> Option<SceneId> {
        self.active.as_ref().map(|active| active.id)
    }

    pub fn loop_handle(&self) -> Option<LoopHandle> {
        self.active.as_ref().map(|active| active.handle)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    pub fn static_color(&self) -> Color {
        self.static_color
    }

    /// The live program, for hosts that want to sleep until `next_due`
    pub fn program(&self) -> Option<&dyn SceneProgram> {
        self.active.as_ref().map(|active| active.program.as_ref())
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Start `id`, or stop it if it is already the active scene.
    ///
    /// Toggling off restores the last static color.
    pub fn start_scene(&mut self, id: SceneId) {
        if self.active_scene() == Some(id) {
            self.stop_scene();
            self.sink.render_color(self.static_color);
            return;
        }

        if let Some(previous) = self.active.take() {
            debug!("Lumen: cancelling {} to start {}", previous.id, id);
        }

        self.sink.set_transition(TransitionMode::Instant);
        self.listener.scene_activated(id);
        self.install(id);
        info!("Lumen: scene {} started at {}", id, self.speed);
    }

    /// Start a scene by name. Unknown names leave everything untouched.
    pub fn start_scene_named(&mut self, name: &str) -> LumenResult<()> {
        let id = SceneId::parse(name).map_err(|err| {
            warn!("Lumen: {}", err);
            err
        })?;
        self.start_scene(id);
        Ok(())
    }

    /// Cancel the running scene. Does nothing when no scene is running.
    pub fn stop_scene(&mut self) {
        let Some(stopped) = self.active.take() else {
            return;
        };

        self.listener.scene_deactivated();
        self.sink.set_transition(TransitionMode::STATIC);
        info!("Lumen: scene {} stopped", stopped.id);
    }

    /// Change playback speed.
    ///
    /// A running scene restarts from its initial state so the new speed
    /// never applies to a half-elapsed interval. Invalid multipliers are
    /// rejected and the previous speed is kept.
    pub fn set_speed(&mut self, multiplier: f64) -> LumenResult<()> {
        let speed = SpeedMultiplier::new(multiplier).map_err(|err| {
            warn!("Lumen: {}", err);
            err
        })?;
        self.speed = speed;

        if let Some(id) = self.active_scene() {
            debug!("Lumen: restarting {} at {}", id, speed);
            self.install(id);
        }
        Ok(())
    }

    /// Show a static color, stopping any scene first
    pub fn select_static_color(&mut self, color: Color) {
        self.stop_scene();
        self.static_color = color;
        self.sink.set_transition(TransitionMode::STATIC);
        self.sink.render_color(color);
    }

    /// One frame of the animation loop.
    ///
    /// Frames scheduled under a handle that has since been cancelled are
    /// dropped without touching the display. Returns whether the frame was
    /// accepted; hosts stop requesting frames once it returns `false`.
    pub fn on_frame(&mut self, handle: LoopHandle, now: Timestamp) -> bool {
        let Some(active) = self.active.as_mut().filter(|active| active.handle == handle) else {
            trace!("Lumen: dropping stale frame for {:?}", handle);
            return false;
        };

        if let Some(color) = active.program.advance(now, self.speed, self.rng.as_mut()) {
            self.sink.render_color(color);
        }
        true
    }

    /// Tick the current loop at the clock's current time
    pub fn tick(&mut self) -> bool {
        match self.loop_handle() {
            Some(handle) => {
                let now = self.clock.now();
                self.on_frame(handle, now)
            }
            None => false,
        }
    }

    fn install(&mut self, id: SceneId) {
        let handle = LoopHandle(self.next_handle);
        self.next_handle += 1;

        let program = start_program(id, self.clock.now(), self.rng.as_mut());
        self.sink.render_color(program.initial_color());
        self.active = Some(ActiveScene {
            id,
            handle,
            program,
        });
    }
}
