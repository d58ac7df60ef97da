// Lumen light panel
//
// The control surface around the scheduler: preset swatches, hex entry, the
// color picker, recent colors and the intensity slider. Every static color
// path goes through `SceneScheduler::select_static_color`, which stops any
// running scene first.

use log::{debug, warn};

use lumen_utils::{Color, EngineConfig, Intensity, LumenResult, SceneId, SpeedMultiplier};

use crate::history::RecentColors;
use crate::scheduler::SceneScheduler;

pub struct LightPanel {
    scheduler: SceneScheduler,
    presets: Vec<Color>,
    speed_presets: Vec<SpeedMultiplier>,
    recent: RecentColors,
    intensity: Intensity,
}

impl LightPanel {
    /// Wrap `scheduler` and paint its static color
    pub fn new(mut scheduler: SceneScheduler, config: &EngineConfig) -> Self {
        scheduler.select_static_color(scheduler.static_color());
        Self {
            scheduler,
            presets: config.presets.clone(),
            speed_presets: config.speed_presets.clone(),
            recent: RecentColors::new(config.recent_capacity),
            intensity: Intensity::default(),
        }
    }

    pub fn scheduler(&self) -> &SceneScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut SceneScheduler {
        &mut self.scheduler
    }

    pub fn presets(&self) -> &[Color] {
        &self.presets
    }

    pub fn recent(&self) -> &RecentColors {
        &self.recent
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Color currently considered "selected", `None` while a scene runs
    pub fn current_color(&self) -> Option<Color> {
        (!self.scheduler.is_animating()).then(|| self.scheduler.static_color())
    }

    /// Tap on swatch `index` (or number key `index + 1`).
    ///
    /// Returns the selected color, `None` for an out-of-range index.
    pub fn select_preset(&mut self, index: usize) -> Option<Color> {
        let color = self.presets.get(index).copied()?;
        self.scheduler.select_static_color(color);
        Some(color)
    }

    /// Apply text from the hex field.
    ///
    /// Invalid input changes nothing and is reported back for the field's
    /// error state.
    pub fn apply_hex_input(&mut self, input: &str) -> LumenResult<Color> {
        let color = Color::parse_hex(input).map_err(|err| {
            debug!("Lumen: {}", err);
            err
        })?;
        self.scheduler.select_static_color(color);
        self.recent.record(color, &self.presets);
        Ok(color)
    }

    /// Live picker movement: show the color without remembering it
    pub fn preview_picked(&mut self, color: Color) {
        self.scheduler.select_static_color(color);
    }

    /// Picker closed on `color`: remember it
    pub fn commit_picked(&mut self, color: Color) {
        self.recent.record(color, &self.presets);
    }

    /// Tap on recent swatch `index`
    pub fn select_recent(&mut self, index: usize) -> Option<Color> {
        let color = self.recent.get(index)?;
        self.scheduler.select_static_color(color);
        Some(color)
    }

    pub fn set_intensity(&mut self, percent: u32) -> LumenResult<()> {
        self.intensity = Intensity::new(percent).map_err(|err| {
            warn!("Lumen: {}", err);
            err
        })?;
        Ok(())
    }

    /// Opacity of the dimming overlay for the current intensity
    pub fn overlay_opacity(&self) -> f64 {
        self.intensity.overlay_opacity()
    }

    pub fn start_scene(&mut self, id: SceneId) {
        self.scheduler.start_scene(id);
    }

    pub fn stop_scene(&mut self) {
        self.scheduler.stop_scene();
    }

    pub fn set_speed(&mut self, multiplier: f64) -> LumenResult<()> {
        self.scheduler.set_speed(multiplier)
    }

    /// Pick speed preset `index` from the speed selector
    pub fn select_speed_preset(&mut self, index: usize) -> Option<SpeedMultiplier> {
        let speed = self.speed_presets.get(index).copied()?;
        self.scheduler.set_speed(speed.value()).ok()?;
        Some(speed)
    }

    /// The speed selector is only shown while a scene runs
    pub fn speed_selector_visible(&self) -> bool {
        self.scheduler.is_animating()
    }
}
