// Lumen scene: fire flicker
// Random warm colors held for random, short intervals

use lumen_utils::{Color, SceneId, SpeedMultiplier};

use super::engine::SceneProgram;
use crate::clock::Timestamp;
use crate::random::RandomSource;

pub struct FireScene {
    last_transition: Timestamp,
    /// Base (unscaled) wait before the next flicker
    next_interval_ms: f64,
}

impl FireScene {
    pub const PALETTE: [Color; 5] = [
        Color::rgb(0xFF, 0x45, 0x00),
        Color::rgb(0xFF, 0x66, 0x00),
        Color::rgb(0xFF, 0x8C, 0x00),
        Color::rgb(0xFF, 0xB3, 0x47),
        Color::rgb(0xCC, 0x22, 0x00),
    ];

    /// Base flicker interval is uniform over `[MIN, MAX)`
    pub const MIN_INTERVAL_MS: f64 = 80.0;
    pub const MAX_INTERVAL_MS: f64 = 200.0;

    pub fn new(now: Timestamp, rng: &mut dyn RandomSource) -> Self {
        Self {
            last_transition: now,
            next_interval_ms: Self::draw_interval(rng),
        }
    }

    fn draw_interval(rng: &mut dyn RandomSource) -> f64 {
        rng.uniform(Self::MIN_INTERVAL_MS, Self::MAX_INTERVAL_MS)
    }
}

impl SceneProgram for FireScene {
    fn scene(&self) -> SceneId {
        SceneId::Fire
    }

    fn initial_color(&self) -> Color {
        Self::PALETTE[0]
    }

    fn advance(
        &mut self,
        now: Timestamp,
        speed: SpeedMultiplier,
        rng: &mut dyn RandomSource,
    ) -> Option<Color> {
        if now < self.next_due(speed) {
            return None;
        }

        // Repeats are allowed, each pick is independent
        let color = Self::PALETTE[rng.index(Self::PALETTE.len())];
        self.next_interval_ms = Self::draw_interval(rng);
        self.last_transition = now;
        Some(color)
    }

    fn pending_interval(&self, speed: SpeedMultiplier) -> f64 {
        speed.scale(self.next_interval_ms)
    }

    fn last_transition(&self) -> Timestamp {
        self.last_transition
    }
}
