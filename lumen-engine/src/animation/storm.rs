// Lumen scene: lightning storm
//
// dark ──▶ flash-on ──▶ flash-gap ──▶ flash-on ──▶ ... ──▶ dark
//
// Long random dark spells broken by bursts of two or three white flashes.

use lumen_utils::{Color, SceneId, SpeedMultiplier};

use super::engine::SceneProgram;
use crate::clock::Timestamp;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormPhase {
    /// Base color, waiting for the next burst
    Dark,
    /// Flash color up
    FlashOn,
    /// Short base-color gap between two flashes of one burst
    FlashGap,
}

pub struct StormScene {
    phase: StormPhase,
    flashes_remaining: u8,
    last_transition: Timestamp,
    /// Base (unscaled) duration of the current phase
    next_duration_ms: f64,
}

impl StormScene {
    pub const BASE_COLOR: Color = Color::rgb(0x1A, 0x1A, 0x2E);
    pub const FLASH_COLOR: Color = Color::WHITE;

    pub const DARK_MS: (f64, f64) = (1000.0, 4000.0);
    pub const FLASH_MS: (f64, f64) = (50.0, 120.0);
    pub const GAP_MS: f64 = 80.0;

    pub fn new(now: Timestamp, rng: &mut dyn RandomSource) -> Self {
        Self {
            phase: StormPhase::Dark,
            flashes_remaining: 0,
            last_transition: now,
            next_duration_ms: Self::draw(rng, Self::DARK_MS),
        }
    }

    pub fn phase(&self) -> StormPhase {
        self.phase
    }

    pub fn flashes_remaining(&self) -> u8 {
        self.flashes_remaining
    }

    fn draw(rng: &mut dyn RandomSource, (low, high): (f64, f64)) -> f64 {
        rng.uniform(low, high)
    }

    fn enter(&mut self, phase: StormPhase, now: Timestamp, duration_ms: f64) {
        self.phase = phase;
        self.last_transition = now;
        self.next_duration_ms = duration_ms;
    }
}

impl SceneProgram for StormScene {
    fn scene(&self) -> SceneId {
        SceneId::Storm
    }

    fn initial_color(&self) -> Color {
        Self::BASE_COLOR
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

        match self.phase {
            StormPhase::Dark => {
                self.flashes_remaining = 2 + rng.index(2) as u8;
                let flash = Self::draw(rng, Self::FLASH_MS);
                self.enter(StormPhase::FlashOn, now, flash);
                Some(Self::FLASH_COLOR)
            }
            StormPhase::FlashOn => {
                self.flashes_remaining = self.flashes_remaining.saturating_sub(1);
                if self.flashes_remaining > 0 {
                    self.enter(StormPhase::FlashGap, now, Self::GAP_MS);
                } else {
                    let dark = Self::draw(rng, Self::DARK_MS);
                    self.enter(StormPhase::Dark, now, dark);
                }
                Some(Self::BASE_COLOR)
            }
            StormPhase::FlashGap => {
                let flash = Self::draw(rng, Self::FLASH_MS);
                self.enter(StormPhase::FlashOn, now, flash);
                Some(Self::FLASH_COLOR)
            }
        }
    }

    fn pending_interval(&self, speed: SpeedMultiplier) -> f64 {
        speed.scale(self.next_duration_ms)
    }

    fn last_transition(&self) -> Timestamp {
        self.last_transition
    }
}
