// Lumen scene: police alert lights
// Red and blue strobes separated by short black gaps, round-robin forever

use lumen_utils::{Color, SceneId, SpeedMultiplier};

use super::engine::SceneProgram;
use crate::clock::Timestamp;
use crate::random::RandomSource;

/// Fixed four-step strobe: red, black, blue, black
pub struct PoliceScene {
    /// Index of the color currently on screen
    step: usize,
    /// When the current color went up
    last_transition: Timestamp,
}

impl PoliceScene {
    pub const COLORS: [Color; 4] = [
        Color::rgb(0xFF, 0x00, 0x00),
        Color::BLACK,
        Color::rgb(0x00, 0x44, 0xFF),
        Color::BLACK,
    ];

    /// How long each color stays up at normal speed
    pub const BASE_DURATIONS_MS: [f64; 4] = [300.0, 80.0, 300.0, 80.0];

    pub fn new(now: Timestamp) -> Self {
        Self {
            step: 0,
            last_transition: now,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

impl SceneProgram for PoliceScene {
    fn scene(&self) -> SceneId {
        SceneId::Police
    }

    fn initial_color(&self) -> Color {
        Self::COLORS[0]
    }

    fn advance(
        &mut self,
        now: Timestamp,
        speed: SpeedMultiplier,
        _rng: &mut dyn RandomSource,
    ) -> Option<Color> {
        if now < self.next_due(speed) {
            return None;
        }

        self.step = (self.step + 1) % Self::COLORS.len();
        self.last_transition = now;
        Some(Self::COLORS[self.step])
    }

    fn pending_interval(&self, speed: SpeedMultiplier) -> f64 {
        speed.scale(Self::BASE_DURATIONS_MS[self.step])
    }

    fn last_transition(&self) -> Timestamp {
        self.last_transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    const RED: Color = PoliceScene::COLORS[0];
    const BLUE: Color = PoliceScene::COLORS[2];

    fn at(ms: f64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_starts_red_on_step_zero() {
        let scene = PoliceScene::new(at(0.0));
        assert_eq!(scene.initial_color(), RED);
        assert_eq!(scene.step(), 0);
    }

    #[test]
    fn test_sequence_at_normal_speed() {
        let mut scene = PoliceScene::new(at(0.0));
        let mut rng = ScriptedRandom::constant(0.0);
        let speed = SpeedMultiplier::NORMAL;

        assert_eq!(scene.advance(at(299.0), speed, &mut rng), None);
        assert_eq!(scene.advance(at(300.0), speed, &mut rng), Some(Color::BLACK));
        assert_eq!(scene.advance(at(379.0), speed, &mut rng), None);
        assert_eq!(scene.advance(at(380.0), speed, &mut rng), Some(BLUE));
        assert_eq!(scene.advance(at(680.0), speed, &mut rng), Some(Color::BLACK));
        assert_eq!(scene.advance(at(760.0), speed, &mut rng), Some(RED));
        assert_eq!(scene.step(), 0);
    }

    #[test]
    fn test_sequence_scales_with_speed() {
        for multiplier in [0.5, 2.0, 4.0] {
            let speed = SpeedMultiplier::new(multiplier).unwrap();
            let mut scene = PoliceScene::new(at(0.0));
            let mut rng = ScriptedRandom::constant(0.0);

            let emitted: Vec<Option<Color>> = [300.0, 380.0, 680.0, 760.0]
                .iter()
                .map(|base| scene.advance(at(base / multiplier), speed, &mut rng))
                .collect();

            assert_eq!(
                emitted,
                vec![Some(Color::BLACK), Some(BLUE), Some(Color::BLACK), Some(RED)],
                "speed {}",
                multiplier
            );
        }
    }

    #[test]
    fn test_late_tick_measures_from_tick_time() {
        let mut scene = PoliceScene::new(at(0.0));
        let mut rng = ScriptedRandom::constant(0.0);
        let speed = SpeedMultiplier::NORMAL;

        // A frame that arrives late still advances one step only
        assert_eq!(scene.advance(at(1000.0), speed, &mut rng), Some(Color::BLACK));
        assert_eq!(scene.advance(at(1079.0), speed, &mut rng), None);
        assert_eq!(scene.advance(at(1080.0), speed, &mut rng), Some(BLUE));
    }

    #[test]
    fn test_never_draws_randomness() {
        let mut scene = PoliceScene::new(at(0.0));
        let mut rng = ScriptedRandom::constant(0.3);
        for i in 1..100 {
            scene.advance(at(i as f64 * 100.0), SpeedMultiplier::NORMAL, &mut rng);
        }
        assert_eq!(rng.draws(), 0);
    }
}
