mod cli;
mod frame_loop;
mod terminal;

use anyhow::Context;
use clap::Parser;
use log::info;
use std::io;
use std::time::Duration;

use lumen_engine::{EntropyRandom, LightPanel, SceneScheduler, SystemClock};
use lumen_utils::{EngineConfig, Intensity, SceneId};

use crate::cli::{CliArgs, Command};
use crate::frame_loop::run_frames;
use crate::terminal::TerminalSink;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Could not use config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match args.command {
        Command::Play {
            scene,
            speed,
            seconds,
            intensity,
        } => {
            let scene = SceneId::parse(&scene)?;
            let mut panel = build_panel(&config, args.width, intensity)?;
            if let Some(speed) = speed {
                panel.set_speed(speed)?;
            }
            panel.start_scene(scene);

            let limit = seconds
                .filter(|s| s.is_finite() && *s > 0.0)
                .map(Duration::from_secs_f64);
            let frame_period = Duration::from_secs_f64(config.frame_period_ms() / 1000.0);
            let summary = run_frames(panel.scheduler_mut(), frame_period, limit).await;

            panel.stop_scene();
            info!("Lumen: {} stopped after {} frames", scene, summary.frames);
        }
        Command::Show { color, intensity } => {
            let mut panel = build_panel(&config, args.width, intensity)?;
            panel.apply_hex_input(&color)?;
        }
    }

    println!();
    Ok(())
}

fn build_panel(config: &EngineConfig, width: usize, intensity: u32) -> anyhow::Result<LightPanel> {
    let intensity = Intensity::new(intensity)?;
    let sink = TerminalSink::new(io::stdout(), width).with_intensity(intensity);
    let scheduler =
        SceneScheduler::from_config(config, sink, SystemClock::new(), EntropyRandom::new());

    let mut panel = LightPanel::new(scheduler, config);
    panel.set_intensity(u32::from(intensity.percent()))?;
    Ok(panel)
}
