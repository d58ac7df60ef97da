// Host frame loop
//
// Stands in for a display's per-refresh callback: one `on_frame` per
// interval tick, carrying the loop handle the frame was scheduled for.

use log::info;
use std::future;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

use lumen_engine::SceneScheduler;

/// Why the loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The requested run time elapsed
    TimeLimit,
    /// Ctrl-C
    Interrupted,
    /// The scene was stopped, nothing left to animate
    SceneStopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub exit: LoopExit,
}

/// Tick `scheduler` every `frame_period` until the scene stops, `limit`
/// elapses or the process is interrupted.
pub async fn run_frames(
    scheduler: &mut SceneScheduler,
    frame_period: Duration,
    limit: Option<Duration>,
) -> LoopSummary {
    let mut ticker = time::interval(frame_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let deadline = async move {
        match limit {
            Some(limit) => time::sleep(limit).await,
            None => future::pending::<()>().await,
        }
    };
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(deadline, interrupt);

    let mut frames = 0;
    let exit = loop {
        let Some(handle) = scheduler.loop_handle() else {
            break LoopExit::SceneStopped;
        };

        tokio::select! {
            _ = ticker.tick() => {
                let now = scheduler.now();
                if !scheduler.on_frame(handle, now) {
                    break LoopExit::SceneStopped;
                }
                frames += 1;
            }
            _ = &mut deadline => break LoopExit::TimeLimit,
            _ = &mut interrupt => break LoopExit::Interrupted,
        }
    };

    info!("Lumen: frame loop ended after {} frames ({:?})", frames, exit);
    LoopSummary { frames, exit }
}
