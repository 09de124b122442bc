use std::time::Duration;

use anyhow::Result;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{info, warn};

use inertia_core::momentum::timing::{glide_distance, ticks_to_rest, MAX_GLIDE_TICKS};
use inertia_core::momentum::{MemoryPage, MomentumEngine, QueuedFrames, WheelEvent, WheelOutcome};
use inertia_core::{AppConfig, ScrollConfig};

/// Headless simulation parameters
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    pub deltas: Vec<f64>,
    pub gap: u32,
    pub scroll_height: f64,
    pub viewport_height: f64,
    pub start: f64,
    /// Deliver each frame from a real timer with this period
    pub pace: Option<Duration>,
}

/// One line of simulation output
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Wheel {
        delta: f64,
        velocity: f64,
        outcome: WheelOutcome,
    },
    Tick {
        tick: u32,
        position: f64,
        velocity: f64,
    },
}

/// Full record of a simulation run
#[derive(Debug, Clone)]
pub struct Trace {
    pub events: Vec<TraceEvent>,
    pub ticks: u32,
    pub final_position: f64,
    pub max_pending: usize,
}

struct Simulation<F> {
    engine: MomentumEngine<MemoryPage, QueuedFrames>,
    timer: Option<Interval>,
    events: Vec<TraceEvent>,
    ticks: u32,
    observe: F,
}

impl<F: FnMut(&TraceEvent)> Simulation<F> {
    fn record(&mut self, event: TraceEvent) {
        (self.observe)(&event);
        self.events.push(event);
    }

    fn wheel(&mut self, delta: f64) {
        let mut event = WheelEvent::new(delta);
        let outcome = self.engine.handle_wheel(&mut event);
        let velocity = self.engine.state().velocity;
        self.record(TraceEvent::Wheel {
            delta,
            velocity,
            outcome,
        });
    }

    /// Deliver one frame, waiting on the frame timer first when paced
    async fn pump(&mut self) -> bool {
        if !self.engine.is_animating() {
            return false;
        }
        if let Some(timer) = self.timer.as_mut() {
            timer.tick().await;
        }
        if !self.engine.pump() {
            return false;
        }
        self.ticks += 1;
        let state = *self.engine.state();
        self.record(TraceEvent::Tick {
            tick: self.ticks,
            position: state.position,
            velocity: state.velocity,
        });
        true
    }
}

/// Drive the engine over an in-memory page, recording every input and tick
///
/// `observe` sees each event as it happens, so a paced run can be printed live.
pub async fn simulate<F>(config: &ScrollConfig, options: &SimulateOptions, observe: F) -> Trace
where
    F: FnMut(&TraceEvent),
{
    let page = MemoryPage::new(options.start, options.scroll_height, options.viewport_height);
    let mut engine = MomentumEngine::new(*config, page, QueuedFrames::new());
    engine.start();

    let timer = options.pace.map(|period| {
        let mut timer = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    });

    let mut sim = Simulation {
        engine,
        timer,
        events: Vec::new(),
        ticks: 0,
        observe,
    };

    for (i, delta) in options.deltas.iter().enumerate() {
        sim.wheel(*delta);

        if i + 1 < options.deltas.len() {
            for _ in 0..options.gap {
                if !sim.pump().await {
                    break;
                }
            }
        }
    }

    let mut budget = MAX_GLIDE_TICKS;
    while budget > 0 && sim.pump().await {
        budget -= 1;
    }
    if sim.engine.is_animating() {
        warn!(
            ticks = sim.ticks,
            velocity = sim.engine.state().velocity,
            "Glide did not come to rest; stopping the simulation"
        );
        sim.engine.stop();
    }

    Trace {
        ticks: sim.ticks,
        final_position: sim.engine.state().position,
        max_pending: sim.engine.frames().max_pending(),
        events: sim.events,
    }
}

fn print_event(event: &TraceEvent) {
    match event {
        TraceEvent::Wheel {
            delta,
            velocity,
            outcome,
        } => {
            println!(
                "wheel  delta {:>+9.2}  velocity {:>+9.4}  {:?}",
                delta, velocity, outcome
            );
        }
        TraceEvent::Tick {
            tick,
            position,
            velocity,
        } => {
            println!(
                "tick {:>5}  position {:>11.3}  velocity {:>+9.4}",
                tick, position, velocity
            );
        }
    }
}

pub async fn run(config: &AppConfig, options: &SimulateOptions) -> Result<()> {
    info!(
        deltas = options.deltas.len(),
        friction = config.scroll.friction,
        paced = options.pace.is_some(),
        "Simulating momentum scroll"
    );

    let trace = simulate(&config.scroll, options, print_event).await;

    println!();
    println!("Came to rest after {} ticks at {:.3}", trace.ticks, trace.final_position);

    // Closed-form prediction only applies when every impulse landed before the first tick
    if options.gap == 0 || options.deltas.len() == 1 {
        if let Some(TraceEvent::Wheel { velocity, .. }) = trace
            .events
            .iter()
            .take_while(|e| matches!(e, TraceEvent::Wheel { .. }))
            .last()
        {
            if let Some(predicted) = ticks_to_rest(*velocity, &config.scroll) {
                println!(
                    "Predicted: {} ticks, {:.3} unclamped distance",
                    predicted,
                    glide_distance(*velocity, &config.scroll)
                );
            }
        }
    }
    println!("Most frames pending at once: {}", trace.max_pending);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(deltas: Vec<f64>) -> SimulateOptions {
        SimulateOptions {
            deltas,
            gap: 0,
            scroll_height: 10_000.0,
            viewport_height: 600.0,
            start: 0.0,
            pace: None,
        }
    }

    async fn trace(config: &ScrollConfig, opts: &SimulateOptions) -> Trace {
        simulate(config, opts, |_| {}).await
    }

    #[tokio::test]
    async fn test_single_notch_trace() {
        let trace = trace(&ScrollConfig::default(), &options(vec![100.0])).await;
        assert_eq!(trace.ticks, 53);
        assert_eq!(trace.max_pending, 1);
        assert_eq!(
            trace.events[0],
            TraceEvent::Wheel {
                delta: 100.0,
                velocity: 8.0,
                outcome: WheelOutcome::Started,
            }
        );
        match trace.events[1] {
            TraceEvent::Tick { tick, position, .. } => {
                assert_eq!(tick, 1);
                assert_eq!(position, 8.0);
            }
            _ => panic!("expected a tick"),
        }
        match trace.events.last() {
            Some(TraceEvent::Tick { velocity, .. }) => assert_eq!(*velocity, 0.0),
            _ => panic!("expected a final tick"),
        }
    }

    #[tokio::test]
    async fn test_zero_delta_produces_no_ticks() {
        let trace = trace(&ScrollConfig::default(), &options(vec![0.0])).await;
        assert_eq!(trace.ticks, 0);
        assert_eq!(trace.final_position, 0.0);
        assert_eq!(trace.events.len(), 1);
    }

    #[tokio::test]
    async fn test_gap_interleaves_ticks() {
        let mut opts = options(vec![100.0, 100.0]);
        opts.gap = 3;
        let trace = trace(&ScrollConfig::default(), &opts).await;
        assert!(matches!(
            trace.events[4],
            TraceEvent::Wheel {
                outcome: WheelOutcome::Absorbed,
                ..
            }
        ));
        assert_eq!(trace.max_pending, 1);
    }

    #[tokio::test]
    async fn test_content_fits_viewport() {
        let mut opts = options(vec![100.0]);
        opts.scroll_height = 600.0;
        let trace = trace(&ScrollConfig::default(), &opts).await;
        assert_eq!(trace.ticks, 53);
        assert_eq!(trace.final_position, 0.0);
    }

    #[tokio::test]
    async fn test_endless_glide_is_cut_off() {
        let config = ScrollConfig {
            friction: 0.9999999999,
            ..Default::default()
        };
        let trace = trace(&config, &options(vec![100.0])).await;
        assert_eq!(trace.ticks, MAX_GLIDE_TICKS);
        assert_eq!(trace.max_pending, 1);
    }

    #[tokio::test]
    async fn test_observer_sees_every_event() {
        let mut seen = 0;
        let trace = simulate(&ScrollConfig::default(), &options(vec![100.0]), |_| seen += 1).await;
        assert_eq!(seen, trace.events.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_paced_frames_follow_the_timer() {
        let mut opts = options(vec![100.0]);
        opts.pace = Some(Duration::from_millis(16));
        let start = tokio::time::Instant::now();

        let mut stamps = Vec::new();
        let trace = simulate(&ScrollConfig::default(), &opts, |event| {
            if matches!(event, TraceEvent::Tick { .. }) {
                stamps.push(tokio::time::Instant::now() - start);
            }
        })
        .await;

        assert_eq!(trace.ticks, 53);
        assert_eq!(stamps[0], Duration::from_millis(16));
        assert_eq!(stamps[52], Duration::from_millis(16 * 53));
    }

    #[tokio::test(start_paused = true)]
    async fn test_realtime_run_completes() {
        let mut opts = options(vec![100.0]);
        opts.pace = Some(Duration::from_millis(16));
        let start = tokio::time::Instant::now();
        run(&AppConfig::default(), &opts).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(16 * 53));
    }
}
