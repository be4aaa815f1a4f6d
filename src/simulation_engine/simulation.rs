use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::communication::messages::SimulationMessage;
use crate::simulation_engine::light::TrafficLight;

/// Advances every light in the registry by one tick, in registry order.
/// Returns a `LightChanged` message for each light whose phase rotated.
pub fn tick_all(lights: &mut [TrafficLight]) -> Vec<SimulationMessage> {
    let mut changes = Vec::new();
    for light in lights.iter_mut() {
        if light.advance() {
            changes.push(SimulationMessage::LightChanged {
                light_id: light.id,
                phase: light.phase,
                remaining: light.remaining,
            });
        }
    }
    changes
}

/// The single writer of the shared light registry.
///
/// Once started, a background task ticks the registry at a fixed interval
/// and publishes the resulting events. Nothing else mutates the registry, so
/// readers interleave with whole ticks only. The timer is released either by
/// an explicit `stop()` or, as a backstop, when the driver is dropped.
pub struct TickDriver {
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    pub fn start(
        registry: Arc<Mutex<Vec<TrafficLight>>>,
        events: mpsc::Sender<SimulationMessage>,
        tick_interval: Duration,
    ) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            // First tick lands one full interval after start.
            let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
            let mut tick: u64 = 0;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tick += 1;
                        let changes = {
                            let mut lights = registry.lock().unwrap();
                            tick_all(&mut lights)
                        };
                        for change in changes {
                            let _ = events.send(change).await;
                        }
                        let _ = events.send(SimulationMessage::SimulationTick(tick)).await;
                    }
                    _ = shutdown_rx.changed() => {
                        log::info!("Tick driver stopping after {} ticks", tick);
                        break;
                    }
                }
            }
        });

        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Stops the timer and waits for the tick task to finish its current
    /// iteration. After this returns no further ticks are produced.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        // Driver discarded without stop(): kill the timer rather than let it
        // keep firing against a registry nobody displays.
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation_engine::light::{
        CycleDurations, LightId, LightPhase, Position, TrafficLight,
    };

    fn registry() -> Vec<TrafficLight> {
        let cycle = CycleDurations {
            red: 3,
            yellow: 1,
            green: 2,
        };
        vec![
            TrafficLight::new(
                LightId(1),
                "First St & A Ave".to_string(),
                Position { x: 0.0, y: 0.0 },
                LightPhase::Red,
                3,
                cycle,
            )
            .unwrap(),
            TrafficLight::new(
                LightId(2),
                "Second St & B Ave".to_string(),
                Position { x: 1.0, y: 1.0 },
                LightPhase::Green,
                1,
                cycle,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn tick_all_advances_every_light() {
        let mut lights = registry();
        let changes = tick_all(&mut lights);
        assert_eq!((lights[0].phase, lights[0].remaining), (LightPhase::Red, 2));
        assert_eq!(
            (lights[1].phase, lights[1].remaining),
            (LightPhase::Yellow, 1)
        );
        // Only the second light rotated.
        assert_eq!(
            changes,
            vec![SimulationMessage::LightChanged {
                light_id: LightId(2),
                phase: LightPhase::Yellow,
                remaining: 1,
            }]
        );
    }

    #[test]
    fn tick_all_reports_nothing_mid_phase() {
        let mut lights = registry();
        lights.truncate(1);
        assert!(tick_all(&mut lights).is_empty());
    }

    #[tokio::test]
    async fn driver_ticks_and_stops_cleanly() {
        let shared = Arc::new(Mutex::new(registry()));
        let (tx, mut rx) = mpsc::channel(32);
        let driver = TickDriver::start(Arc::clone(&shared), tx, Duration::from_millis(5));

        let mut ticks_seen = 0;
        while ticks_seen < 3 {
            match rx.recv().await {
                Some(SimulationMessage::SimulationTick(_)) => ticks_seen += 1,
                Some(_) => {}
                None => panic!("driver closed its event channel early"),
            }
        }

        driver.stop().await;
        // Sender is dropped with the task, so the channel drains and closes.
        while rx.recv().await.is_some() {}

        let lights = shared.lock().unwrap();
        assert_ne!(
            (lights[0].phase, lights[0].remaining),
            (LightPhase::Red, 3),
            "registry should have advanced past its seed state"
        );
    }

    #[tokio::test]
    async fn dropping_the_driver_releases_the_timer() {
        let shared = Arc::new(Mutex::new(registry()));
        let (tx, mut rx) = mpsc::channel(32);
        let driver = TickDriver::start(Arc::clone(&shared), tx, Duration::from_millis(5));
        assert!(rx.recv().await.is_some());

        drop(driver);
        // The aborted task drops its sender; the channel must close rather
        // than keep producing ticks.
        while rx.recv().await.is_some() {}
    }
}
