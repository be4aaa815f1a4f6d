use crate::shared_data::{current_timestamp, LightStatsRecord};
use crate::simulation_engine::light::{LightPhase, TrafficLight};

/// Number of lights currently showing green.
pub fn green_light_count(lights: &[TrafficLight]) -> usize {
    lights
        .iter()
        .filter(|light| light.phase == LightPhase::Green)
        .count()
}

/// Mean countdown across all red lights, in seconds. An empty red subset
/// yields 0.0 rather than a division error.
pub fn average_red_wait(lights: &[TrafficLight]) -> f64 {
    let red: Vec<&TrafficLight> = lights
        .iter()
        .filter(|light| light.phase == LightPhase::Red)
        .collect();
    if red.is_empty() {
        return 0.0;
    }
    let total: u32 = red.iter().map(|light| light.remaining).sum();
    f64::from(total) / red.len() as f64
}

/// Takes one statistics sample from the current registry. Recomputed from
/// scratch on every call; nothing is cached between ticks.
pub fn collect_light_stats(tick: u64, lights: &[TrafficLight]) -> LightStatsRecord {
    LightStatsRecord {
        timestamp: current_timestamp(),
        tick,
        green_lights: green_light_count(lights),
        average_red_wait: average_red_wait(lights),
    }
}
