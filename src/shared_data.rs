// src/shared_data.rs

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One aggregate statistics sample, taken once per simulation tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightStatsRecord {
    pub timestamp: u64,
    pub tick: u64,
    pub green_lights: usize,
    pub average_red_wait: f64,
}

/// Raw event payload as it lands in the monitoring trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEventRecord {
    pub timestamp: u64,
    pub raw_data: String,
}

/// Seconds since the Unix epoch.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
