// Simulation clock cadence: one simulated second per real second.
pub const TICK_INTERVAL_SECS: u64 = 1;

// Monitoring output files
pub const STATS_LOG_FILE: &str = "light_stats.csv";
pub const EVENTS_LOG_FILE: &str = "simulation_events.csv";
pub const STATS_CHART_FILE: &str = "light_stats_chart.png";
