pub mod statistics;

// Re-export the aggregate queries used by the presentation side.
pub use statistics::{average_red_wait, collect_light_stats, green_light_count};
