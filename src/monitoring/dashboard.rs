use std::fmt::Write as _;

use chrono::Local;

use crate::flow_analyzer::{average_red_wait, green_light_count};
use crate::simulation_engine::light::{LightId, LightPhase, TrafficLight};

/// Status wording shown on the detail panel for each phase.
pub fn phase_label(phase: LightPhase) -> &'static str {
    match phase {
        LightPhase::Red => "STOP",
        LightPhase::Yellow => "CAUTION",
        LightPhase::Green => "GO",
    }
}

fn phase_tag(phase: LightPhase) -> char {
    match phase {
        LightPhase::Red => 'R',
        LightPhase::Yellow => 'Y',
        LightPhase::Green => 'G',
    }
}

/// Formats a countdown as "45s" below a minute and "1:30" above it.
pub fn format_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins > 0 {
        format!("{}:{:02}", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Renders the sidebar for one frame: a detail card for the selected light
/// (skipped when nothing resolves), the live intersection list, and the two
/// aggregate statistics. The selected id is resolved here, so a stale id
/// degrades to a sidebar without a detail card.
pub fn render_sidebar(lights: &[TrafficLight], selected: Option<LightId>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "============ Live Traffic ({}) ============",
        Local::now().format("%H:%M:%S")
    );

    let detail = selected.and_then(|id| lights.iter().find(|light| light.id == id));
    if let Some(light) = detail {
        let _ = writeln!(out, "> {}", light.intersection);
        let _ = writeln!(
            out,
            "  Status: {} ({:?})",
            phase_label(light.phase),
            light.phase
        );
        let _ = writeln!(out, "  Time left: {}", format_time(light.remaining));
        let _ = writeln!(
            out,
            "  Cycle: red {}s / yellow {}s / green {}s",
            light.cycle.red, light.cycle.yellow, light.cycle.green
        );
        let _ = writeln!(out, "-------------------------------------------");
    }

    for light in lights {
        let marker = if selected == Some(light.id) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} [{}] {:<28} next in {}",
            marker,
            phase_tag(light.phase),
            light.intersection,
            format_time(light.remaining)
        );
    }

    let _ = writeln!(out, "-------------------------------------------");
    let _ = writeln!(
        out,
        "Green lights: {}/{}",
        green_light_count(lights),
        lights.len()
    );
    // The core keeps the average fractional; the sidebar rounds for display.
    let _ = writeln!(out, "Avg red wait: {}s", average_red_wait(lights).round());
    out
}
