use std::collections::HashSet;

use crate::simulation_engine::light::{
    CycleDurations, LightConfigError, LightId, LightPhase, Position, TrafficLight,
};

/// Builds the full set of simulated lights: twelve San Francisco
/// intersections with fixed cycles and staggered starting countdowns. The
/// registry is created once and never grows or shrinks afterwards.
pub fn create_lights() -> Result<Vec<TrafficLight>, LightConfigError> {
    let seeds = [
        (1, "Market St & Powell St", (-122.4083, 37.7849), LightPhase::Red, 45, (90, 6, 55)),
        (2, "Geary Blvd & Van Ness Ave", (-122.4194, 37.7849), LightPhase::Green, 35, (80, 5, 45)),
        (3, "Mission St & 16th St", (-122.4194, 37.7649), LightPhase::Yellow, 4, (75, 5, 50)),
        (4, "California St & Nob Hill", (-122.4114, 37.7919), LightPhase::Red, 28, (85, 4, 40)),
        (5, "Lombard St & Hyde St", (-122.4194, 37.8019), LightPhase::Green, 22, (70, 5, 45)),
        (6, "Castro St & 18th St", (-122.4349, 37.7609), LightPhase::Red, 55, (95, 6, 60)),
        (7, "Fillmore St & Divisadero St", (-122.4333, 37.7849), LightPhase::Green, 18, (65, 4, 35)),
        (8, "Union St & Polk St", (-122.4194, 37.7989), LightPhase::Yellow, 2, (60, 5, 40)),
        (9, "Valencia St & 24th St", (-122.4214, 37.7529), LightPhase::Red, 42, (80, 5, 50)),
        (10, "Bay St & Embarcadero", (-122.3994, 37.8059), LightPhase::Green, 31, (75, 4, 45)),
        (11, "Irving St & 19th Ave", (-122.4750, 37.7639), LightPhase::Red, 67, (100, 6, 65)),
        (12, "Judah St & Sunset Blvd", (-122.4794, 37.7609), LightPhase::Green, 28, (85, 5, 55)),
    ];

    let mut seen = HashSet::new();
    let mut lights = Vec::with_capacity(seeds.len());
    for (id, intersection, (x, y), phase, remaining, (red, yellow, green)) in seeds {
        let id = LightId(id);
        if !seen.insert(id) {
            return Err(LightConfigError::DuplicateLightId(id));
        }
        lights.push(TrafficLight::new(
            id,
            intersection.to_string(),
            Position { x, y },
            phase,
            remaining,
            CycleDurations { red, yellow, green },
        )?);
    }
    Ok(lights)
}
