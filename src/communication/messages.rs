use crate::simulation_engine::light::{LightId, LightPhase};
use serde::{Deserialize, Serialize};

/// Events published by the tick driver and the selection sources, consumed
/// by the presentation and monitoring sides of the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationMessage {
    LightChanged {
        light_id: LightId,
        phase: LightPhase,
        remaining: u32,
    },
    LightSelected {
        light_id: LightId,
    },
    SimulationTick(u64),
}
