use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a traffic light, stable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightId(pub u32);

/// The three phases of a traffic light, exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightPhase {
    Red,
    Yellow,
    Green,
}

impl LightPhase {
    /// Next phase in the fixed rotation. Yellow is the transition out of
    /// green back to red, not the transition into green.
    pub fn next(self) -> Self {
        match self {
            LightPhase::Red => LightPhase::Green,
            LightPhase::Green => LightPhase::Yellow,
            LightPhase::Yellow => LightPhase::Red,
        }
    }
}

/// Map position of the light's marker (longitude, latitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Fixed per-phase durations in seconds, immutable for the light's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDurations {
    pub red: u32,
    pub yellow: u32,
    pub green: u32,
}

impl CycleDurations {
    pub fn duration_of(&self, phase: LightPhase) -> u32 {
        match phase {
            LightPhase::Red => self.red,
            LightPhase::Yellow => self.yellow,
            LightPhase::Green => self.green,
        }
    }

    /// Ticks needed for a light to come back to its starting phase and countdown.
    pub fn period(&self) -> u32 {
        self.red + self.yellow + self.green
    }
}

/// Rejected light configurations. Seed data is validated once at
/// construction so the tick loop never meets a degenerate cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LightConfigError {
    #[error("light {id:?} ({intersection}): {phase:?} phase duration must be at least one second")]
    ZeroPhaseDuration {
        id: LightId,
        intersection: String,
        phase: LightPhase,
    },
    #[error("light {id:?} ({intersection}): initial countdown of {remaining}s is outside the {phase:?} window of {duration}s")]
    RemainingOutOfRange {
        id: LightId,
        intersection: String,
        phase: LightPhase,
        remaining: u32,
        duration: u32,
    },
    #[error("duplicate light id {0:?}")]
    DuplicateLightId(LightId),
}

/// A single simulated traffic light at a named intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficLight {
    /// Unique identifier for the light.
    pub id: LightId,
    /// Display label of the intersection.
    pub intersection: String,
    /// Marker position on the map.
    pub position: Position,
    /// Currently active phase.
    pub phase: LightPhase,
    /// Seconds left in the active phase. Always within `1..=cycle[phase]`
    /// between ticks; phase and countdown are only ever replaced together.
    pub remaining: u32,
    /// Configured per-phase durations.
    pub cycle: CycleDurations,
}

impl TrafficLight {
    /// Creates a new traffic light, rejecting zero-length phases and an
    /// initial countdown that does not fit the starting phase.
    pub fn new(
        id: LightId,
        intersection: String,
        position: Position,
        phase: LightPhase,
        remaining: u32,
        cycle: CycleDurations,
    ) -> Result<Self, LightConfigError> {
        for candidate in [LightPhase::Red, LightPhase::Yellow, LightPhase::Green] {
            if cycle.duration_of(candidate) == 0 {
                return Err(LightConfigError::ZeroPhaseDuration {
                    id,
                    intersection,
                    phase: candidate,
                });
            }
        }

        let duration = cycle.duration_of(phase);
        if remaining == 0 || remaining > duration {
            return Err(LightConfigError::RemainingOutOfRange {
                id,
                intersection,
                phase,
                remaining,
                duration,
            });
        }

        Ok(Self {
            id,
            intersection,
            position,
            phase,
            remaining,
            cycle,
        })
    }

    /// Advances the light by one tick of simulated time.
    ///
    /// The countdown drops by one second; when it hits zero the light
    /// rotates to the next phase and the countdown is reset to that phase's
    /// configured duration in the same call, so a zero countdown is never
    /// observable between ticks. Returns whether the phase rotated.
    pub fn advance(&mut self) -> bool {
        let remaining = self.remaining.saturating_sub(1);
        if remaining > 0 {
            self.remaining = remaining;
            return false;
        }
        let next = self.phase.next();
        self.phase = next;
        self.remaining = self.cycle.duration_of(next);
        true
    }
}
