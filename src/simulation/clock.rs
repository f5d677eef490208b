//! Ticks-per-frame control.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::population::{GenerationRecord, Population, TickOutcome};

/// Speed presets offered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationSpeed {
    /// One tick per frame.
    Normal,
    /// Four ticks per frame.
    Medium,
    /// Sixteen ticks per frame.
    Full,
}

impl SimulationSpeed {
    /// Every preset, slowest first.
    pub const ALL: [SimulationSpeed; 3] = [
        SimulationSpeed::Normal,
        SimulationSpeed::Medium,
        SimulationSpeed::Full,
    ];

    /// Ticks per frame for this preset.
    pub fn multiplier(self) -> u32 {
        match self {
            SimulationSpeed::Normal => 1,
            SimulationSpeed::Medium => 4,
            SimulationSpeed::Full => 16,
        }
    }

    /// Short label for buttons.
    pub fn label(self) -> &'static str {
        match self {
            SimulationSpeed::Normal => "1x",
            SimulationSpeed::Medium => "4x",
            SimulationSpeed::Full => "16x",
        }
    }
}

/// Runs a fixed number of ticks per rendered frame.
///
/// The multiplier only changes how many whole ticks happen per frame; the
/// physics constants are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    multiplier: u32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self { multiplier: 1 }
    }
}

impl SimulationClock {
    /// Creates a clock running `multiplier` ticks per step.
    pub fn new(multiplier: u32) -> Result<Self, ConfigError> {
        let mut clock = Self::default();
        clock.set_speed(multiplier)?;
        Ok(clock)
    }

    /// Changes the number of ticks per step. Zero is rejected.
    pub fn set_speed(&mut self, multiplier: u32) -> Result<(), ConfigError> {
        if multiplier == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        self.multiplier = multiplier;
        Ok(())
    }

    /// Switches to one of the front end's presets.
    pub fn set_preset(&mut self, speed: SimulationSpeed) {
        self.multiplier = speed.multiplier();
    }

    /// Ticks per step.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Runs exactly `multiplier` ticks and returns the generations that ended.
    pub fn step(&self, population: &mut Population) -> Vec<GenerationRecord> {
        let mut finished = Vec::new();
        for _ in 0..self.multiplier {
            if let TickOutcome::GenerationEnded(record) = population.tick() {
                finished.push(record);
            }
        }
        finished
    }
}
