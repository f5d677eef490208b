use std::path::Path;

use serde::{Deserialize, Serialize};

use super::brain::{ACTION_COUNT, MAX_WEIGHT_SCALE, SENSOR_COUNT};
use super::error::ConfigError;

/// Simulation parameters that control the course, the birds and evolution.
///
/// All distances are in playfield pixels and all rates are per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Playfield width; new pipes enter at this x coordinate.
    pub playfield_width: f32,
    /// Playfield height.
    pub playfield_height: f32,
    /// Distance from the bottom of the playfield to the ground line.
    pub ground_margin: f32,
    /// Vertical size of the opening between the two halves of a pipe.
    pub gap_height: f32,
    /// Minimum clearance between a gap center and the top or the ground.
    pub gap_margin: f32,
    /// Pipe width.
    pub obstacle_width: f32,
    /// Vertical extent of the lower pipe below its gap.
    pub obstacle_length: f32,
    /// Horizontal distance a pipe scrolls each tick.
    pub obstacle_speed: f32,
    /// Ticks between two pipe spawns.
    pub spawn_interval: u64,
    /// Maximum number of pipes kept in the field.
    pub max_obstacles: usize,
    /// Horizontal center of every bird.
    pub agent_x: f32,
    /// Bird bounding box width.
    pub agent_width: f32,
    /// Bird bounding box height.
    pub agent_height: f32,
    /// Downward acceleration added to the velocity each tick.
    pub gravity: f32,
    /// Upward velocity set by a jump.
    pub jump_strength: f32,
    /// Birds per generation.
    pub population_size: usize,
    /// Neural network layer dimensions, input first.
    pub layer_sizes: Vec<usize>,
    /// Half-width of the uniform range initial weights are drawn from.
    pub init_weight_scale: f32,
    /// Exclusive upper bound of the per-offspring mutation magnitude.
    pub max_mutation: f32,
    /// Seed for the simulation RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            playfield_width: 576.0,
            playfield_height: 1024.0,
            ground_margin: 100.0,
            gap_height: 250.0,
            gap_margin: 150.0,
            obstacle_width: 104.0,
            obstacle_length: 640.0,
            obstacle_speed: 3.0,
            spawn_interval: 120,
            max_obstacles: 3,
            agent_x: 100.0,
            agent_width: 68.0,
            agent_height: 48.0,
            gravity: 0.5,
            jump_strength: 12.0,
            population_size: 10,
            layer_sizes: vec![SENSOR_COUNT, 5, ACTION_COUNT],
            init_weight_scale: 1.0,
            max_mutation: 0.5,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Y coordinate of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.ground_margin
    }

    /// Inclusive range gap centers are drawn from.
    pub fn gap_center_range(&self) -> (f32, f32) {
        (
            self.gap_margin,
            self.playfield_height - self.ground_margin - self.gap_margin,
        )
    }

    /// Rejects configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0)
            || !self.playfield_width.is_finite()
            || !self.playfield_height.is_finite()
        {
            return Err(ConfigError::NonPositivePlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        if !(self.ground_margin >= 0.0 && self.ground_margin < self.playfield_height) {
            return Err(ConfigError::GroundOutsidePlayfield {
                margin: self.ground_margin,
                height: self.playfield_height,
            });
        }

        for (name, value) in [
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_length", self.obstacle_length),
            ("obstacle_speed", self.obstacle_speed),
            ("agent_width", self.agent_width),
            ("agent_height", self.agent_height),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("init_weight_scale", self.init_weight_scale),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.init_weight_scale > MAX_WEIGHT_SCALE {
            return Err(ConfigError::ScaleTooLarge {
                name: "init_weight_scale",
                value: self.init_weight_scale,
                max: MAX_WEIGHT_SCALE,
            });
        }

        let (low, high) = self.gap_center_range();
        if !(self.gap_margin >= 0.0 && low <= high) {
            return Err(ConfigError::EmptyGapRange { low, high });
        }

        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroCount("spawn_interval"));
        }
        if self.max_obstacles == 0 {
            return Err(ConfigError::ZeroCount("max_obstacles"));
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroCount("population_size"));
        }

        if !(self.max_mutation >= 0.0 && self.max_mutation.is_finite()) {
            return Err(ConfigError::InvalidMutationBound(self.max_mutation));
        }
        if self.max_mutation > MAX_WEIGHT_SCALE {
            return Err(ConfigError::ScaleTooLarge {
                name: "max_mutation",
                value: self.max_mutation,
                max: MAX_WEIGHT_SCALE,
            });
        }

        validate_layer_sizes(&self.layer_sizes)
    }
}

/// Checks that a layer size list describes a usable decision network.
pub fn validate_layer_sizes(layer_sizes: &[usize]) -> Result<(), ConfigError> {
    if layer_sizes.len() < 2 {
        return Err(ConfigError::TooFewLayers(layer_sizes.len()));
    }

    if let Some(index) = layer_sizes.iter().position(|&size| size == 0) {
        return Err(ConfigError::ZeroSizedLayer { index });
    }

    let inputs = layer_sizes[0];
    let outputs = layer_sizes[layer_sizes.len() - 1];
    if inputs != SENSOR_COUNT || outputs != ACTION_COUNT {
        return Err(ConfigError::WrongInterface {
            expected_inputs: SENSOR_COUNT,
            expected_outputs: ACTION_COUNT,
            inputs,
            outputs,
        });
    }

    Ok(())
}
