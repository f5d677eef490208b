//! Configuration errors.
//!
//! Every failure the simulation can report is raised while constructing
//! parameters, networks, populations or clocks. Ticking never fails.

use thiserror::Error;

/// Errors raised when validating simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Playfield width or height is zero, negative or not finite.
    #[error("playfield dimensions must be positive, got {width} x {height}")]
    NonPositivePlayfield {
        /// Configured width.
        width: f32,
        /// Configured height.
        height: f32,
    },
    /// The ground line does not lie inside the playfield.
    #[error("ground margin {margin} must lie within the playfield height {height}")]
    GroundOutsidePlayfield {
        /// Configured ground margin.
        margin: f32,
        /// Configured playfield height.
        height: f32,
    },
    /// The range gap centers are drawn from is empty.
    #[error("gap center range [{low}, {high}] is empty")]
    EmptyGapRange {
        /// Lowest allowed gap center.
        low: f32,
        /// Highest allowed gap center.
        high: f32,
    },
    /// A size or speed that must be strictly positive is not.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// Configured value.
        value: f32,
    },
    /// A noise or weight range is too wide to sample from.
    #[error("{name} must be at most {max}, got {value}")]
    ScaleTooLarge {
        /// Name of the offending parameter.
        name: &'static str,
        /// Configured value.
        value: f32,
        /// Largest accepted value.
        max: f32,
    },
    /// A count that must be non-zero is zero.
    #[error("{0} must be non-zero")]
    ZeroCount(&'static str),
    /// The mutation upper bound is negative or not finite.
    #[error("max mutation magnitude must be finite and non-negative, got {0}")]
    InvalidMutationBound(f32),
    /// The network needs at least an input and an output layer.
    #[error("network needs at least two layer sizes, got {0}")]
    TooFewLayers(usize),
    /// One of the layer sizes is zero.
    #[error("layer {index} has zero size")]
    ZeroSizedLayer {
        /// Position of the layer in the size list.
        index: usize,
    },
    /// Input or output width does not match the sensors or the action pair.
    #[error("network must map {expected_inputs} inputs to {expected_outputs} outputs, got {inputs} -> {outputs}")]
    WrongInterface {
        /// Required input width.
        expected_inputs: usize,
        /// Required output width.
        expected_outputs: usize,
        /// Actual input width.
        inputs: usize,
        /// Actual output width.
        outputs: usize,
    },
    /// A layer's shape does not chain with its neighbour.
    #[error("layer {index} expects {expected} inputs but receives {actual}")]
    MismatchedLayer {
        /// Position of the offending layer.
        index: usize,
        /// Width produced by the previous layer.
        expected: usize,
        /// Width the layer actually consumes.
        actual: usize,
    },
    /// A layer's bias vector does not match its weight rows.
    #[error("layer {index} has {weights} weight rows but {biases} biases")]
    MismatchedBias {
        /// Position of the offending layer.
        index: usize,
        /// Number of weight rows.
        weights: usize,
        /// Number of biases.
        biases: usize,
    },
    /// The simulation speed multiplier is zero.
    #[error("simulation speed multiplier must be at least 1")]
    ZeroSpeed,
    /// Reading a parameter file failed.
    #[error("failed to read parameters: {0}")]
    Io(#[from] std::io::Error),
    /// A parameter file is not valid JSON for [`super::params::Params`].
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}
