//! Decision network controlling a bird.
//!
//! A fixed-topology multi-layer perceptron maps the bird's five sensor
//! readings to a pair of action preferences. Evolution only ever copies a
//! network with noise added; the topology never changes.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::params::validate_layer_sizes;

pub mod layer;

pub use layer::DenseLayer;

/// Number of sensor readings fed to the network.
pub const SENSOR_COUNT: usize = 5;
/// Number of action preferences produced by the network.
pub const ACTION_COUNT: usize = 2;

/// Widest accepted half-range for initial weights and mutation noise.
pub const MAX_WEIGHT_SCALE: f32 = 1.0e6;

/// Sensor readings: `[y, velocity, distance to pipe, gap top, gap bottom]`.
pub type Sensors = [f32; SENSOR_COUNT];
/// Action preferences: `[stay, jump]`.
pub type Actions = [f32; ACTION_COUNT];

/// Feed-forward network with tanh activation on every layer.
///
/// Deserialized networks go through [`DecisionNetwork::from_layers`], so a
/// saved network with the wrong shape is rejected instead of loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNetwork")]
pub struct DecisionNetwork {
    layers: Vec<DenseLayer>,
}

/// Unchecked serialized form of [`DecisionNetwork`].
#[derive(Deserialize)]
struct RawNetwork {
    layers: Vec<DenseLayer>,
}

impl TryFrom<RawNetwork> for DecisionNetwork {
    type Error = ConfigError;

    fn try_from(raw: RawNetwork) -> Result<Self, Self::Error> {
        Self::from_layers(raw.layers)
    }
}

impl DecisionNetwork {
    /// Creates a network with weights uniform in `[-scale, scale]`.
    pub fn new(
        layer_sizes: &[usize],
        scale: f32,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        validate_layer_sizes(layer_sizes)?;
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "init_weight_scale",
                value: scale,
            });
        }
        if scale > MAX_WEIGHT_SCALE {
            return Err(ConfigError::ScaleTooLarge {
                name: "init_weight_scale",
                value: scale,
                max: MAX_WEIGHT_SCALE,
            });
        }

        let layers = layer_sizes
            .windows(2)
            .map(|pair| DenseLayer::new_random(pair[0], pair[1], scale, rng))
            .collect();

        Ok(Self { layers })
    }

    /// Builds a network from explicit layers.
    ///
    /// The layers must chain and map [`SENSOR_COUNT`] inputs to
    /// [`ACTION_COUNT`] outputs.
    pub fn from_layers(layers: Vec<DenseLayer>) -> Result<Self, ConfigError> {
        for (index, layer) in layers.iter().enumerate() {
            if layer.biases.len() != layer.output_size() {
                return Err(ConfigError::MismatchedBias {
                    index,
                    weights: layer.output_size(),
                    biases: layer.biases.len(),
                });
            }
        }

        for (index, pair) in layers.windows(2).enumerate() {
            if pair[0].output_size() != pair[1].input_size() {
                return Err(ConfigError::MismatchedLayer {
                    index: index + 1,
                    expected: pair[0].output_size(),
                    actual: pair[1].input_size(),
                });
            }
        }

        let network = Self { layers };
        validate_layer_sizes(&network.layer_sizes())?;
        Ok(network)
    }

    /// Runs a forward pass. Pure: the same inputs always give the same outputs.
    pub fn evaluate(&self, inputs: &Sensors) -> Actions {
        let mut output = Array1::from(inputs.to_vec());
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        [output[0], output[1]]
    }

    /// Returns a mutated copy; the receiver is left untouched.
    ///
    /// Every weight and bias gets independent uniform noise in
    /// `[-magnitude, magnitude]`. A magnitude that is not positive yields an
    /// exact copy; larger ones are capped at [`MAX_WEIGHT_SCALE`].
    pub fn mutate(&self, magnitude: f32, rng: &mut impl Rng) -> Self {
        if !(magnitude > 0.0 && magnitude.is_finite()) {
            return self.clone();
        }
        let magnitude = magnitude.min(MAX_WEIGHT_SCALE);

        Self {
            layers: self
                .layers
                .iter()
                .map(|layer| layer.perturbed(magnitude, rng))
                .collect(),
        }
    }

    /// Euclidean distance between the parameters of two networks of equal shape.
    ///
    /// Returns `f32::MAX` when the shapes differ.
    pub fn distance(a: &DecisionNetwork, b: &DecisionNetwork) -> f32 {
        if a.layer_sizes() != b.layer_sizes() {
            return f32::MAX;
        }

        let mut sum_sq = 0.0f32;
        for (l1, l2) in a.layers.iter().zip(&b.layers) {
            for (w1, w2) in l1.weights.iter().zip(l2.weights.iter()) {
                let diff = w1 - w2;
                sum_sq += diff * diff;
            }
            for (b1, b2) in l1.biases.iter().zip(l2.biases.iter()) {
                let diff = b1 - b2;
                sum_sq += diff * diff;
            }
        }
        sum_sq.sqrt()
    }

    /// Layer widths, input first.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.layers.len() + 1);
        if let Some(first) = self.layers.first() {
            sizes.push(first.input_size());
        }
        sizes.extend(self.layers.iter().map(DenseLayer::output_size));
        sizes
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| layer.weights.len() + layer.biases.len())
            .sum()
    }

    /// The network's layers, input side first.
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }
}
