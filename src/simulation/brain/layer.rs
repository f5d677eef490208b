//! Dense layer of the decision network.

use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fully connected layer with tanh activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f32>,
    /// Bias vector (`output_size`).
    pub biases: Array1<f32>,
}

impl DenseLayer {
    /// Creates a layer from explicit weights and biases.
    pub fn new(weights: Array2<f32>, biases: Array1<f32>) -> Self {
        Self { weights, biases }
    }

    /// Creates a layer with weights and biases uniform in `[-scale, scale]`.
    ///
    /// `scale` must be positive, finite and at most
    /// [`MAX_WEIGHT_SCALE`](super::MAX_WEIGHT_SCALE).
    pub fn new_random(
        input_size: usize,
        output_size: usize,
        scale: f32,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            weights: Array2::from_shape_fn((output_size, input_size), |_| {
                rng.random_range(-scale..=scale)
            }),
            biases: Array1::from_shape_fn(output_size, |_| rng.random_range(-scale..=scale)),
        }
    }

    /// Creates a layer whose weights and biases are all zero.
    pub fn zeros(input_size: usize, output_size: usize) -> Self {
        Self {
            weights: Array2::zeros((output_size, input_size)),
            biases: Array1::zeros(output_size),
        }
    }

    /// Number of inputs the layer consumes.
    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of outputs the layer produces.
    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Performs forward pass with tanh activation.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = self.weights.dot(inputs);
        output += &self.biases;
        output.mapv_inplace(f32::tanh);
        output
    }

    /// Returns a copy with independent uniform noise in `[-magnitude, magnitude]`
    /// added to every weight and bias.
    ///
    /// `magnitude` must be positive, finite and at most
    /// [`MAX_WEIGHT_SCALE`](super::MAX_WEIGHT_SCALE).
    pub fn perturbed(&self, magnitude: f32, rng: &mut impl Rng) -> Self {
        Self {
            weights: self
                .weights
                .mapv(|w| w + rng.random_range(-magnitude..=magnitude)),
            biases: self
                .biases
                .mapv(|b| b + rng.random_range(-magnitude..=magnitude)),
        }
    }
}
