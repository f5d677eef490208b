#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flappy_evo::simulation::brain::{DecisionNetwork, DenseLayer, MAX_WEIGHT_SCALE};
use flappy_evo::simulation::error::ConfigError;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

const INPUTS: [f32; 5] = [512.0, -3.5, 240.0, 300.0, 550.0];

fn random_network(seed: u64) -> DecisionNetwork {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    DecisionNetwork::new(&[5, 5, 2], 1.0, &mut rng).unwrap()
}

#[test]
fn test_network_creation() {
    let network = random_network(1);

    assert_eq!(network.layer_sizes(), vec![5, 5, 2]);
    assert_eq!(network.parameter_count(), 5 * 5 + 5 + 5 * 2 + 2);

    for layer in network.layers() {
        assert!(layer.weights.iter().all(|w| (-1.0..=1.0).contains(w)));
        assert!(layer.biases.iter().all(|b| (-1.0..=1.0).contains(b)));
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let network = random_network(2);

    let first = network.evaluate(&INPUTS);
    let second = network.evaluate(&INPUTS);

    assert_eq!(first, second);
    assert!(first.iter().all(|v| v.is_finite()));
}

#[test]
fn test_zero_network_outputs_zero() {
    let network =
        DecisionNetwork::from_layers(vec![DenseLayer::zeros(5, 5), DenseLayer::zeros(5, 2)])
            .unwrap();

    assert_eq!(network.evaluate(&INPUTS), [0.0, 0.0]);
}

#[test]
fn test_mutate_zero_is_identity() {
    let network = random_network(3);
    let mut rng = Xoshiro256StarStar::seed_from_u64(3);

    let mut current = network.clone();
    for _ in 0..10 {
        current = current.mutate(0.0, &mut rng);
    }

    assert_eq!(current, network);
    assert_eq!(current.evaluate(&INPUTS), network.evaluate(&INPUTS));
}

#[test]
fn test_mutate_leaves_receiver_untouched() {
    let network = random_network(4);
    let snapshot = network.clone();
    let mut rng = Xoshiro256StarStar::seed_from_u64(4);

    let child = network.mutate(0.5, &mut rng);

    assert_eq!(network, snapshot);
    assert_ne!(child, network);
    assert_eq!(child.layer_sizes(), network.layer_sizes());
}

#[test]
fn test_mutation_noise_is_bounded_by_magnitude() {
    let network = random_network(5);
    let mut rng = Xoshiro256StarStar::seed_from_u64(5);
    let magnitude = 0.1;

    let child = network.mutate(magnitude, &mut rng);

    for (parent, offspring) in network.layers().iter().zip(child.layers()) {
        for (a, b) in parent.weights.iter().zip(offspring.weights.iter()) {
            assert!((a - b).abs() <= magnitude + 1e-6);
        }
        for (a, b) in parent.biases.iter().zip(offspring.biases.iter()) {
            assert!((a - b).abs() <= magnitude + 1e-6);
        }
    }
}

#[test]
fn test_larger_magnitude_perturbs_more() {
    let network = random_network(6);
    let mut rng = Xoshiro256StarStar::seed_from_u64(6);

    let mean_distance = |magnitude: f32, rng: &mut Xoshiro256StarStar| {
        (0..20)
            .map(|_| DecisionNetwork::distance(&network, &network.mutate(magnitude, rng)))
            .sum::<f32>()
            / 20.0
    };

    let small = mean_distance(0.01, &mut rng);
    let large = mean_distance(1.0, &mut rng);

    assert!(small > 0.0);
    assert!(large > small * 10.0);
}

#[test]
fn test_negative_magnitude_copies() {
    let network = random_network(7);
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);

    assert_eq!(network.mutate(-1.0, &mut rng), network);
    assert_eq!(network.mutate(f32::NAN, &mut rng), network);
}

#[test]
fn test_invalid_layer_sizes_rejected() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(8);

    assert!(matches!(
        DecisionNetwork::new(&[5], 1.0, &mut rng),
        Err(ConfigError::TooFewLayers(1))
    ));
    assert!(matches!(
        DecisionNetwork::new(&[5, 0, 2], 1.0, &mut rng),
        Err(ConfigError::ZeroSizedLayer { index: 1 })
    ));
    assert!(matches!(
        DecisionNetwork::new(&[4, 5, 2], 1.0, &mut rng),
        Err(ConfigError::WrongInterface { inputs: 4, .. })
    ));
    assert!(matches!(
        DecisionNetwork::new(&[5, 5, 2], 0.0, &mut rng),
        Err(ConfigError::NonPositive { .. })
    ));
}

#[test]
fn test_wider_hidden_layer_is_allowed() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(9);
    let network = DecisionNetwork::new(&[5, 8, 4, 2], 0.5, &mut rng).unwrap();

    assert_eq!(network.layer_sizes(), vec![5, 8, 4, 2]);
    assert_eq!(network.evaluate(&INPUTS).len(), 2);
}

#[test]
fn test_from_layers_rejects_mismatched_shapes() {
    let result =
        DecisionNetwork::from_layers(vec![DenseLayer::zeros(5, 4), DenseLayer::zeros(5, 2)]);
    assert!(matches!(
        result,
        Err(ConfigError::MismatchedLayer {
            index: 1,
            expected: 4,
            actual: 5
        })
    ));

    assert!(matches!(
        DecisionNetwork::from_layers(Vec::new()),
        Err(ConfigError::TooFewLayers(0))
    ));
}

#[test]
fn test_distance_between_shapes() {
    let a = random_network(10);
    let b = random_network(11);

    assert_eq!(DecisionNetwork::distance(&a, &a), 0.0);
    assert!(DecisionNetwork::distance(&a, &b) > 0.0);

    let mut rng = Xoshiro256StarStar::seed_from_u64(12);
    let wide = DecisionNetwork::new(&[5, 8, 2], 1.0, &mut rng).unwrap();
    assert_eq!(DecisionNetwork::distance(&a, &wide), f32::MAX);
}

#[test]
fn test_oversized_weight_scale_rejected() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(13);

    assert!(matches!(
        DecisionNetwork::new(&[5, 5, 2], f32::MAX, &mut rng),
        Err(ConfigError::ScaleTooLarge { .. })
    ));
    assert!(DecisionNetwork::new(&[5, 5, 2], MAX_WEIGHT_SCALE, &mut rng).is_ok());
}

#[test]
fn test_huge_mutation_magnitude_is_capped() {
    let network = random_network(14);
    let mut rng = Xoshiro256StarStar::seed_from_u64(14);

    let child = network.mutate(f32::MAX, &mut rng);

    for (parent, offspring) in network.layers().iter().zip(child.layers()) {
        for (a, b) in parent.weights.iter().zip(offspring.weights.iter()) {
            assert!(b.is_finite());
            assert!((a - b).abs() <= MAX_WEIGHT_SCALE * 1.001);
        }
    }
    assert!(child.evaluate(&INPUTS).iter().all(|v| v.is_finite()));
}

#[test]
fn test_network_json_round_trip() {
    let network = random_network(15);

    let json = serde_json::to_string(&network).unwrap();
    let loaded: DecisionNetwork = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, network);
}

#[test]
fn test_deserializing_wrong_shape_fails() {
    let one_output = serde_json::json!({
        "layers": [DenseLayer::zeros(5, 5), DenseLayer::zeros(5, 1)]
    });
    assert!(serde_json::from_value::<DecisionNetwork>(one_output).is_err());

    let broken_chain = serde_json::json!({
        "layers": [DenseLayer::zeros(5, 4), DenseLayer::zeros(5, 2)]
    });
    assert!(serde_json::from_value::<DecisionNetwork>(broken_chain).is_err());
}
