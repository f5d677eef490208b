#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flappy_evo::simulation::brain::{DecisionNetwork, DenseLayer};
use flappy_evo::simulation::clock::{SimulationClock, SimulationSpeed};
use flappy_evo::simulation::error::ConfigError;
use flappy_evo::simulation::params::Params;
use flappy_evo::simulation::population::Population;

fn falling_population() -> Population {
    let params = Params {
        population_size: 1,
        seed: Some(7),
        ..Params::default()
    };
    let network =
        DecisionNetwork::from_layers(vec![DenseLayer::zeros(5, 5), DenseLayer::zeros(5, 2)])
            .unwrap();
    Population::from_networks(params, vec![network]).unwrap()
}

#[test]
fn test_zero_speed_rejected() {
    assert!(matches!(SimulationClock::new(0), Err(ConfigError::ZeroSpeed)));

    let mut clock = SimulationClock::new(4).unwrap();
    assert!(clock.set_speed(0).is_err());
    assert_eq!(clock.multiplier(), 4);
}

#[test]
fn test_presets() {
    let multipliers: Vec<u32> = SimulationSpeed::ALL.iter().map(|s| s.multiplier()).collect();
    assert_eq!(multipliers, vec![1, 4, 16]);

    let mut clock = SimulationClock::default();
    assert_eq!(clock.multiplier(), 1);

    clock.set_preset(SimulationSpeed::Full);
    assert_eq!(clock.multiplier(), 16);
}

#[test]
fn test_step_runs_multiplier_ticks() {
    let mut population = falling_population();
    let clock = SimulationClock::new(16).unwrap();

    assert!(clock.step(&mut population).is_empty());
    assert_eq!(population.tick_count(), 17);

    assert!(clock.step(&mut population).is_empty());
    assert_eq!(population.tick_count(), 33);
}

#[test]
fn test_step_reports_generation_end() {
    // The lone falling bird hits the ground at tick 40, i.e. on the 7th tick
    // of the third 16-tick step; the remaining 9 ticks belong to generation 2.
    let mut population = falling_population();
    let clock = SimulationClock::new(16).unwrap();

    clock.step(&mut population);
    clock.step(&mut population);
    let finished = clock.step(&mut population);

    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].generation, 1);
    assert_eq!(finished[0].ticks_survived, 40);
    assert_eq!(population.generation(), 2);
    assert_eq!(population.tick_count(), 10);
}

#[test]
fn test_speed_does_not_change_physics() {
    let mut slow = falling_population();
    let mut fast = falling_population();
    let slow_clock = SimulationClock::new(1).unwrap();
    let fast_clock = SimulationClock::new(4).unwrap();

    for _ in 0..8 {
        slow_clock.step(&mut slow);
    }
    fast_clock.step(&mut fast);
    fast_clock.step(&mut fast);

    assert_eq!(slow.tick_count(), fast.tick_count());
    assert_eq!(slow.agents()[0].y, fast.agents()[0].y);
    assert_eq!(
        slow.obstacles().obstacles()[0].x,
        fast.obstacles().obstacles()[0].x
    );
}
