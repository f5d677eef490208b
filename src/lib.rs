//! # Flappy Evo - Neuroevolution on a Scrolling Pipe Course
//!
//! Birds with small neural network brains fly through an endless course of
//! pipes. When the whole generation has crashed, the network of the bird that
//! died last is copied with random noise into every bird of the next one.
//!
//! ## Features
//!
//! - Fixed 5-5-2 MLP brains with tanh activation
//! - Single-parent genetic algorithm (mutation only, no crossover)
//! - Deterministic tick-based physics and collision
//! - Seedable RNG for reproducible runs
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Decision network and mutation
//! - [`simulation::agent`] - Bird physics, sensing and collision
//! - [`simulation::obstacle`] - Pipes and the pipe field
//! - [`simulation::population`] - Generational evolution loop
//! - [`simulation::clock`] - Ticks per rendered frame

/// Core simulation logic and data structures.
pub mod simulation {
    /// Birds: physics, sensing and collision.
    pub mod agent;
    /// Decision network implementation for bird brains.
    pub mod brain;
    /// Ticks-per-frame control.
    pub mod clock;
    /// Configuration errors.
    pub mod error;
    /// Axis-aligned regions for collision and drawing.
    pub mod geometry;
    /// Pipes and the field that spawns them.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Generations of birds and the evolution loop.
    pub mod population;
}
