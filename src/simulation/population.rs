//! Generational evolution loop.
//!
//! A population flies one generation at a time. Every tick the pipes scroll
//! and each living bird thinks, moves and checks for collisions. The bird that
//! died last becomes the champion, and once nobody is left the next generation
//! is bred from mutated copies of the champion's network.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::brain::DecisionNetwork;
use super::error::ConfigError;
use super::obstacle::ObstacleField;
use super::params::Params;

/// Summary of a finished generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation number, starting at 1.
    pub generation: u32,
    /// Tick counter value when the last bird died.
    pub ticks_survived: u64,
}

/// Result of advancing the population by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one bird is still flying.
    Running {
        /// Number of living birds.
        alive: usize,
    },
    /// The last bird died; the next generation has already been created.
    GenerationEnded(GenerationRecord),
}

/// The current generation of birds and the state carried between generations.
#[derive(Debug, Clone)]
pub struct Population {
    params: Params,
    agents: Vec<Agent>,
    obstacles: ObstacleField,
    champion: DecisionNetwork,
    generation: u32,
    tick: u64,
    best_ticks: u64,
    history: Vec<GenerationRecord>,
    rng: Xoshiro256StarStar,
}

impl Population {
    /// Creates the first generation with random networks.
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut rng = seeded_rng(&params);

        let networks = (0..params.population_size)
            .map(|_| {
                DecisionNetwork::new(&params.layer_sizes, params.init_weight_scale, &mut rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::assemble(params, networks, rng))
    }

    /// Creates the first generation from the given networks.
    ///
    /// Later generations still hold `params.population_size` birds.
    pub fn from_networks(
        params: Params,
        networks: Vec<DecisionNetwork>,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        if networks.is_empty() {
            return Err(ConfigError::ZeroCount("initial networks"));
        }
        let rng = seeded_rng(&params);

        Ok(Self::assemble(params, networks, rng))
    }

    fn assemble(
        params: Params,
        networks: Vec<DecisionNetwork>,
        mut rng: Xoshiro256StarStar,
    ) -> Self {
        let champion = networks[0].clone();
        let agents = networks
            .into_iter()
            .map(|network| Agent::new(network, &params))
            .collect();
        let obstacles = ObstacleField::new(&params, &mut rng);

        log::info!(
            "generation 1: {} birds, network {:?}",
            params.population_size,
            champion.layer_sizes()
        );

        Self {
            params,
            agents,
            obstacles,
            champion,
            generation: 1,
            tick: 1,
            best_ticks: 0,
            history: Vec::new(),
            rng,
        }
    }

    /// Advances the simulation by exactly one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick += 1;
        if self.tick > self.best_ticks {
            self.best_ticks = self.tick;
        }

        self.obstacles.tick(self.tick, &self.params, &mut self.rng);

        let mut alive = 0;
        for agent in self.agents.iter_mut().filter(|agent| agent.is_alive()) {
            let next = self.obstacles.next_for(agent.left());
            agent.think(next, &self.params);
            agent.apply_physics(&self.params);

            if agent.check_collision(self.obstacles.obstacles(), &self.params) {
                agent.kill();
                // Ties within a tick go to the bird processed last.
                self.champion = agent.network.clone();
                log::trace!("tick {}: bird died at y={:.1}", self.tick, agent.y);
            } else {
                alive += 1;
            }
        }

        if alive > 0 {
            return TickOutcome::Running { alive };
        }

        TickOutcome::GenerationEnded(self.next_generation())
    }

    /// Replaces every bird with a mutated copy of the champion and restarts the course.
    fn next_generation(&mut self) -> GenerationRecord {
        let record = GenerationRecord {
            generation: self.generation,
            ticks_survived: self.tick,
        };
        self.history.push(record);

        let mut agents = Vec::with_capacity(self.params.population_size);
        let mut spread = 0.0f32;
        for _ in 0..self.params.population_size {
            let magnitude = sample_mutation_magnitude(self.params.max_mutation, &mut self.rng);
            let network = self.champion.mutate(magnitude, &mut self.rng);
            spread = spread.max(DecisionNetwork::distance(&self.champion, &network));
            agents.push(Agent::new(network, &self.params));
        }
        self.agents = agents;

        self.obstacles.reset(&self.params, &mut self.rng);
        self.tick = 1;
        self.generation += 1;

        log::info!(
            "generation {} survived {} ticks (best {}), offspring spread {:.3}",
            record.generation,
            record.ticks_survived,
            self.best_ticks,
            spread
        );

        record
    }

    /// All birds of the current generation, dead ones included.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of birds still flying.
    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|agent| agent.is_alive()).count()
    }

    /// The pipe field.
    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// Template network for the next generation.
    pub fn champion(&self) -> &DecisionNetwork {
        &self.champion
    }

    /// Current generation number, starting at 1.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Ticks elapsed in the current generation, starting at 1.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Highest tick count any generation reached.
    pub fn best_ticks(&self) -> u64 {
        self.best_ticks
    }

    /// Finished generations, oldest first.
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// Parameters the population runs with.
    pub fn params(&self) -> &Params {
        &self.params
    }
}

fn seeded_rng(params: &Params) -> Xoshiro256StarStar {
    match params.seed {
        Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
        None => Xoshiro256StarStar::seed_from_u64(rand::random()),
    }
}

/// Draws a mutation magnitude uniformly from `[0, max)`.
fn sample_mutation_magnitude(max: f32, rng: &mut impl Rng) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
