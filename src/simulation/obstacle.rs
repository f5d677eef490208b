//! Pipes scrolling through the playfield and the field that spawns them.
//!
//! A pipe is a vertical gap the birds must fly through. Everything above the
//! gap and a fixed length below it is solid.

use geo::Rect;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry;
use super::params::Params;

/// A pipe with a randomly placed gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every tick.
    pub x: f32,
    /// Vertical center of the gap, fixed at creation.
    pub gap_center: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical size of the gap.
    pub gap_height: f32,
    /// Vertical extent of the lower half below the gap.
    pub length: f32,
}

impl Obstacle {
    /// Creates a pipe at the right edge of the playfield with a random gap.
    pub fn new_random(params: &Params, rng: &mut impl Rng) -> Self {
        let (low, high) = params.gap_center_range();
        Self::with_gap(params, rng.random_range(low..=high))
    }

    /// Creates a pipe at the right edge of the playfield with the given gap center.
    pub fn with_gap(params: &Params, gap_center: f32) -> Self {
        Self {
            x: params.playfield_width,
            gap_center,
            width: params.obstacle_width,
            gap_height: params.gap_height,
            length: params.obstacle_length,
        }
    }

    /// Scrolls the pipe left by `speed`.
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Y coordinate where the upper half ends.
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    /// Y coordinate where the lower half starts.
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    /// Solid region from the top of the playfield down to the gap.
    pub fn upper_region(&self) -> Rect<f32> {
        geometry::rect_from_top_left(self.x, 0.0, self.width, self.gap_top())
    }

    /// Solid region from the gap down to the end of the pipe.
    pub fn lower_region(&self) -> Rect<f32> {
        geometry::rect_from_top_left(self.x, self.gap_bottom(), self.width, self.length)
    }

    /// True when `region` touches either solid half.
    pub fn collides_with(&self, region: &Rect<f32>) -> bool {
        geometry::overlaps(region, &self.upper_region())
            || geometry::overlaps(region, &self.lower_region())
    }
}

/// Ordered pipes, oldest first. Never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Creates a field holding a single fresh pipe.
    pub fn new(params: &Params, rng: &mut impl Rng) -> Self {
        let mut obstacles = Vec::with_capacity(params.max_obstacles);
        obstacles.push(Obstacle::new_random(params, rng));
        Self { obstacles }
    }

    /// Creates a field from existing pipes, oldest first.
    ///
    /// Returns `None` when `obstacles` is empty.
    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Option<Self> {
        if obstacles.is_empty() {
            None
        } else {
            Some(Self { obstacles })
        }
    }

    /// Drops every pipe and starts over with a single fresh one.
    pub fn reset(&mut self, params: &Params, rng: &mut impl Rng) {
        self.obstacles.clear();
        self.obstacles.push(Obstacle::new_random(params, rng));
    }

    /// Advances the field by one tick.
    ///
    /// On every multiple of the spawn interval a new pipe is appended, evicting
    /// the oldest first when the field is full. Every pipe then scrolls left.
    /// Returns whether a pipe was spawned.
    pub fn tick(&mut self, current_tick: u64, params: &Params, rng: &mut impl Rng) -> bool {
        let spawned = current_tick % params.spawn_interval == 0;
        if spawned {
            if self.obstacles.len() >= params.max_obstacles {
                self.obstacles.remove(0);
            }
            self.obstacles.push(Obstacle::new_random(params, rng));
            log::debug!(
                "tick {}: spawned pipe, {} in field",
                current_tick,
                self.obstacles.len()
            );
        }

        for obstacle in &mut self.obstacles {
            obstacle.advance(params.obstacle_speed);
        }

        spawned
    }

    /// Picks the pipe a bird whose left edge is at `agent_left` should steer for.
    ///
    /// The second-newest pipe is chosen while the bird has not yet passed its
    /// right edge; otherwise the newest one.
    pub fn next_for(&self, agent_left: f32) -> &Obstacle {
        match self.obstacles.as_slice() {
            [.., previous, _] if previous.right() >= agent_left => previous,
            [.., newest] => newest,
            [] => unreachable!("obstacle field is never empty"),
        }
    }

    /// All pipes, oldest first.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Number of pipes in the field.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// True when the field holds no pipes, which construction rules out.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
