//! Bird behavior, physics and collision.
//!
//! Birds have a decision network, sense the pipe ahead of them, fall under
//! gravity and jump when their network prefers to.

use geo::Rect;
use serde::{Deserialize, Serialize};

use super::brain::{Actions, DecisionNetwork, Sensors};
use super::geometry;
use super::obstacle::Obstacle;
use super::params::Params;

/// A simulated bird controlled by a decision network.
///
/// A bird only ever moves vertically. Once dead it stays dead; generation
/// rollover replaces it with a fresh bird.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Horizontal center, fixed for the bird's lifetime.
    pub x: f32,
    /// Vertical center.
    pub y: f32,
    /// Vertical velocity; positive is downward.
    pub velocity: f32,
    /// Bounding box width.
    pub width: f32,
    /// Bounding box height.
    pub height: f32,
    /// Neural network that decides when to jump.
    pub network: DecisionNetwork,
    alive: bool,
}

impl Agent {
    /// Creates a living bird at rest in the vertical middle of the playfield.
    pub fn new(network: DecisionNetwork, params: &Params) -> Self {
        Self {
            x: params.agent_x,
            y: params.playfield_height / 2.0,
            velocity: 0.0,
            width: params.agent_width,
            height: params.agent_height,
            network,
            alive: true,
        }
    }

    /// Checks if the bird is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Kills the bird. There is no way back.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Bounding box centered on the bird's position.
    pub fn bounds(&self) -> Rect<f32> {
        geometry::rect_from_center(self.x, self.y, self.width, self.height)
    }

    /// Left edge of the bounding box.
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    /// Network inputs for the pipe the bird is heading for.
    pub fn sense(&self, next: &Obstacle) -> Sensors {
        [
            self.y,
            self.velocity,
            next.center_x() - self.x,
            next.gap_top(),
            next.gap_bottom(),
        ]
    }

    /// Jumps when the network prefers jumping over staying.
    pub fn decide(&mut self, outputs: Actions, params: &Params) {
        if outputs[1] > outputs[0] {
            self.jump(params);
        }
    }

    /// Senses, evaluates the network and acts on its preference.
    pub fn think(&mut self, next: &Obstacle, params: &Params) {
        let outputs = self.network.evaluate(&self.sense(next));
        self.decide(outputs, params);
    }

    /// Replaces the current velocity with the upward jump velocity.
    pub fn jump(&mut self, params: &Params) {
        self.velocity = -params.jump_strength;
    }

    /// Applies one tick of gravity, then moves.
    pub fn apply_physics(&mut self, params: &Params) {
        self.velocity += params.gravity;
        self.y += self.velocity;
    }

    /// True when the bird touches the ceiling, the ground or any pipe.
    pub fn check_collision(&self, obstacles: &[Obstacle], params: &Params) -> bool {
        let bounds = self.bounds();
        if bounds.min().y <= 0.0 || bounds.max().y >= params.ground_y() {
            return true;
        }

        obstacles.iter().any(|obstacle| obstacle.collides_with(&bounds))
    }
}
