use flappy_evo::simulation;
use flappy_evo::simulation::params::Params;
use macroquad::prelude::*;

/// Ticks per second of simulated time at 1x speed.
pub const TICKS_PER_SECOND: u64 = 60;

const SKY: Color = Color::new(0.31, 0.75, 0.79, 1.0);
const PIPE: Color = Color::new(0.45, 0.75, 0.18, 1.0);
const PIPE_EDGE: Color = Color::new(0.33, 0.5, 0.14, 1.0);
const GROUND: Color = Color::new(0.87, 0.85, 0.58, 1.0);
const GROUND_STRIPE: Color = Color::new(0.55, 0.8, 0.3, 1.0);
const BIRD: Color = Color::new(0.3, 0.55, 0.95, 1.0);

/// Maps playfield coordinates into the part of the window left of the stats panel.
struct Viewport {
    width: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Viewport {
    fn new(params: &Params, panel_width: f32) -> Self {
        let available_w = (screen_width() - panel_width).max(1.0);
        let available_h = screen_height();
        let scale = (available_w / params.playfield_width).min(available_h / params.playfield_height);
        Self {
            width: params.playfield_width,
            scale,
            offset_x: (available_w - params.playfield_width * scale) / 2.0,
            offset_y: (available_h - params.playfield_height * scale) / 2.0,
        }
    }

    fn x(&self, x: f32) -> f32 {
        self.offset_x + x * self.scale
    }

    fn y(&self, y: f32) -> f32 {
        self.offset_y + y * self.scale
    }

    fn len(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Draws a playfield rectangle clipped to the playfield's horizontal extent.
    fn rect(&self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let left = x.max(0.0);
        let right = (x + w).min(self.width);
        if right > left {
            draw_rectangle(self.x(left), self.y(y), self.len(right - left), self.len(h), color);
        }
    }
}

pub fn draw_world(population: &simulation::population::Population, panel_width: f32) {
    let params = population.params();
    let view = Viewport::new(params, panel_width);

    view.rect(0.0, 0.0, params.playfield_width, params.playfield_height, SKY);

    for obstacle in population.obstacles().obstacles() {
        for region in [obstacle.upper_region(), obstacle.lower_region()] {
            let (min, w, h) = (region.min(), region.width(), region.height());
            view.rect(min.x, min.y, w, h, PIPE_EDGE);
            view.rect(min.x + 3.0, min.y, w - 6.0, h, PIPE);
        }
    }

    draw_ground(population, &view);

    for agent in population.agents().iter().filter(|a| a.is_alive()) {
        let bounds = agent.bounds();
        draw_ellipse(
            view.x(agent.x),
            view.y(agent.y),
            view.len(bounds.width() / 2.0),
            view.len(bounds.height() / 2.0),
            (agent.velocity * 3.0).clamp(-30.0, 60.0),
            BIRD,
        );
    }

    draw_hud(population, &view);
}

fn draw_ground(population: &simulation::population::Population, view: &Viewport) {
    let params = population.params();
    let ground_y = params.ground_y();
    view.rect(0.0, ground_y, params.playfield_width, params.ground_margin, GROUND);

    // Stripes scroll with the pipes.
    let stripe = 48.0;
    let shift = (population.tick_count() as f32 * params.obstacle_speed) % stripe;
    let mut x = -shift;
    while x < params.playfield_width {
        view.rect(x, ground_y, stripe / 2.0, 16.0, GROUND_STRIPE);
        x += stripe;
    }
}

fn draw_hud(population: &simulation::population::Population, view: &Viewport) {
    let font_size = view.len(32.0).max(12.0);
    let lines = [
        format!("TIME ALIVE: {}", population.tick_count() / TICKS_PER_SECOND),
        format!("BEST AI: {}", population.best_ticks() / TICKS_PER_SECOND),
        format!("GEN {}", population.generation()),
    ];

    for (i, text) in lines.iter().enumerate() {
        draw_text(
            text,
            view.x(20.0),
            view.y(40.0 + i as f32 * 40.0),
            font_size,
            BLACK,
        );
    }
}
