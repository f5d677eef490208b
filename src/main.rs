use flappy_evo::simulation::clock::SimulationClock;
use flappy_evo::simulation::params::Params;
use flappy_evo::simulation::population::Population;
use macroquad::prelude::*;

mod graphics;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Flappy Evo".to_owned(),
        window_width: 876,
        window_height: 1024,
        high_dpi: true,
        ..Default::default()
    }
}

fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };

    match Params::from_json_file(&path) {
        Ok(params) => {
            log::info!("loaded parameters from {}", path);
            params
        }
        Err(e) => {
            log::error!("invalid parameter file {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = load_params();
    let mut population = match Population::new(params) {
        Ok(population) => population,
        Err(e) => {
            log::error!("cannot start simulation: {}", e);
            std::process::exit(1);
        }
    };

    let mut clock = SimulationClock::default();
    let mut ui_state = ui::UIState::new();

    log::info!("starting flappy evo simulation");

    loop {
        if !ui_state.paused {
            clock.step(&mut population);
        }

        clear_background(DARKGRAY);

        if ui_state.rendering_enabled {
            graphics::draw_world(&population, ui_state.stats_panel_width);
        }

        ui::draw_ui(&mut ui_state, &mut clock, &population);
        ui::process_egui();

        next_frame().await
    }
}
