use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use flappy_evo::simulation;
use flappy_evo::simulation::clock::{SimulationClock, SimulationSpeed};

use crate::graphics::TICKS_PER_SECOND;

pub struct UIState {
    pub stats_panel_width: f32,
    pub rendering_enabled: bool,
    pub paused: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            rendering_enabled: true,
            paused: false,
        }
    }
}

pub fn draw_ui(
    state: &mut UIState,
    clock: &mut SimulationClock,
    population: &simulation::population::Population,
) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        egui::SidePanel::right("stats_panel")
            .exact_width(state.stats_panel_width)
            .resizable(false)
            .show(egui_ctx, |ui| {
                ui.heading("Simulation Speed");
                ui.horizontal(|ui| {
                    for speed in SimulationSpeed::ALL {
                        let selected = clock.multiplier() == speed.multiplier();
                        if ui.selectable_label(selected, speed.label()).clicked() {
                            clock.set_preset(speed);
                        }
                    }
                });

                ui.horizontal(|ui| {
                    let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                    if ui.button(pause_text).clicked() {
                        state.paused = !state.paused;
                    }
                    let render_text = if state.rendering_enabled {
                        "🎨 Rendering: ON"
                    } else {
                        "🎨 Rendering: OFF"
                    };
                    if ui.button(render_text).clicked() {
                        state.rendering_enabled = !state.rendering_enabled;
                    }
                });

                ui.separator();
                ui.heading("Generation");
                ui.label(format!("Generation: {}", population.generation()));
                ui.label(format!(
                    "Alive: {} / {}",
                    population.alive_count(),
                    population.agents().len()
                ));
                ui.label(format!(
                    "Time alive: {:.1}s ({} ticks)",
                    population.tick_count() as f64 / TICKS_PER_SECOND as f64,
                    population.tick_count()
                ));
                ui.label(format!(
                    "Best: {:.1}s ({} ticks)",
                    population.best_ticks() as f64 / TICKS_PER_SECOND as f64,
                    population.best_ticks()
                ));
                ui.label(format!("Pipes: {}", population.obstacles().len()));

                ui.separator();
                ui.heading("Champion");
                let champion = population.champion();
                ui.label(format!("Layers: {:?}", champion.layer_sizes()));
                ui.label(format!("Parameters: {}", champion.parameter_count()));

                ui.separator();
                ui.heading("Survival per Generation");
                draw_survival_plot(ui, population.history());
            });
    });
}

fn draw_survival_plot(ui: &mut egui::Ui, history: &[simulation::population::GenerationRecord]) {
    if history.is_empty() {
        ui.label("Waiting for the first generation to end...");
        return;
    }

    let points: PlotPoints = history
        .iter()
        .map(|record| {
            [
                f64::from(record.generation),
                record.ticks_survived as f64 / TICKS_PER_SECOND as f64,
            ]
        })
        .collect();
    let line = Line::new(points).color(egui::Color32::from_rgb(100, 150, 255));

    Plot::new("survival_plot")
        .height(200.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("Generation: {:.0}\nSurvived: {:.1}s", value.x, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
