use bevy::{
    app::{App, Plugin, Update},
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::system::Res,
};
use bevy_egui::{egui, EguiContexts};

use crate::entities::sandbox::SandboxData;

/// A small window with the frame rate and the size of the sandbox
/// Needs the FrameTimeDiagnosticsPlugin for the frame rate, shows 0 without it
pub struct StatsWindowPlugin;

impl Plugin for StatsWindowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, stats_window_system);
    }
}

pub fn stats_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    sandbox: Res<SandboxData>,
) {
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    let simulation = &sandbox.simulation;
    let grid = simulation.get_grid();
    egui::Window::new("Stats")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.label(format!("FPS: {:.0}", fps));
            ui.label(format!("Tick: {}", simulation.get_clock().get_current_frame()));
            ui.label(format!("Particles: {}", simulation.get_particles().len()));
            ui.label(format!("Grid: {}x{}", grid.get_cols(), grid.get_rows()));
            ui.separator();
            ui.label("Press R to reset");
        });
}
