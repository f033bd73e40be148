use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use falling_sand::entities::sandbox::{SandboxData, SandboxPlugin};
use falling_sand::gui::brush::BrushPlugin;
use falling_sand::gui::particle_picker::ParticlePickerPlugin;
use falling_sand::gui::stats_window::StatsWindowPlugin;
use falling_sand::physics::fallingsand::config::SimulationConfigBuilder;
use falling_sand::physics::fallingsand::data::simulation::Simulation;
use falling_sand::physics::fallingsand::error::ConfigError;

fn main() -> Result<(), ConfigError> {
    let config = SimulationConfigBuilder::new().build()?;
    let window = Window {
        title: config.get_title().to_string(),
        resolution: WindowResolution::new(
            config.get_screen_width() as f32,
            config.get_screen_height() as f32,
        ),
        resizable: false,
        ..Default::default()
    };
    let simulation = Simulation::new(config)?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(SandboxData::new(simulation))
        .add_plugins((
            SandboxPlugin,
            ParticlePickerPlugin,
            BrushPlugin,
            StatsWindowPlugin,
        ))
        .run();
    Ok(())
}
