use bevy::app::{App, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::core_2d::Camera2dBundle;
use bevy::ecs::component::Component;
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Commands, Query, Res, ResMut, Resource};
use bevy::input::keyboard::KeyCode;
use bevy::input::Input;
use bevy::log::{error, info};
use bevy::math::{Vec2, Vec3};
use bevy::render::texture::Image;
use bevy::sprite::{Sprite, SpriteBundle};
use bevy::time::Time;
use bevy::transform::components::Transform;

use crate::gui::brush::PlacementBrush;
use crate::physics::fallingsand::config::SimulationConfig;
use crate::physics::fallingsand::data::simulation::Simulation;

/// Holds the one running sandbox
/// Every system that touches the simulation goes through this resource,
/// so bevy never lets two of them at it at once.
#[derive(Resource)]
pub struct SandboxData {
    pub simulation: Simulation,
}

impl SandboxData {
    pub fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }
}

/// Marks the sprite the sandbox is drawn onto
#[derive(Component, Debug, Clone, Copy)]
pub struct SandboxSprite;

/// Ticks, draws and resets the sandbox
/// Expects a [SandboxData] resource to be inserted before the app runs
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
        app.add_systems(
            Update,
            (
                Self::reset_system,
                Self::process_system,
                Self::draw_system.after(Self::process_system),
            ),
        );
    }
}

/// Where the sprite goes so that its bottom left corner is the bottom left corner of the window.
/// The camera is centered on the origin, so the window spans `-width / 2..width / 2`.
pub fn sprite_transform(config: &SimulationConfig) -> Transform {
    let size = sprite_size(config);
    let window = Vec2::new(
        config.get_screen_width() as f32,
        config.get_screen_height() as f32,
    );
    let center = (size - window) / 2.0;
    Transform::from_translation(Vec3::new(center.x, center.y, 0.0))
}

/// One cell of the grid is `pixel_size` pixels on screen
pub fn sprite_size(config: &SimulationConfig) -> Vec2 {
    let pixel_size = config.get_pixel_size() as f32;
    Vec2::new(
        config.get_cols() as f32 * pixel_size,
        config.get_rows() as f32 * pixel_size,
    )
}

/// Bevy Systems
impl SandboxPlugin {
    /// Spawns the camera and the sprite the grid is drawn onto
    pub fn setup(
        mut commands: Commands,
        mut images: ResMut<Assets<Image>>,
        sandbox: Res<SandboxData>,
    ) {
        let simulation = &sandbox.simulation;
        let config = simulation.get_config();
        let texture = images.add(simulation.get_texture().to_bevy_image());

        commands.spawn(Camera2dBundle::default());
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    custom_size: Some(sprite_size(config)),
                    ..Default::default()
                },
                texture,
                transform: sprite_transform(config),
                ..Default::default()
            },
            SandboxSprite,
        ));
        info!(
            "Drawing a {}x{} grid at {} pixels per cell",
            config.get_cols(),
            config.get_rows(),
            config.get_pixel_size()
        );
    }

    /// Advance the simulation by one tick per frame
    pub fn process_system(mut sandbox: ResMut<SandboxData>, time: Res<Time>) {
        if let Err(err) = sandbox.simulation.tick(time.delta()) {
            error!("Tick failed: {}", err);
        }
    }

    /// Copy the current state of the grid into the sprite's texture
    pub fn draw_system(
        sandbox: Res<SandboxData>,
        sprites: Query<&Handle<Image>, With<SandboxSprite>>,
        mut images: ResMut<Assets<Image>>,
    ) {
        for handle in sprites.iter() {
            if let Some(image) = images.get_mut(handle) {
                image.data = sandbox.simulation.get_texture().pixels;
            }
        }
    }

    /// Press R to start over
    /// The brush is reset too, its last placement was counted on the old clock
    pub fn reset_system(
        keys: Res<Input<KeyCode>>,
        mut sandbox: ResMut<SandboxData>,
        brush: Option<ResMut<PlacementBrush>>,
    ) {
        if keys.just_pressed(KeyCode::R) {
            sandbox.simulation.reset();
            if let Some(mut brush) = brush {
                brush.reset();
            }
        }
    }
}
