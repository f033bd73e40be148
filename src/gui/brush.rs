use bevy::app::{App, Plugin, Update};
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Query, Res, ResMut, Resource};
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::log::trace;
use bevy::math::Vec2;
use bevy::window::{PrimaryWindow, Window};
use bevy_egui::EguiContexts;

use crate::entities::sandbox::{SandboxData, SandboxPlugin};
use crate::physics::fallingsand::util::vectors::XyVector;

use super::particle_picker::ParticleSelection;

/// Places the selected particle under the cursor while the left mouse button is held
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementBrush>();
        app.add_systems(
            Update,
            PlacementBrush::apply_brush_system.before(SandboxPlugin::process_system),
        );
    }
}

/// Remembers the last tick something was placed on, so that holding the
/// mouse down does not place on every single tick
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementBrush {
    last_placed: Option<u64>,
}

impl PlacementBrush {
    /// True if at least `interval` ticks have passed since the last placement
    /// An interval of 0 behaves like 1.
    /// A mark ahead of `frame` is left over from before a reset and does not count.
    pub fn ready(&self, frame: u64, interval: u32) -> bool {
        match self.last_placed {
            None => true,
            Some(last) if last > frame => true,
            Some(last) => frame - last >= u64::from(interval.max(1)),
        }
    }

    pub fn mark(&mut self, frame: u64) {
        self.last_placed = Some(frame);
    }

    /// Forget the last placement, for when the simulation clock starts over
    pub fn reset(&mut self) {
        self.last_placed = None;
    }
}

/// Converts a cursor position, origin at the top left of the window and y going down,
/// into the grid cell under it, origin at the bottom left and y going up.
/// Positions left of or below the grid come out negative.
pub fn cursor_to_cell(cursor: Vec2, window_height: f32, pixel_size: u32) -> XyVector {
    let pixel = cursor.floor();
    let pixel_size = pixel_size as f32;
    let from_bottom = window_height - 1.0 - pixel.y;
    XyVector::new(
        (pixel.x / pixel_size).floor() as isize,
        (from_bottom / pixel_size).floor() as isize,
    )
}

/// Bevy Systems
impl PlacementBrush {
    pub fn apply_brush_system(
        mouse: Res<Input<MouseButton>>,
        windows: Query<&Window, With<PrimaryWindow>>,
        mut contexts: EguiContexts,
        selection: Res<ParticleSelection>,
        mut sandbox: ResMut<SandboxData>,
        mut brush: ResMut<PlacementBrush>,
    ) {
        if !mouse.pressed(MouseButton::Left) {
            return;
        }
        // Clicks on the gui windows are not meant for the sandbox
        if contexts.ctx_mut().wants_pointer_input() {
            return;
        }
        let Ok(window) = windows.get_single() else {
            return;
        };
        let Some(cursor) = window.cursor_position() else {
            return;
        };

        let simulation = &mut sandbox.simulation;
        let frame = simulation.get_clock().get_current_frame();
        let config = simulation.get_config();
        if !brush.ready(frame, config.get_placement_interval()) {
            return;
        }
        let cell = cursor_to_cell(cursor, window.height(), config.get_pixel_size());
        brush.mark(frame);
        if let Some(id) = simulation.try_place(selection.get_type(), cell) {
            trace!("Placed {} {} at {}", selection.get_type(), id, cell);
        }
    }
}
