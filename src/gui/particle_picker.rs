//! Choosing which kind of particle the brush places.
//! The mouse wheel steps through the kinds, the window shows the current one
//! with its color and lets you click another.

use bevy::app::{App, Plugin, Update};
use bevy::ecs::event::EventReader;
use bevy::ecs::system::{ResMut, Resource};
use bevy::input::mouse::MouseWheel;
use bevy::log::debug;
use bevy::render::color::Color;
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

use crate::physics::fallingsand::elements::element::ParticleType;

/// Side of the color swatch in the picker window
const SWATCH_SIZE: f32 = 16.0;

/// Index of the selected particle type, always in `0..ParticleType::count()`
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleSelection(usize);

impl ParticleSelection {
    pub fn new(kind: ParticleType) -> Self {
        Self(kind.get_index())
    }
    pub fn get_index(&self) -> usize {
        self.0
    }
    pub fn get_type(&self) -> ParticleType {
        ParticleType::from_index(self.0).unwrap_or_default()
    }
    pub fn set_type(&mut self, kind: ParticleType) {
        self.0 = kind.get_index();
    }

    /// Move the selection by `steps`, stopping at the first and last type
    pub fn scroll(&mut self, steps: isize) {
        let last = ParticleType::count().saturating_sub(1) as isize;
        self.0 = (self.0 as isize + steps).clamp(0, last) as usize;
    }
}

/// Adds the selection resource, the scroll handling and the picker window
pub struct ParticlePickerPlugin;

impl Plugin for ParticlePickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParticleSelection>();
        app.add_systems(
            Update,
            (
                ParticleSelection::scroll_selection_system,
                ParticleSelection::particle_picker_system,
            ),
        );
    }
}

fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.as_rgba_u8();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Bevy Systems
impl ParticleSelection {
    /// Every wheel event is one step, whatever its unit or size
    pub fn scroll_selection_system(
        mut scroll_evr: EventReader<MouseWheel>,
        mut selection: ResMut<ParticleSelection>,
    ) {
        for ev in scroll_evr.read() {
            if ev.y == 0. {
                continue;
            }
            selection.scroll(ev.y.signum() as isize);
            debug!("Selected {}", selection.get_type());
        }
    }

    pub fn particle_picker_system(
        mut contexts: EguiContexts,
        mut selection: ResMut<ParticleSelection>,
    ) {
        let mut current = selection.get_type();
        egui::Window::new("Particle Picker")
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
            .show(contexts.ctx_mut(), |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, 0.0, to_color32(current.get_color()));
                    ui.label(format!("Current Selection: {}", current));
                });
                ui.separator();
                for kind in ParticleType::iter() {
                    ui.selectable_value(&mut current, kind, kind.to_string());
                }
            });
        if current != selection.get_type() {
            selection.set_type(current);
        }
    }
}
