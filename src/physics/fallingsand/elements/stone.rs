use bevy::render::color::Color;

use super::element::Particle;
use crate::physics::fallingsand::data::pixel_grid::PixelGrid;
use crate::physics::fallingsand::error::GridError;

// Gray
pub fn get_color() -> Color {
    Color::rgb_u8(128, 128, 128)
}

// Stone does nothing
pub fn process(_particle: &mut Particle, _grid: &mut PixelGrid) -> Result<(), GridError> {
    Ok(())
}
