use crate::physics::fallingsand::{
    data::pixel_grid::PixelGrid, elements::element::Particle, error::GridError,
};

/// Default falling solid behavior
/// Tries, in order and at most one of:
/// 1. straight down
/// 2. left, if both left and down-left are open
/// 3. right, if both right and down-right are open
///
/// Otherwise the particle has settled and stays put this frame.
pub fn solid_process(particle: &mut Particle, grid: &mut PixelGrid) -> Result<(), GridError> {
    if !particle.is_down(grid) {
        particle.move_down(grid, 1)
    } else if !particle.is_left(grid) && !particle.is_down_left(grid) {
        particle.move_left(grid, 1)
    } else if !particle.is_right(grid) && !particle.is_down_right(grid) {
        particle.move_right(grid, 1)
    } else {
        Ok(())
    }
}
