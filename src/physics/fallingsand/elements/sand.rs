use bevy::render::color::Color;

use super::element::Particle;
use super::movement::solid::solid_process;
use crate::physics::fallingsand::data::pixel_grid::PixelGrid;
use crate::physics::fallingsand::error::GridError;

pub fn get_color() -> Color {
    Color::YELLOW
}

/// Sand falls, and piles up diagonally
pub fn process(particle: &mut Particle, grid: &mut PixelGrid) -> Result<(), GridError> {
    solid_process(particle, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::fallingsand::elements::element::{ParticleId, ParticleType};
    use crate::physics::fallingsand::util::vectors::XyVector;
    use crate::physics::util::clock::Clock;
    use std::time::Duration;

    fn pos(x: isize, y: isize) -> XyVector {
        XyVector::new(x, y)
    }

    /// Simple tests for testing that the sand falls down
    mod falls_down {
        use super::*;

        #[test]
        fn test_reaches_the_floor_in_five_ticks() {
            let mut grid = PixelGrid::new(20, 10).unwrap();
            let mut sand =
                Particle::new(&mut grid, ParticleId(0), pos(5, 5), 5, ParticleType::Sand).unwrap();
            let mut clock = Clock::new();

            for expected_y in (0..5).rev() {
                clock.update(Duration::from_millis(16));
                sand.update(&mut grid, clock).unwrap();
                assert_eq!(sand.get_pos(), pos(5, expected_y));
            }

            // And it stays there
            for _ in 0..10 {
                clock.update(Duration::from_millis(16));
                sand.update(&mut grid, clock).unwrap();
                assert_eq!(sand.get_pos(), pos(5, 0));
            }
            assert_eq!(grid.get(pos(5, 0)), Ok(Some(ParticleId(0))));
            assert_eq!(grid.num_occupied(), 1);
        }

        #[test]
        fn test_update_marks_processed() {
            let mut grid = PixelGrid::new(20, 10).unwrap();
            let mut sand =
                Particle::new(&mut grid, ParticleId(0), pos(5, 5), 5, ParticleType::Sand).unwrap();
            let mut clock = Clock::new();
            clock.update(Duration::from_millis(16));
            sand.update(&mut grid, clock).unwrap();
            assert_eq!(sand.get_last_processed().get_current_frame(), 1);
        }
    }
}
