use bevy::render::color::Color;
use derive_more::{Display, From, Into};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display as StrumDisplay, EnumCount as EnumCountMacro, EnumIter};

use crate::physics::fallingsand::data::pixel_grid::PixelGrid;
use crate::physics::fallingsand::error::GridError;
use crate::physics::fallingsand::util::vectors::{Direction, XyVector};
use crate::physics::util::clock::Clock;

use super::{sand, stone};

/// Identifies a particle by its place in the particle registry
/// This is what the grid stores, never the particle itself
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[display(fmt = "#{}", _0)]
pub struct ParticleId(pub usize);

/// Every kind of particle there is
/// Adding a variant makes the compiler ask for its color and its rule
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro, StrumDisplay,
)]
pub enum ParticleType {
    #[default]
    Sand,
    Stone,
}

impl ParticleType {
    pub fn get_color(&self) -> Color {
        match self {
            ParticleType::Sand => sand::get_color(),
            ParticleType::Stone => stone::get_color(),
        }
    }

    /// How many kinds of particle there are
    pub fn count() -> usize {
        Self::COUNT
    }

    /// The particle type at a given position in the picker
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }

    /// The position of this type in the picker
    pub fn get_index(&self) -> usize {
        Self::iter().position(|kind| kind == *self).unwrap_or_default()
    }
}

/// A single grain in the sandbox
///
/// Particles do not hold on to the grid they live in, every operation that needs
/// it takes the grid as an argument. Its position always mirrors the grid cell
/// holding its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    id: ParticleId,
    pos: XyVector,
    size: u32,
    kind: ParticleType,
    last_processed: Clock,
}

/* Initialization */
impl Particle {
    /// Creates a particle and registers it in the grid at `pos`
    /// Fails without touching the grid if `pos` is outside of it or taken
    pub fn new(
        grid: &mut PixelGrid,
        id: ParticleId,
        pos: XyVector,
        size: u32,
        kind: ParticleType,
    ) -> Result<Self, GridError> {
        grid.place(pos, id)?;
        Ok(Self {
            id,
            pos,
            size,
            kind,
            last_processed: Clock::default(),
        })
    }
}

/* Getters */
impl Particle {
    pub fn get_id(&self) -> ParticleId {
        self.id
    }
    pub fn get_pos(&self) -> XyVector {
        self.pos
    }
    pub fn get_x(&self) -> isize {
        self.pos.x
    }
    pub fn get_y(&self) -> isize {
        self.pos.y
    }
    /// Size of the square this particle is drawn as, in pixels
    pub fn get_size(&self) -> u32 {
        self.size
    }
    pub fn get_type(&self) -> ParticleType {
        self.kind
    }
    pub fn get_color(&self) -> Color {
        self.kind.get_color()
    }
    pub fn get_last_processed(&self) -> Clock {
        self.last_processed
    }
}

/* Movement */
impl Particle {
    /// Move to a new position
    /// The grid moves first, so if it refuses our position stays the same
    pub fn move_to(&mut self, grid: &mut PixelGrid, new_pos: XyVector) -> Result<(), GridError> {
        debug_assert_eq!(
            grid.get(self.pos),
            Ok(Some(self.id)),
            "Particle {} is out of sync with the grid",
            self.id
        );
        grid.move_occupant(self.pos, new_pos)?;
        self.pos = new_pos;
        Ok(())
    }
    pub fn move_left(&mut self, grid: &mut PixelGrid, n: isize) -> Result<(), GridError> {
        self.move_to(grid, self.pos.offset(-n, 0))
    }
    pub fn move_right(&mut self, grid: &mut PixelGrid, n: isize) -> Result<(), GridError> {
        self.move_to(grid, self.pos.offset(n, 0))
    }
    pub fn move_up(&mut self, grid: &mut PixelGrid, n: isize) -> Result<(), GridError> {
        self.move_to(grid, self.pos.offset(0, n))
    }
    pub fn move_down(&mut self, grid: &mut PixelGrid, n: isize) -> Result<(), GridError> {
        self.move_to(grid, self.pos.offset(0, -n))
    }
}

/// Neighborhood checks
/// Each one is true if the neighbor in that direction is taken, or if there is no
/// neighbor there because we are on the edge of the grid. The edge acts as a wall.
impl Particle {
    fn is_blocked(&self, grid: &PixelGrid, direction: Direction) -> bool {
        match grid.get(self.pos.neighbor(direction, 1)) {
            Ok(occupant) => occupant.is_some(),
            Err(_) => true,
        }
    }
    pub fn is_up(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::Up)
    }
    pub fn is_down(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::Down)
    }
    pub fn is_left(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::Left)
    }
    pub fn is_right(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::Right)
    }
    pub fn is_up_left(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::UpLeft)
    }
    pub fn is_up_right(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::UpRight)
    }
    pub fn is_down_left(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::DownLeft)
    }
    pub fn is_down_right(&self, grid: &PixelGrid) -> bool {
        self.is_blocked(grid, Direction::DownRight)
    }
}

/* Processing */
impl Particle {
    /// Apply this particle's rule for one frame
    pub fn update(&mut self, grid: &mut PixelGrid, current_time: Clock) -> Result<(), GridError> {
        // Set last_processed AFTER the rule ran, even if it failed
        let out = match self.kind {
            ParticleType::Sand => sand::process(self, grid),
            ParticleType::Stone => stone::process(self, grid),
        };
        self.last_processed = current_time;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: isize, y: isize) -> XyVector {
        XyVector::new(x, y)
    }

    /// A 20x10 grid with one stone at `at`
    fn grid_with_particle(at: XyVector) -> (PixelGrid, Particle) {
        let mut grid = PixelGrid::new(20, 10).unwrap();
        let particle = Particle::new(&mut grid, ParticleId(0), at, 5, ParticleType::Stone).unwrap();
        (grid, particle)
    }

    mod particle_type {
        use super::*;

        #[test]
        fn test_index_round_trip() {
            for kind in ParticleType::iter() {
                assert_eq!(ParticleType::from_index(kind.get_index()), Some(kind));
            }
            assert_eq!(ParticleType::from_index(ParticleType::count()), None);
        }

        #[test]
        fn test_colors() {
            assert_eq!(ParticleType::Sand.get_color().as_rgba_u8(), [255, 255, 0, 255]);
            assert_ne!(ParticleType::Stone.get_color(), ParticleType::Sand.get_color());
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn test_new_registers_in_grid() {
            let (grid, particle) = grid_with_particle(pos(3, 4));
            assert_eq!(grid.get(pos(3, 4)), Ok(Some(particle.get_id())));
            assert_eq!(particle.get_pos(), pos(3, 4));
            assert_eq!(particle.get_size(), 5);
        }

        #[test]
        fn test_new_on_taken_cell_fails() {
            let (mut grid, _) = grid_with_particle(pos(3, 4));
            let res = Particle::new(&mut grid, ParticleId(1), pos(3, 4), 5, ParticleType::Sand);
            assert_eq!(res, Err(GridError::DestinationOccupied(pos(3, 4))));
            assert_eq!(grid.get(pos(3, 4)), Ok(Some(ParticleId(0))));
        }

        #[test]
        fn test_new_outside_fails() {
            let mut grid = PixelGrid::new(20, 10).unwrap();
            let res = Particle::new(&mut grid, ParticleId(0), pos(20, 0), 5, ParticleType::Sand);
            assert_eq!(res, Err(GridError::OutOfBounds(pos(20, 0))));
            assert_eq!(grid.num_occupied(), 0);
        }
    }

    mod movement {
        use super::*;

        #[test]
        fn test_move_to_keeps_grid_in_sync() {
            let (mut grid, mut particle) = grid_with_particle(pos(3, 4));
            particle.move_to(&mut grid, pos(10, 9)).unwrap();
            assert_eq!(particle.get_pos(), pos(10, 9));
            assert_eq!(grid.get(pos(10, 9)), Ok(Some(particle.get_id())));
            assert_eq!(grid.get(pos(3, 4)), Ok(None));
        }

        #[test]
        fn test_failed_move_keeps_position() {
            let (mut grid, mut particle) = grid_with_particle(pos(3, 4));
            Particle::new(&mut grid, ParticleId(1), pos(3, 5), 5, ParticleType::Stone).unwrap();

            assert!(particle.move_up(&mut grid, 1).is_err());
            assert_eq!(particle.get_pos(), pos(3, 4));

            assert_eq!(
                particle.move_down(&mut grid, 5),
                Err(GridError::DestinationOutOfBounds(pos(3, -1)))
            );
            assert_eq!(particle.get_pos(), pos(3, 4));
            assert_eq!(grid.get(pos(3, 4)), Ok(Some(particle.get_id())));
        }

        macro_rules! test_directional_move {
            ($name:ident, $method:ident, $n:expr, $expected:expr) => {
                #[test]
                fn $name() {
                    let (mut grid, mut particle) = grid_with_particle(pos(5, 5));
                    particle.$method(&mut grid, $n).unwrap();
                    assert_eq!(particle.get_pos(), $expected);
                    assert_eq!(grid.get($expected), Ok(Some(particle.get_id())));
                    assert_eq!(grid.get(pos(5, 5)), Ok(None));
                }
            };
        }

        test_directional_move!(test_move_left_one, move_left, 1, pos(4, 5));
        test_directional_move!(test_move_right_one, move_right, 1, pos(6, 5));
        test_directional_move!(test_move_up_one, move_up, 1, pos(5, 6));
        test_directional_move!(test_move_down_one, move_down, 1, pos(5, 4));
        test_directional_move!(test_move_left_three, move_left, 3, pos(2, 5));
        test_directional_move!(test_move_down_five, move_down, 5, pos(5, 0));
    }

    mod neighbors {
        use super::*;

        #[test]
        fn test_all_open_in_the_middle() {
            let (grid, particle) = grid_with_particle(pos(5, 5));
            assert!(!particle.is_up(&grid));
            assert!(!particle.is_down(&grid));
            assert!(!particle.is_left(&grid));
            assert!(!particle.is_right(&grid));
            assert!(!particle.is_up_left(&grid));
            assert!(!particle.is_up_right(&grid));
            assert!(!particle.is_down_left(&grid));
            assert!(!particle.is_down_right(&grid));
        }

        #[test]
        fn test_bottom_left_corner_is_walled() {
            let (grid, particle) = grid_with_particle(pos(0, 0));
            assert!(particle.is_down(&grid));
            assert!(particle.is_left(&grid));
            assert!(particle.is_down_left(&grid));
            assert!(particle.is_down_right(&grid));
            assert!(particle.is_up_left(&grid));
            assert!(!particle.is_up(&grid));
            assert!(!particle.is_right(&grid));
            assert!(!particle.is_up_right(&grid));
        }

        #[test]
        fn test_top_right_corner_is_walled() {
            let (grid, particle) = grid_with_particle(pos(19, 9));
            assert!(particle.is_up(&grid));
            assert!(particle.is_right(&grid));
            assert!(particle.is_up_left(&grid));
            assert!(particle.is_up_right(&grid));
            assert!(particle.is_down_right(&grid));
            assert!(!particle.is_down(&grid));
            assert!(!particle.is_left(&grid));
            assert!(!particle.is_down_left(&grid));
        }

        #[test]
        fn test_is_down_tracks_the_cell_below() {
            let (mut grid, particle) = grid_with_particle(pos(5, 5));
            assert!(!particle.is_down(&grid));
            Particle::new(&mut grid, ParticleId(1), pos(5, 4), 5, ParticleType::Stone).unwrap();
            assert!(particle.is_down(&grid));
        }

        macro_rules! test_neighbor_taken {
            ($name:ident, $predicate:ident, $dx:expr, $dy:expr) => {
                #[test]
                fn $name() {
                    let (mut grid, particle) = grid_with_particle(pos(5, 5));
                    assert!(!particle.$predicate(&grid));
                    Particle::new(
                        &mut grid,
                        ParticleId(1),
                        pos(5 + $dx, 5 + $dy),
                        5,
                        ParticleType::Stone,
                    )
                    .unwrap();
                    assert!(particle.$predicate(&grid));
                }
            };
        }

        test_neighbor_taken!(test_up_taken, is_up, 0, 1);
        test_neighbor_taken!(test_down_taken, is_down, 0, -1);
        test_neighbor_taken!(test_left_taken, is_left, -1, 0);
        test_neighbor_taken!(test_right_taken, is_right, 1, 0);
        test_neighbor_taken!(test_up_left_taken, is_up_left, -1, 1);
        test_neighbor_taken!(test_up_right_taken, is_up_right, 1, 1);
        test_neighbor_taken!(test_down_left_taken, is_down_left, -1, -1);
        test_neighbor_taken!(test_down_right_taken, is_down_right, 1, -1);
    }
}
