//! The occupancy grid
//! Records which particle, if any, sits in each cell of the sandbox.
//! This is the authority on where things are, particles only mirror it.

use bevy::log::trace;

use crate::physics::fallingsand::elements::element::ParticleId;
use crate::physics::fallingsand::error::GridError;
use crate::physics::fallingsand::util::grid::Grid;
use crate::physics::fallingsand::util::vectors::XyVector;

/// A fixed size 2D grid of cells, each holding at most one particle
#[derive(Clone, Debug)]
pub struct PixelGrid {
    grid: Grid<Option<ParticleId>>,
}

/* Initialization */
impl PixelGrid {
    /// Creates a grid of `cols` x `rows` empty cells
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::ZeroSized { cols, rows });
        }
        Ok(Self {
            grid: Grid::new_fill(cols, rows, None),
        })
    }
}

/* Getters */
impl PixelGrid {
    pub fn get_cols(&self) -> usize {
        self.grid.get_width()
    }
    pub fn get_rows(&self) -> usize {
        self.grid.get_height()
    }
    /// Number of cells, occupied or not
    pub fn total_size(&self) -> usize {
        self.grid.total_size()
    }
    pub fn contains(&self, pos: XyVector) -> bool {
        self.grid.contains(pos)
    }

    /// The occupant at the given position, None if the cell is empty
    pub fn get(&self, pos: XyVector) -> Result<Option<ParticleId>, GridError> {
        self.grid
            .checked_get(pos)
            .copied()
            .ok_or(GridError::OutOfBounds(pos))
    }

    pub fn is_occupied(&self, pos: XyVector) -> Result<bool, GridError> {
        Ok(self.get(pos)?.is_some())
    }

    /// Count the occupied cells
    pub fn num_occupied(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_some()).count()
    }

    /// Every occupied cell and who is in it, bottom row first
    pub fn iter_occupied(&self) -> impl Iterator<Item = (XyVector, ParticleId)> + '_ {
        self.grid
            .indexed_iter()
            .filter_map(|(pos, cell)| cell.map(|id| (pos, id)))
    }
}

/* Modifiers */
impl PixelGrid {
    /// Put a new occupant into an empty cell
    pub fn place(&mut self, pos: XyVector, id: ParticleId) -> Result<(), GridError> {
        let cell = self
            .grid
            .checked_get_mut(pos)
            .ok_or(GridError::OutOfBounds(pos))?;
        if cell.is_some() {
            return Err(GridError::DestinationOccupied(pos));
        }
        *cell = Some(id);
        Ok(())
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.grid.fill(None);
    }

    /// Move the occupant at `start` to `end`
    /// Bounds are checked before occupancy, the destination before the source.
    /// Moving a cell onto itself is a no-op.
    /// On any error the grid is left exactly as it was.
    pub fn move_occupant(&mut self, start: XyVector, end: XyVector) -> Result<(), GridError> {
        if !self.contains(end) {
            return Err(GridError::DestinationOutOfBounds(end));
        }
        if !self.contains(start) {
            return Err(GridError::SourceOutOfBounds(start));
        }
        if start == end {
            return Ok(());
        }
        if self.is_occupied(end)? {
            return Err(GridError::DestinationOccupied(end));
        }
        let occupant = self
            .grid
            .checked_replace(start, None)
            .ok_or(GridError::SourceOutOfBounds(start))?;
        match occupant {
            Some(id) => {
                self.grid.checked_replace(end, Some(id));
                trace!("Moved {:?} from {} to {}", id, start, end);
                Ok(())
            }
            None => Err(GridError::SourceEmpty(start)),
        }
    }
}
