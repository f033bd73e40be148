//! A simple 2d grid type
//! Backed by an ndarray in standard (row major) layout, so the cell at (x, y)
//! lives at flat index `y * width + x`.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::vectors::XyVector;

/// A simple 2d grid type
#[derive(Clone, Debug)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(ndarray::Array2::from_elem((height, width), value))
    }
    /// Create a new grid with the given width and height, and fill it with default values
    pub fn new_empty(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        Self(ndarray::Array2::default((height, width)))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.ncols()
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.nrows()
    }
    /// Get the total size of the grid
    pub fn total_size(&self) -> usize {
        self.0.len()
    }
    /// Get the data as an ndarray
    pub fn get_data(&self) -> &ndarray::Array2<T> {
        &self.0
    }
}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// True if the coordinate lands on a cell of this grid
    pub fn contains(&self, idx: XyVector) -> bool {
        idx.x >= 0
            && idx.y >= 0
            && (idx.x as usize) < self.get_width()
            && (idx.y as usize) < self.get_height()
    }
    /// Gets the value at the given coordinate, or None if it is outside of the grid
    pub fn checked_get(&self, idx: XyVector) -> Option<&T> {
        self.to_ndarray_idx(idx).map(|coord| &self.0[coord])
    }
    /// Gets the value at the given coordinate mutably, or None if it is outside of the grid
    pub fn checked_get_mut(&mut self, idx: XyVector) -> Option<&mut T> {
        self.to_ndarray_idx(idx).map(|coord| &mut self.0[coord])
    }
    /// Swaps in the replacement and gives you ownership of the original value
    /// None if the coordinate is outside of the grid, in which case nothing changes
    pub fn checked_replace(&mut self, idx: XyVector, replacement: T) -> Option<T> {
        self.checked_get_mut(idx)
            .map(|cell| std::mem::replace(cell, replacement))
    }
    /// Overwrite every cell with the given value
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }
    /// Transforms the coordinate to the ndarray coordinate system, rows first
    fn to_ndarray_idx(&self, idx: XyVector) -> Option<[usize; 2]> {
        if self.contains(idx) {
            Some([idx.y as usize, idx.x as usize])
        } else {
            None
        }
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Iterate over the grid in flat index order, bottom row first
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.0.iter()
    }

    /// Iterate over the grid along with the position of each cell
    pub fn indexed_iter(&self) -> impl Iterator<Item = (XyVector, &T)> {
        self.0
            .indexed_iter()
            .map(|((y, x), value)| (XyVector::new(x as isize, y as isize), value))
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = ndarray::iter::Iter<'a, T, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
