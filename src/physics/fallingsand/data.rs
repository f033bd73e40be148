//! The data module contains the data structures for the falling sand physics engine.
//! These are where the grid and the particles are actually stored.

pub mod particle_registry;
pub mod pixel_grid;
pub mod simulation;
