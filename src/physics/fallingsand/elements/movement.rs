//! Movement of particles in the world.
//! Useful for common or default behaviors of particles in the world.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The movement of solids
pub mod solid;
