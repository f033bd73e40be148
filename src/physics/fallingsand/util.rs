//! Useful functions and structs for fallingsand calculations.

pub mod grid;
pub mod image;
pub mod vectors;
