//! Falling sand physics engine.
//! A grid of cells, the particles living in them, and the rules that move them.

pub mod config;
pub mod data;
pub mod elements;
pub mod error;
pub mod util;
