//! Physics helpers that are not specific to falling sand.

pub mod clock;
