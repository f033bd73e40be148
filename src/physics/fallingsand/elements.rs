//! This module contains all the particles that are used in the game.

pub mod element;
pub mod movement;
pub mod sand;
pub mod stone;
