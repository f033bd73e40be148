//! This module contains all the GUI related code.
//! Things that are drawn to via screen coordinates rather than world coordinates.

pub mod brush;
pub mod particle_picker;
pub mod stats_window;
