//! A falling sand sandbox.
//! The physics module holds the engine, the entities and gui modules
//! put it on screen with bevy.

pub mod entities;
pub mod gui;
pub mod physics;
