//! This module contains all the top level bundles.
//! These are the things that live in the bevy world.

pub mod sandbox;
