//! The ordered list of every live particle.
//! The order particles were created in is the order they are processed in, and
//! since each particle sees the moves of the ones before it, that order shows up
//! in how piles settle.

use crate::physics::fallingsand::data::pixel_grid::PixelGrid;
use crate::physics::fallingsand::elements::element::{Particle, ParticleId};
use crate::physics::fallingsand::error::GridError;
use crate::physics::util::clock::Clock;

/// Owns every particle, in creation order
#[derive(Default, Debug, Clone)]
pub struct ParticleRegistry {
    particles: Vec<Particle>,
}

/* Getters */
impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    /// The id the next appended particle must have
    pub fn next_id(&self) -> ParticleId {
        ParticleId(self.particles.len())
    }
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0)
    }
    /// Read only iteration, in processing order
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

impl<'a> IntoIterator for &'a ParticleRegistry {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/* Modifiers */
impl ParticleRegistry {
    /// Add a particle to the end of the processing order
    /// Does not touch the grid, the particle registered itself there when it was built.
    /// Only `Simulation::spawn` builds particles with the right id, so this stays in the crate.
    pub(crate) fn append(&mut self, particle: Particle) -> ParticleId {
        debug_assert_eq!(
            particle.get_id(),
            self.next_id(),
            "Particles must be appended in id order"
        );
        let id = particle.get_id();
        self.particles.push(particle);
        id
    }
}

/// Handle processing
impl ParticleRegistry {
    /// Run every particle's rule once, in creation order
    pub fn update_all(&mut self, grid: &mut PixelGrid, current_time: Clock) -> Result<(), GridError> {
        for particle in self.particles.iter_mut() {
            debug_assert!(
                particle.get_last_processed().get_current_frame()
                    < current_time.get_current_frame(),
                "Particle {} was already processed this frame",
                particle.get_id()
            );
            particle.update(grid, current_time)?;
        }
        Ok(())
    }
}
