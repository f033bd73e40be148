//! The whole sandbox in one place.
//! The grid, the particles and the clock always travel together so that
//! nothing can touch one of them while another is mid update.

use std::time::Duration;

use bevy::log::{debug, info};

use crate::physics::fallingsand::config::SimulationConfig;
use crate::physics::fallingsand::data::particle_registry::ParticleRegistry;
use crate::physics::fallingsand::data::pixel_grid::PixelGrid;
use crate::physics::fallingsand::elements::element::{Particle, ParticleId, ParticleType};
use crate::physics::fallingsand::error::{ConfigError, GridError};
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::XyVector;
use crate::physics::util::clock::Clock;

/// The state of a running sandbox
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    grid: PixelGrid,
    particles: ParticleRegistry,
    clock: Clock,
}

/* Initialization */
impl Simulation {
    /// An empty sandbox sized from the config
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let grid = PixelGrid::new(config.get_cols(), config.get_rows())?;
        info!(
            "Created a {}x{} sandbox",
            grid.get_cols(),
            grid.get_rows()
        );
        Ok(Self {
            config,
            grid,
            particles: ParticleRegistry::new(),
            clock: Clock::new(),
        })
    }

    /// Throw away every particle and start over with the same config
    pub fn reset(&mut self) {
        self.grid.clear();
        self.particles = ParticleRegistry::new();
        self.clock = Clock::new();
        info!("Reset the sandbox");
    }
}

/* Getters */
impl Simulation {
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }
    pub fn get_grid(&self) -> &PixelGrid {
        &self.grid
    }
    pub fn get_particles(&self) -> &ParticleRegistry {
        &self.particles
    }
    pub fn get_clock(&self) -> Clock {
        self.clock
    }
}

/* Placement */
impl Simulation {
    /// Create a particle at `pos`, in both the grid and the registry
    /// On error neither of them changes
    pub fn spawn(&mut self, kind: ParticleType, pos: XyVector) -> Result<ParticleId, GridError> {
        let particle = Particle::new(
            &mut self.grid,
            self.particles.next_id(),
            pos,
            self.config.get_pixel_size(),
            kind,
        )?;
        Ok(self.particles.append(particle))
    }

    /// Like spawn, but clicking a taken or off screen cell is not a mistake,
    /// it just does nothing
    pub fn try_place(&mut self, kind: ParticleType, pos: XyVector) -> Option<ParticleId> {
        match self.spawn(kind, pos) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!("Not placing {}: {}", kind, err);
                None
            }
        }
    }
}

/* Processing */
impl Simulation {
    /// Advance the sandbox by one frame
    pub fn tick(&mut self, delta: Duration) -> Result<(), GridError> {
        self.clock.update(delta);
        self.particles.update_all(&mut self.grid, self.clock)
    }
}

/* Drawing */
impl Simulation {
    /// One pixel per cell, top row first, empty cells transparent
    pub fn get_texture(&self) -> RawImage {
        let rows = self.grid.get_rows();
        let mut out = RawImage::new_transparent(self.grid.get_cols(), rows);
        for particle in self.particles.iter() {
            let pos = particle.get_pos();
            if !self.grid.contains(pos) {
                continue;
            }
            let row = rows - 1 - pos.y as usize;
            out.set_pixel(pos.x as usize, row, particle.get_color().as_rgba_u8());
        }
        out
    }
}
