// The particle field: a fixed set of drifting particles inside a width x height box,
// drawn each frame with a translucent wash for trails and proximity links between
// any two particles closer than the link distance.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::DrawSurface;
use rand::Rng;
use tracing::{debug, info};

/// Alpha of a link between two particles `distance` apart. Linear from
/// `max_alpha` at 0 down to 0 at `threshold` and beyond.
pub fn link_alpha(distance: f64, threshold: f64, max_alpha: f64) -> f64 {
    if distance < threshold {
        max_alpha * (1.0 - distance / threshold)
    } else {
        0.0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub pairs_checked: usize,
    pub links_drawn: usize,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, width, height, &config))
            .collect();
        info!(count = config.particle_count, width, height, "Particle field created");
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    /// Builds a field from existing particles, mostly useful for scripted scenes.
    pub fn from_particles(
        width: f64,
        height: f64,
        particles: Vec<Particle>,
        config: FieldConfig,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // Only the bounds change. Particles outside a shrunken box keep going until
    // their next step reflects them.
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "Particle field resized");
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// Draws one frame: wash, move and draw every particle, then links.
    pub fn frame<D: DrawSurface + ?Sized>(&mut self, surface: &mut D) -> FrameStats {
        surface.fill_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            self.config.background,
            self.config.trail_alpha,
        );

        self.step();
        let config = &self.config;
        for particle in &self.particles {
            surface.fill_circle(
                particle.pos,
                particle.radius,
                config.accent,
                config.particle_alpha,
            );
        }

        self.draw_links(surface)
    }

    fn draw_links<D: DrawSurface + ?Sized>(&self, surface: &mut D) -> FrameStats {
        let config = &self.config;
        let mut stats = FrameStats::default();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                stats.pairs_checked += 1;
                let distance = a.distance_to(b);
                if distance < config.link_distance {
                    let alpha = link_alpha(distance, config.link_distance, config.link_max_alpha);
                    surface.stroke_line(a.pos, b.pos, config.link_width, config.accent, alpha);
                    stats.links_drawn += 1;
                }
            }
        }
        stats
    }
}
