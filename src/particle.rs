// Simple particle struct to keep track of individual position, velocity, and size

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    /// Position in `[0, width) x [0, height)`, velocity in `[-max_speed, max_speed]`
    /// per axis, radius in `[min_radius, max_radius]`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // Moves first, then checks bounds against the new position. A particle that
    // crosses an edge is drawn past it for one frame and heads back on the next.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_stays_in_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = FieldConfig::default();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0].abs() <= 0.25 && p.vel[1].abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius <= 3.0);
        }
    }

    #[test]
    fn random_on_empty_surface_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::random(&mut rng, 0.0, 0.0, &FieldConfig::default());
        assert_eq!(p.pos, [0.0, 0.0]);
    }

    #[test]
    fn reflects_after_crossing_right_edge() {
        let mut p = Particle::new(799.9, 300.0, 0.25, 0.1, 2.0);
        p.step(800.0, 600.0);
        assert!(p.vel[0] < 0.0);
        assert_eq!(p.vel[0].abs(), 0.25);
        assert!(p.pos[0] > 800.0);
        assert!(p.pos[0] - 800.0 <= 0.25);
        // y untouched
        assert_eq!(p.vel[1], 0.1);

        p.step(800.0, 600.0);
        assert!(p.pos[0] <= 800.0);
    }

    #[test]
    fn reflects_each_axis_independently() {
        let mut p = Particle::new(0.1, 0.1, -0.2, -0.2, 1.0);
        p.step(100.0, 100.0);
        assert_eq!(p.vel, [0.2, 0.2]);

        let mut p = Particle::new(0.1, 50.0, -0.2, 0.2, 1.0);
        p.step(100.0, 100.0);
        assert_eq!(p.vel, [0.2, 0.2]);
    }

    #[test]
    fn edge_itself_is_inside() {
        let mut p = Particle::new(99.75, 50.0, 0.25, 0.0, 1.0);
        p.step(100.0, 100.0);
        assert_eq!(p.pos[0], 100.0);
        assert_eq!(p.vel[0], 0.25);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Particle::new(0.0, 0.0, 0.0, 0.0, 1.0);
        let b = Particle::new(3.0, 4.0, 0.0, 0.0, 1.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
