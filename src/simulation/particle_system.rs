use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::simulation::cartesian_plane::CartesianPlane;
use crate::simulation::matrix::MatrixError;
use crate::simulation::parameters::SimulationParameters;
use crate::simulation::particle::{Drawable, Particle};
use crate::simulation::vector2::Vector2;

/// Owns the live particles and drives them through the frame cycle:
/// spawn on click, advance and cull, render survivors in insertion order.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    parameters: SimulationParameters,
    random_source: StdRng,
}

impl ParticleSystem {
    pub fn new(parameters: SimulationParameters) -> Self {
        Self::with_random_source(parameters, StdRng::from_entropy())
    }

    pub fn with_random_source(parameters: SimulationParameters, random_source: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            parameters,
            random_source,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Appends one burst of independently shaped particles at the clicked
    /// pixel position.
    pub fn spawn_burst(
        &mut self,
        cartesian_plane: CartesianPlane,
        click_pixel_position: Vector2,
    ) -> Result<(), MatrixError> {
        for _ in 0..self.parameters.particles_per_click {
            let point_count = self.random_source.gen_range(
                self.parameters.minimum_point_count..=self.parameters.maximum_point_count,
            );
            let particle = Particle::new(
                &mut self.random_source,
                &self.parameters,
                cartesian_plane,
                point_count,
                click_pixel_position,
            )?;
            self.particles.push(particle);
        }

        debug!(
            live_particle_count = self.particles.len(),
            "spawned particle burst"
        );
        Ok(())
    }

    /// Drops expired particles, then advances the survivors.
    ///
    /// The expiry check happens before integration, so a particle whose
    /// lifetime runs out during this pass stays visible until the next one.
    pub fn advance(&mut self, time_step_seconds: f32) -> Result<(), MatrixError> {
        self.particles.retain(|particle| !particle.is_expired());
        for particle in &mut self.particles {
            particle.update(time_step_seconds)?;
        }
        Ok(())
    }

    pub fn render(&self, painter: &egui::Painter) {
        for drawable in self
            .particles
            .iter()
            .map(|particle| particle as &dyn Drawable)
        {
            drawable.render(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::ParticleSystem;
    use crate::simulation::cartesian_plane::CartesianPlane;
    use crate::simulation::parameters::SimulationParameters;
    use crate::simulation::vector2::Vector2;

    fn seeded_system(parameters: SimulationParameters, seed: u64) -> ParticleSystem {
        ParticleSystem::with_random_source(parameters, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn one_click_bursts_into_five_particles_with_point_counts_in_range() {
        let mut system = seeded_system(SimulationParameters::default(), 7);
        let plane = CartesianPlane::new(640.0, 360.0);

        system
            .spawn_burst(plane, Vector2::new(200.0, 300.0))
            .unwrap();

        assert_eq!(system.particles().len(), 5);
        for particle in system.particles() {
            let point_count = particle.vertex_positions().column_count();
            assert!((25..=50).contains(&point_count));
        }
    }

    #[test]
    fn the_same_seed_reproduces_the_same_burst() {
        let plane = CartesianPlane::new(640.0, 360.0);
        let mut first_system = seeded_system(SimulationParameters::default(), 42);
        let mut second_system = seeded_system(SimulationParameters::default(), 42);

        first_system
            .spawn_burst(plane, Vector2::new(150.0, 450.0))
            .unwrap();
        second_system
            .spawn_burst(plane, Vector2::new(150.0, 450.0))
            .unwrap();

        for (first, second) in first_system
            .particles()
            .iter()
            .zip(second_system.particles())
        {
            assert_eq!(first.vertex_positions(), second.vertex_positions());
        }
    }

    #[test]
    fn particles_are_culled_on_the_pass_after_their_lifetime_ends() {
        let parameters = SimulationParameters {
            time_to_live_seconds: 0.05,
            ..SimulationParameters::default()
        };
        let mut system = seeded_system(parameters, 7);
        let plane = CartesianPlane::new(640.0, 360.0);
        system
            .spawn_burst(plane, Vector2::new(640.0, 360.0))
            .unwrap();

        // First pass: still alive going in, updated past expiry.
        system.advance(0.1).unwrap();
        assert_eq!(system.particles().len(), 5);
        assert!(system.particles().iter().all(|particle| particle.is_expired()));

        // Second pass: expired particles drop before integration.
        system.advance(0.1).unwrap();
        assert!(system.particles().is_empty());
    }

    #[test]
    fn advancing_an_empty_system_is_a_no_op() {
        let mut system = seeded_system(SimulationParameters::default(), 7);

        system.advance(0.1).unwrap();

        assert!(system.particles().is_empty());
    }
}
