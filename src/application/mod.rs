pub mod particle_effects_application;
