/// Tunables for particle spawning and integration, threaded through the
/// simulation explicitly so tests can pin them down.
#[derive(Clone, Copy, Debug)]
pub struct SimulationParameters {
    pub time_to_live_seconds: f32,
    /// Shrink factor applied once per update, not per elapsed second.
    pub scale_decay_per_update: f64,
    pub gravity_pixels_per_second_squared: f32,
    pub minimum_initial_speed: f32,
    pub maximum_initial_speed: f32,
    pub minimum_vertex_radius: f64,
    pub maximum_vertex_radius: f64,
    pub maximum_angular_speed_radians: f32,
    pub particles_per_click: usize,
    pub minimum_point_count: usize,
    pub maximum_point_count: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            time_to_live_seconds: 5.0,
            scale_decay_per_update: 0.999,
            gravity_pixels_per_second_squared: 1000.0,
            minimum_initial_speed: 100.0,
            maximum_initial_speed: 500.0,
            minimum_vertex_radius: 20.0,
            maximum_vertex_radius: 80.0,
            maximum_angular_speed_radians: std::f32::consts::PI,
            particles_per_click: 5,
            minimum_point_count: 25,
            maximum_point_count: 50,
        }
    }
}
