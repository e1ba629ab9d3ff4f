use std::f64::consts::{FRAC_PI_2, PI};

use eframe::egui;
use rand::Rng;

use crate::simulation::cartesian_plane::CartesianPlane;
use crate::simulation::matrix::{Matrix, MatrixError};
use crate::simulation::parameters::SimulationParameters;
use crate::simulation::vector2::Vector2;

/// Something the frame loop can ask to paint itself onto the surface.
pub trait Drawable {
    fn render(&self, painter: &egui::Painter);
}

/// A randomized polygon that rotates, shrinks, and falls until its lifetime
/// runs out.
///
/// The vertex coordinates live in a 2 x point_count matrix, column j holding
/// vertex j's Cartesian (x, y). Every transform goes through the matrix
/// engine: translation is an added 2 x point_count shift matrix, rotation and
/// scaling left-multiply a 2x2 transform.
pub struct Particle {
    vertex_positions: Matrix,
    center_coordinate: Vector2,
    point_count: usize,
    time_to_live_seconds: f32,
    radians_per_second: f32,
    velocity_x: f32,
    velocity_y: f32,
    center_color: egui::Color32,
    outer_color: egui::Color32,
    cartesian_plane: CartesianPlane,
    scale_decay_per_update: f64,
    gravity_pixels_per_second_squared: f32,
}

impl Particle {
    /// Builds a particle at the clicked pixel position.
    ///
    /// The click is converted to Cartesian space once and stored as the
    /// center. Vertices sweep a full arc of random radii from a random start
    /// angle; the angular step is 2*pi / (point_count - 1) so the last vertex
    /// lands on the first and the fan closes. That step requires
    /// `point_count >= 2`.
    pub fn new(
        random_source: &mut impl Rng,
        parameters: &SimulationParameters,
        cartesian_plane: CartesianPlane,
        point_count: usize,
        click_pixel_position: Vector2,
    ) -> Result<Self, MatrixError> {
        if point_count < 2 {
            return Err(MatrixError::InvalidArgument {
                reason: format!("a particle needs at least 2 vertices, got {point_count}"),
            });
        }

        let center_coordinate = cartesian_plane.map_pixel_to_coords(click_pixel_position);

        let radians_per_second =
            random_source.gen_range(0.0..=parameters.maximum_angular_speed_radians);

        let initial_speed = random_source
            .gen_range(parameters.minimum_initial_speed..=parameters.maximum_initial_speed);
        let velocity_x = if random_source.gen_bool(0.5) {
            initial_speed
        } else {
            -initial_speed
        };
        let velocity_y = initial_speed;

        let outer_color = egui::Color32::from_rgb(
            random_source.gen::<u8>(),
            random_source.gen::<u8>(),
            random_source.gen::<u8>(),
        );

        let mut vertex_positions = Matrix::new(2, point_count);
        let mut sweep_angle = random_source.gen_range(0.0..=FRAC_PI_2);
        let angle_step = 2.0 * PI / (point_count - 1) as f64;
        for vertex_index in 0..point_count {
            let radius = random_source
                .gen_range(parameters.minimum_vertex_radius..=parameters.maximum_vertex_radius);
            vertex_positions[(0, vertex_index)] = center_coordinate.x + radius * sweep_angle.cos();
            vertex_positions[(1, vertex_index)] = center_coordinate.y + radius * sweep_angle.sin();
            sweep_angle += angle_step;
        }

        Ok(Self {
            vertex_positions,
            center_coordinate,
            point_count,
            time_to_live_seconds: parameters.time_to_live_seconds,
            radians_per_second,
            velocity_x,
            velocity_y,
            center_color: egui::Color32::WHITE,
            outer_color,
            cartesian_plane,
            scale_decay_per_update: parameters.scale_decay_per_update,
            gravity_pixels_per_second_squared: parameters.gravity_pixels_per_second_squared,
        })
    }

    pub fn time_to_live_seconds(&self) -> f32 {
        self.time_to_live_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.time_to_live_seconds <= 0.0
    }

    pub fn center_coordinate(&self) -> Vector2 {
        self.center_coordinate
    }

    pub fn vertex_positions(&self) -> &Matrix {
        &self.vertex_positions
    }

    /// Moves every vertex and the center by (x_shift, y_shift).
    pub fn translate(&mut self, x_shift: f64, y_shift: f64) -> Result<(), MatrixError> {
        let shift = Matrix::translation(x_shift, y_shift, self.point_count);
        self.vertex_positions = shift.add(&self.vertex_positions)?;
        self.center_coordinate += Vector2::new(x_shift, y_shift);
        Ok(())
    }

    /// Rotates the shape counter-clockwise about its own center.
    ///
    /// The rotation matrix turns points about the Cartesian origin, so the
    /// shape moves to the origin, rotates, and moves back.
    pub fn rotate(&mut self, angle_radians: f64) -> Result<(), MatrixError> {
        let original_center = self.center_coordinate;
        self.translate(-original_center.x, -original_center.y)?;
        self.vertex_positions = Matrix::rotation(angle_radians).multiply(&self.vertex_positions)?;
        self.translate(original_center.x, original_center.y)?;
        Ok(())
    }

    /// Scales the shape about its own center, same origin round trip as
    /// [`Particle::rotate`].
    pub fn scale(&mut self, scale_factor: f64) -> Result<(), MatrixError> {
        let original_center = self.center_coordinate;
        self.translate(-original_center.x, -original_center.y)?;
        self.vertex_positions = Matrix::scaling(scale_factor).multiply(&self.vertex_positions)?;
        self.translate(original_center.x, original_center.y)?;
        Ok(())
    }

    /// Advances the particle by one frame: rotate, then shrink, then move
    /// under gravity, in that order.
    pub fn update(&mut self, time_step_seconds: f32) -> Result<(), MatrixError> {
        self.time_to_live_seconds -= time_step_seconds;

        self.rotate(f64::from(time_step_seconds * self.radians_per_second))?;

        // The shrink factor applies once per update, not per elapsed second.
        self.scale(self.scale_decay_per_update)?;

        let horizontal_shift = self.velocity_x * time_step_seconds;
        self.velocity_y -= self.gravity_pixels_per_second_squared * time_step_seconds;
        let vertical_shift = self.velocity_y * time_step_seconds;
        self.translate(f64::from(horizontal_shift), f64::from(vertical_shift))?;
        Ok(())
    }
}

impl Drawable for Particle {
    /// Paints the polygon as a triangle fan: the center vertex carries the
    /// center color, the outer ring carries the particle's own color.
    fn render(&self, painter: &egui::Painter) {
        let mut fan = egui::Mesh::default();

        let center_pixel = self
            .cartesian_plane
            .map_coords_to_pixel(self.center_coordinate);
        fan.colored_vertex(
            egui::pos2(center_pixel.x as f32, center_pixel.y as f32),
            self.center_color,
        );

        for vertex_index in 0..self.point_count {
            let cartesian_position = Vector2::new(
                self.vertex_positions[(0, vertex_index)],
                self.vertex_positions[(1, vertex_index)],
            );
            let pixel_position = self.cartesian_plane.map_coords_to_pixel(cartesian_position);
            fan.colored_vertex(
                egui::pos2(pixel_position.x as f32, pixel_position.y as f32),
                self.outer_color,
            );
        }

        for outer_index in 1..self.point_count as u32 {
            fan.add_triangle(0, outer_index, outer_index + 1);
        }

        painter.add(egui::Shape::mesh(fan));
    }
}
