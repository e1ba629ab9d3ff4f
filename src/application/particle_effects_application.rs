use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use crate::simulation::cartesian_plane::CartesianPlane;
use crate::simulation::parameters::SimulationParameters;
use crate::simulation::particle_system::ParticleSystem;
use crate::simulation::self_check;
use crate::simulation::vector2::Vector2;

/// The frame loop: polls clicks into particle bursts, advances the system by
/// the elapsed frame time, and paints every survivor onto a black canvas.
pub struct ParticleEffectsApplication {
    particle_system: ParticleSystem,
    self_check_completed: bool,
}

impl ParticleEffectsApplication {
    pub fn new(_creation_context: &eframe::CreationContext<'_>) -> Self {
        Self {
            particle_system: ParticleSystem::new(SimulationParameters::default()),
            self_check_completed: false,
        }
    }
}

impl eframe::App for ParticleEffectsApplication {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        if context.input(|input_state| input_state.key_pressed(egui::Key::Escape)) {
            context.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let time_step_seconds = context.input(|input_state| input_state.stable_dt);

        egui::TopBottomPanel::top("status_panel").show(context, |user_interface| {
            user_interface.horizontal(|user_interface| {
                user_interface.label("Click anywhere to burst particles, Escape quits");
                user_interface.separator();
                user_interface.label(format!(
                    "{} live particles",
                    self.particle_system.particles().len()
                ));
            });
        });

        egui::CentralPanel::default().show(context, |user_interface| {
            let available_space = user_interface.available_size();
            let (response, painter) =
                user_interface.allocate_painter(available_space, egui::Sense::click());

            let cartesian_plane = CartesianPlane::new(
                f64::from(response.rect.center().x),
                f64::from(response.rect.center().y),
            );

            // The surface geometry is only known once the first frame lays
            // out, so the self-check runs here rather than at construction.
            if !self.self_check_completed {
                self.self_check_completed = true;
                info!("running the engine self-check");
                let mut random_source = StdRng::from_entropy();
                let report = self_check::run(cartesian_plane, &mut random_source);
                info!(
                    passed = report.passed_check_count,
                    total = report.total_check_count,
                    "self-check complete"
                );
            }

            if response.clicked() {
                if let Some(click_position) = response.interact_pointer_pos() {
                    let click_pixel_position = Vector2::new(
                        f64::from(click_position.x),
                        f64::from(click_position.y),
                    );
                    if let Err(spawn_error) =
                        self.particle_system.spawn_burst(cartesian_plane, click_pixel_position)
                    {
                        error!(%spawn_error, "spawning a particle burst failed");
                        context.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
            }

            if let Err(advance_error) = self.particle_system.advance(time_step_seconds) {
                error!(%advance_error, "advancing the simulation failed");
                context.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);
            self.particle_system.render(&painter);
        });

        context.request_repaint();
    }
}
