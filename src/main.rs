mod application;
mod simulation;

use application::particle_effects_application::ParticleEffectsApplication;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        "Polygon Particles",
        native_options,
        Box::new(|creation_context| Ok(Box::new(ParticleEffectsApplication::new(creation_context)))),
    )
}
