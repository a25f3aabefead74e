mod settings;    // brings `settings.rs` in as `crate::settings`
mod simulation;  // brings `simulation.rs` in as `crate::simulation`

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};
use unicycle_kinematics::UnicycleModel;

use simulation::Simulation;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Unicycle rollout runner started.");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings::DEFAULT_CONFIG_PATH.to_string());
    let config = settings::load_config(&path)
        .with_context(|| format!("failed to load configuration from {path}"))?;

    let model = UnicycleModel::with_epsilon(config.model.epsilon)
        .context("invalid [model] configuration")?;

    let trajectory = Simulation::new(model, config.simulation).run();
    info!(states = trajectory.len(), "Runner finished.");

    Ok(())
}
