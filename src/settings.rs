use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};
use unicycle_kinematics::{ControlInput, DEFAULT_EPSILON, State};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub model: ModelSettings,
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        ModelSettings {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSettings {
    /// Time step in seconds.
    pub dt: f64,
    #[serde(default)]
    pub realtime: bool,
    #[serde(default)]
    pub wrap_heading: bool,
    #[serde(default)]
    pub initial_state: State,
    #[serde(default)]
    pub schedule: Vec<Segment>,
}

/// A constant command held for a number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Segment {
    pub v: f64,
    pub omega: f64,
    pub steps: u32,
}

impl Segment {
    pub fn control(&self) -> ControlInput {
        ControlInput::new(self.v, self.omega)
    }
}

pub fn load_config(path: &str) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
