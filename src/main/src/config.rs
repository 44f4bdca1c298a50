use core::time::Duration;

use anyhow::{Context, Result};
use control::{Temperature, Thresholds};

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default(1000)]
    measurement_interval_ms: u64,
    #[default(60)]
    cycles: u64,
    #[default(25)]
    lower_threshold: i32,
    #[default(28)]
    upper_threshold: i32,
    #[default(20)]
    initial_temperature: i32,
    #[default(10)]
    outside_temperature: i32,
}

#[derive(Debug)]
pub struct Config {
    pub measurement_interval: Duration,
    // Zero keeps the loop running until the process is stopped
    pub cycles: u64,
    pub thresholds: Thresholds,
    pub initial_temperature: f32,
    pub outside_temperature: f32,
}

impl Config {
    pub fn read() -> Result<Self> {
        Config::try_from(TOML_CONFIG)
    }
}

impl TryFrom<TomlConfig> for Config {
    type Error = anyhow::Error;

    fn try_from(config: TomlConfig) -> Result<Self> {
        let thresholds = Thresholds::new(
            Temperature::new(config.lower_threshold),
            Temperature::new(config.upper_threshold),
        )
        .context("Configured thresholds are out of order")?;

        Ok(Config {
            measurement_interval: Duration::from_millis(config.measurement_interval_ms),
            cycles: config.cycles,
            thresholds,
            initial_temperature: config.initial_temperature as f32,
            outside_temperature: config.outside_temperature as f32,
        })
    }
}
