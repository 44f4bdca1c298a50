#![no_std]

mod config;
mod device;
mod error;
mod regulator;
mod state;

pub use config::Thresholds;
pub use device::{Heater, TemperatureSensor, Window};
pub use error::ThresholdError;
pub use regulator::Regulator;
pub use state::{Commands, HeaterCommand, Temperature, WindowCommand};

impl Commands {
    pub fn from_reading(thresholds: &Thresholds, temperature: Temperature) -> Commands {
        // Too hot, let some heat out
        if temperature > thresholds.upper() {
            return Commands {
                heater: Some(HeaterCommand::TurnOff),
                window: WindowCommand::Open,
            };
        }

        // Too cold, start heating
        if temperature < thresholds.lower() {
            return Commands {
                heater: Some(HeaterCommand::TurnOn),
                window: WindowCommand::Close,
            };
        }

        // Sitting on either threshold
        if temperature == thresholds.lower() || temperature == thresholds.upper() {
            return Commands {
                heater: Some(HeaterCommand::TurnOff),
                window: WindowCommand::Close,
            };
        }

        Commands {
            heater: None,
            window: WindowCommand::Close,
        }
    }
}
