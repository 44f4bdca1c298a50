use log::{debug, warn};

use crate::config::Thresholds;
use crate::device::{Heater, TemperatureSensor, Window};
use crate::error::ThresholdError;
use crate::state::{Commands, HeaterCommand, Temperature, WindowCommand};

/// Keeps a room between two thresholds using a heater and a window.
///
/// The regulator carries no memory between cycles apart from its thresholds,
/// so every call to [`Regulator::regulate`] is decided from the current
/// reading alone.
pub struct Regulator<S, H, W> {
    sensor: S,
    heater: H,
    window: W,
    thresholds: Thresholds,
}

impl<S, H, W> Regulator<S, H, W>
where
    S: TemperatureSensor,
    H: Heater,
    W: Window,
{
    pub fn new(sensor: S, heater: H, window: W, thresholds: Thresholds) -> Self {
        Regulator {
            sensor,
            heater,
            window,
            thresholds,
        }
    }

    /// Run one control cycle.
    ///
    /// Reads the sensor once, then sends at most one heater command followed
    /// by exactly one window command. Returns what was sent.
    pub fn regulate(&mut self) -> Commands {
        let temperature = self.sensor.get_temperature();
        let commands = Commands::from_reading(&self.thresholds, temperature);
        debug!(
            "Temperature {} against {}..={}: {:?}",
            temperature,
            self.thresholds.lower(),
            self.thresholds.upper(),
            commands
        );

        match commands.heater {
            Some(HeaterCommand::TurnOn) => self.heater.turn_on(),
            Some(HeaterCommand::TurnOff) => self.heater.turn_off(),
            None => {}
        }

        match commands.window {
            WindowCommand::Open => self.window.open(),
            WindowCommand::Close => self.window.close(),
        }

        commands
    }

    pub fn lower(&self) -> Temperature {
        self.thresholds.lower()
    }

    pub fn upper(&self) -> Temperature {
        self.thresholds.upper()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn set_lower(&mut self, value: Temperature) -> Result<(), ThresholdError> {
        self.thresholds
            .set_lower(value)
            .inspect_err(|err| warn!("Rejected lower threshold: {}", err))
    }

    pub fn set_upper(&mut self, value: Temperature) -> Result<(), ThresholdError> {
        self.thresholds
            .set_upper(value)
            .inspect_err(|err| warn!("Rejected upper threshold: {}", err))
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn heater(&self) -> &H {
        &self.heater
    }

    pub fn heater_mut(&mut self) -> &mut H {
        &mut self.heater
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn into_parts(self) -> (S, H, W, Thresholds) {
        (self.sensor, self.heater, self.window, self.thresholds)
    }
}
