use control::{Commands, HeaterCommand, Temperature, Thresholds, WindowCommand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Heating,
    Holding,
    Idle,
    Venting,
}

impl From<Commands> for Status {
    fn from(commands: Commands) -> Status {
        match (commands.heater, commands.window) {
            (_, WindowCommand::Open) => Status::Venting,
            (Some(HeaterCommand::TurnOn), _) => Status::Heating,
            (Some(HeaterCommand::TurnOff), _) => Status::Idle,
            (None, _) => Status::Holding,
        }
    }
}

/// One line of output per regulation cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub temperature: f32,
    pub lower: Temperature,
    pub upper: Temperature,
    pub heater: Option<HeaterCommand>,
    pub window: WindowCommand,
    pub status: Status,
}

impl CycleReport {
    pub fn new(cycle: u64, temperature: f32, thresholds: &Thresholds, commands: Commands) -> Self {
        CycleReport {
            cycle,
            temperature,
            lower: thresholds.lower(),
            upper: thresholds.upper(),
            heater: commands.heater,
            window: commands.window,
            status: Status::from(commands),
        }
    }
}
