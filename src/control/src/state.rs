use core::fmt;

use serde::{Deserialize, Serialize};

// Temperature in whole degrees celcius
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(i32);

impl Temperature {
    pub fn new(value: i32) -> Self {
        Self(value)
    }
}

impl From<Temperature> for i32 {
    fn from(value: Temperature) -> i32 {
        value.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum HeaterCommand {
    TurnOn,
    TurnOff,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WindowCommand {
    Open,
    Close,
}

/// Commands issued by a single regulation cycle.
///
/// A cycle always moves the window, but may leave the heater alone.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Commands {
    pub heater: Option<HeaterCommand>,
    pub window: WindowCommand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_conversions() {
        let temperature = Temperature::new(-4);
        assert_eq!(i32::from(temperature), -4);
        assert!(temperature < Temperature::new(0));
    }
}
