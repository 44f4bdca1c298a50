use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;
use crate::state::Temperature;

/// Pair of set points the regulator works between.
///
/// `lower <= upper` holds for every value of this type; each setter checks
/// the new value against the other threshold and leaves both untouched on
/// failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdPair")]
pub struct Thresholds {
    // Below this the heater is switched on
    lower: Temperature,

    // Above this the window is opened
    upper: Temperature,
}

#[derive(Deserialize)]
struct ThresholdPair {
    lower: Temperature,
    upper: Temperature,
}

impl TryFrom<ThresholdPair> for Thresholds {
    type Error = ThresholdError;

    fn try_from(pair: ThresholdPair) -> Result<Self, Self::Error> {
        Thresholds::new(pair.lower, pair.upper)
    }
}

impl Thresholds {
    pub fn new(lower: Temperature, upper: Temperature) -> Result<Self, ThresholdError> {
        check(lower, upper)?;
        Ok(Thresholds { lower, upper })
    }

    pub fn lower(&self) -> Temperature {
        self.lower
    }

    pub fn upper(&self) -> Temperature {
        self.upper
    }

    pub fn set_lower(&mut self, value: Temperature) -> Result<(), ThresholdError> {
        check(value, self.upper)?;
        self.lower = value;
        Ok(())
    }

    pub fn set_upper(&mut self, value: Temperature) -> Result<(), ThresholdError> {
        check(self.lower, value)?;
        self.upper = value;
        Ok(())
    }
}

fn check(lower: Temperature, upper: Temperature) -> Result<(), ThresholdError> {
    if lower > upper {
        return Err(ThresholdError::InvalidThreshold { lower, upper });
    }
    Ok(())
}
