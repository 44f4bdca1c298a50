//! Capabilities the regulator needs from the outside world.
//!
//! Implementations may drive real hardware or a simulation. Commands are
//! idempotent: turning on a heater that is already on is not an error.

use crate::state::Temperature;

pub trait TemperatureSensor {
    fn get_temperature(&mut self) -> Temperature;
}

pub trait Heater {
    fn turn_on(&mut self);
    fn turn_off(&mut self);
}

pub trait Window {
    fn open(&mut self);
    fn close(&mut self);
}
