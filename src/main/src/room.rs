use std::cell::RefCell;
use std::rc::Rc;

// Fraction of the indoor/outdoor difference lost per cycle
const LEAK_WINDOW_CLOSED: f32 = 0.02;
const LEAK_WINDOW_OPEN: f32 = 0.25;

// Degrees added per cycle while the heater is powered
const HEATER_GAIN: f32 = 0.8;

/// Simulated room the devices act on.
#[derive(Debug, Clone)]
pub struct Room {
    temperature: f32,
    outside_temperature: f32,
    heater_on: bool,
    window_open: bool,
}

pub type SharedRoom = Rc<RefCell<Room>>;

impl Room {
    pub fn new(temperature: f32, outside_temperature: f32) -> Self {
        Room {
            temperature,
            outside_temperature,
            heater_on: false,
            window_open: false,
        }
    }

    pub fn shared(self) -> SharedRoom {
        Rc::new(RefCell::new(self))
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn heater_on(&self) -> bool {
        self.heater_on
    }

    pub fn set_heater(&mut self, on: bool) {
        self.heater_on = on;
    }

    pub fn window_open(&self) -> bool {
        self.window_open
    }

    pub fn set_window(&mut self, open: bool) {
        self.window_open = open;
    }

    /// Advance the room by one measurement interval.
    pub fn step(&mut self) {
        let leak = if self.window_open {
            LEAK_WINDOW_OPEN
        } else {
            LEAK_WINDOW_CLOSED
        };
        self.temperature += (self.outside_temperature - self.temperature) * leak;
        if self.heater_on {
            self.temperature += HEATER_GAIN;
        }
    }
}
