use control::{Temperature, TemperatureSensor};
use rand::Rng;

use crate::room::SharedRoom;

/// Thermometer reading the simulated room in whole degrees.
pub struct RoomThermometer {
    room: SharedRoom,
    // Largest error added to a reading, in degrees either way
    noise: i32,
}

impl RoomThermometer {
    pub fn new(room: SharedRoom, noise: i32) -> Self {
        RoomThermometer { room, noise }
    }
}

impl TemperatureSensor for RoomThermometer {
    fn get_temperature(&mut self) -> Temperature {
        let actual = self.room.borrow().temperature().round() as i32;
        let error = if self.noise > 0 {
            rand::thread_rng().gen_range(-self.noise..=self.noise)
        } else {
            0
        };
        Temperature::new(actual.saturating_add(error))
    }
}
