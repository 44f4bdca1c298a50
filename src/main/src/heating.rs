use control::{Heater, HeaterCommand};
use log::*;

use crate::room::SharedRoom;

pub struct RoomHeater {
    room: SharedRoom,
}

impl RoomHeater {
    pub fn new(room: SharedRoom) -> Self {
        RoomHeater { room }
    }

    fn switch_heating(&mut self, command: HeaterCommand) {
        let mut room = self.room.borrow_mut();
        match (command, room.heater_on()) {
            (HeaterCommand::TurnOn, false) => {
                info!("Turning on heating output");
                room.set_heater(true);
            }
            (HeaterCommand::TurnOff, true) => {
                info!("Turning off heating output");
                room.set_heater(false);
            }
            (desired_state, _) => {
                debug!("Heating is already in desired state {:?}", desired_state);
            }
        }
    }
}

impl Heater for RoomHeater {
    fn turn_on(&mut self) {
        self.switch_heating(HeaterCommand::TurnOn);
    }

    fn turn_off(&mut self) {
        self.switch_heating(HeaterCommand::TurnOff);
    }
}
