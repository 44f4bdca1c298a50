use control::{Window, WindowCommand};
use log::*;

use crate::room::SharedRoom;

pub struct RoomWindow {
    room: SharedRoom,
}

impl RoomWindow {
    pub fn new(room: SharedRoom) -> Self {
        RoomWindow { room }
    }

    fn move_window(&mut self, command: WindowCommand) {
        let mut room = self.room.borrow_mut();
        match (command, room.window_open()) {
            (WindowCommand::Open, false) => {
                info!("Opening window");
                room.set_window(true);
            }
            (WindowCommand::Close, true) => {
                info!("Closing window");
                room.set_window(false);
            }
            (desired_state, _) => {
                debug!("Window is already in desired state {:?}", desired_state);
            }
        }
    }
}

impl Window for RoomWindow {
    fn open(&mut self) {
        self.move_window(WindowCommand::Open);
    }

    fn close(&mut self) {
        self.move_window(WindowCommand::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    #[test]
    fn test_window_moves_room() {
        let room = Room::new(20.0, 10.0).shared();
        let mut window = RoomWindow::new(room.clone());

        window.open();
        window.open();
        assert!(room.borrow().window_open());

        window.close();
        assert!(!room.borrow().window_open());
    }
}
