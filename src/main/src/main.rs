use std::thread;

use anyhow::Result;
use control::{Regulator, Thresholds};
use log::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod heating;
mod measurement;
mod room;
mod status;
mod window;

use config::Config;
use heating::RoomHeater;
use measurement::RoomThermometer;
use room::{Room, SharedRoom};
use status::CycleReport;
use window::RoomWindow;

// Largest thermometer error in whole degrees
const SENSOR_NOISE: i32 = 1;

type RoomRegulator = Regulator<RoomThermometer, RoomHeater, RoomWindow>;

fn room_regulator(room: &SharedRoom, noise: i32, thresholds: Thresholds) -> RoomRegulator {
    Regulator::new(
        RoomThermometer::new(room.clone(), noise),
        RoomHeater::new(room.clone()),
        RoomWindow::new(room.clone()),
        thresholds,
    )
}

fn run_cycle(cycle: u64, room: &SharedRoom, regulator: &mut RoomRegulator) -> CycleReport {
    let commands = regulator.regulate();
    let temperature = room.borrow().temperature();
    CycleReport::new(cycle, temperature, &regulator.thresholds(), commands)
}

fn main() -> Result<()> {
    // Records from the `log` facade are forwarded to the subscriber
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "environment_control=info,control=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::read()?;
    info!("Starting with {:?}", config);

    let room = Room::new(config.initial_temperature, config.outside_temperature).shared();
    let mut regulator = room_regulator(&room, SENSOR_NOISE, config.thresholds);

    let mut cycle = 0;
    loop {
        cycle += 1;
        let report = run_cycle(cycle, &room, &mut regulator);
        info!("{}", serde_json::to_string(&report)?);

        if config.cycles != 0 && cycle >= config.cycles {
            break;
        }

        thread::sleep(config.measurement_interval);
        room.borrow_mut().step();
    }

    info!("Finished after {} cycles", cycle);
    Ok(())
}
