#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use control::{
    Heater, HeaterCommand, Regulator, Temperature, TemperatureSensor, Thresholds, Window,
    WindowCommand,
};

// Every call made on any fake, in order
pub type CallLog = Rc<RefCell<Vec<&'static str>>>;

#[derive(Debug, Default)]
pub struct FakeSensor {
    pub temperature: i32,
    pub reads: usize,
    pub log: CallLog,
}

impl TemperatureSensor for FakeSensor {
    fn get_temperature(&mut self) -> Temperature {
        self.reads += 1;
        self.log.borrow_mut().push("get_temperature");
        Temperature::new(self.temperature)
    }
}

#[derive(Debug, Default)]
pub struct FakeHeater {
    pub turn_on_calls: usize,
    pub turn_off_calls: usize,
    pub last: Option<HeaterCommand>,
    pub log: CallLog,
}

impl FakeHeater {
    pub fn calls(&self) -> usize {
        self.turn_on_calls + self.turn_off_calls
    }
}

impl Heater for FakeHeater {
    fn turn_on(&mut self) {
        self.log.borrow_mut().push("turn_on");
        self.turn_on_calls += 1;
        self.last = Some(HeaterCommand::TurnOn);
    }

    fn turn_off(&mut self) {
        self.log.borrow_mut().push("turn_off");
        self.turn_off_calls += 1;
        self.last = Some(HeaterCommand::TurnOff);
    }
}

#[derive(Debug, Default)]
pub struct FakeWindow {
    pub open_calls: usize,
    pub close_calls: usize,
    pub last: Option<WindowCommand>,
    pub log: CallLog,
}

impl FakeWindow {
    pub fn calls(&self) -> usize {
        self.open_calls + self.close_calls
    }
}

impl Window for FakeWindow {
    fn open(&mut self) {
        self.log.borrow_mut().push("open");
        self.open_calls += 1;
        self.last = Some(WindowCommand::Open);
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("close");
        self.close_calls += 1;
        self.last = Some(WindowCommand::Close);
    }
}

pub type FakeRegulator = Regulator<FakeSensor, FakeHeater, FakeWindow>;

pub fn regulator(lower: i32, upper: i32) -> FakeRegulator {
    let thresholds = Thresholds::new(Temperature::new(lower), Temperature::new(upper))
        .expect("test thresholds must be ordered");
    let log = CallLog::default();
    Regulator::new(
        FakeSensor {
            log: log.clone(),
            ..FakeSensor::default()
        },
        FakeHeater {
            log: log.clone(),
            ..FakeHeater::default()
        },
        FakeWindow {
            log,
            ..FakeWindow::default()
        },
        thresholds,
    )
}

/// Drain the calls recorded since the last time this was called.
pub fn take_calls(regulator: &FakeRegulator) -> Vec<&'static str> {
    regulator.sensor().log.borrow_mut().drain(..).collect()
}

pub fn regulate_at(regulator: &mut FakeRegulator, temperature: i32) {
    regulator.sensor_mut().temperature = temperature;
    regulator.regulate();
}
