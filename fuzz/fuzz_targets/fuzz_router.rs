//! Fuzz target: route + dispatch
//!
//! Arbitrary request bytes must route without panicking and change at
//! most one actuator.
//!
//! cargo fuzz run fuzz_router

#![no_main]

use greenhouse::app::events::AppEvent;
use greenhouse::app::ports::{ActuatorPort, EventSink};
use greenhouse::app::service::GreenhouseService;
use greenhouse::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Count(usize);

impl ActuatorPort for Count {
    fn set_pump(&mut self, _on: bool) {
        self.0 += 1;
    }
    fn set_fan(&mut self, _on: bool) {
        self.0 += 1;
    }
    fn set_vent_angle(&mut self, _degrees: u8) {
        self.0 += 1;
    }
    fn set_red_level(&mut self, _level: u8) {
        self.0 += 1;
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut svc = GreenhouseService::new(&SystemConfig::default());
    let mut hw = Count::default();
    svc.handle_request(data, &mut hw, &mut Discard);
    assert!(hw.0 <= 1, "one request changed {} actuators", hw.0);
});
