//! Hardware adapter: bridges the actuator drivers to [`ActuatorPort`].
//!
//! Owns both relays, the vent servo and the grow light.  Driver errors
//! are logged here and swallowed; the domain keeps the commanded state.
//!
//! Generic over the embedded-hal pin and channel types, so `main` plugs
//! in esp-idf-hal drivers and tests plug in mocks.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::ActuatorPort;
use crate::drivers::relay::Relay;
use crate::drivers::rgb::GrowLight;
use crate::drivers::servo::VentServo;

/// Concrete adapter that combines all actuators behind the port trait.
pub struct HardwareAdapter<P, F, S, R> {
    pump: Relay<P>,
    fan: Relay<F>,
    vent: VentServo<S>,
    light: GrowLight<R>,
}

impl<P, F, S, R> HardwareAdapter<P, F, S, R>
where
    P: OutputPin,
    F: OutputPin,
    S: SetDutyCycle,
    R: SetDutyCycle,
{
    pub fn new(pump: Relay<P>, fan: Relay<F>, vent: VentServo<S>, light: GrowLight<R>) -> Self {
        Self {
            pump,
            fan,
            vent,
            light,
        }
    }

    pub fn is_pump_on(&self) -> bool {
        self.pump.is_on()
    }

    pub fn is_fan_on(&self) -> bool {
        self.fan.is_on()
    }

    pub fn vent_angle(&self) -> Option<u8> {
        self.vent.angle()
    }

    pub fn red_level(&self) -> Option<u8> {
        self.light.red_level()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P, F, S, R> ActuatorPort for HardwareAdapter<P, F, S, R>
where
    P: OutputPin,
    F: OutputPin,
    S: SetDutyCycle,
    R: SetDutyCycle,
{
    fn set_pump(&mut self, on: bool) {
        if let Err(e) = self.pump.set(on) {
            warn!("pump: {}", e);
        }
    }

    fn set_fan(&mut self, on: bool) {
        if let Err(e) = self.fan.set(on) {
            warn!("fan: {}", e);
        }
    }

    fn set_vent_angle(&mut self, degrees: u8) {
        if let Err(e) = self.vent.set_angle(degrees) {
            warn!("vent servo: {}", e);
        }
    }

    fn set_red_level(&mut self, level: u8) {
        if let Err(e) = self.light.set_red(level) {
            warn!("grow light: {}", e);
        }
    }
}
