//! Relay output driver (pump, fan).
//!
//! A single active-HIGH digital output.  The driver is a dumb actuator:
//! it remembers the last level it successfully wrote and nothing else.
//!
//! ## Dual-target design
//!
//! Generic over [`embedded_hal::digital::OutputPin`]: on ESP-IDF the pin is
//! an `esp_idf_hal::gpio::PinDriver`, on host/test any mock implementing
//! the trait.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

pub struct Relay<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
