//! Grow-light driver.
//!
//! Only the red channel is wired to a PWM output; the level is an 8-bit
//! value scaled onto the channel's duty range.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;

pub struct GrowLight<C> {
    red: C,
    level: Option<u8>,
}

impl<C: SetDutyCycle> GrowLight<C> {
    pub fn new(red: C) -> Self {
        Self { red, level: None }
    }

    pub fn set_red(&mut self, level: u8) -> Result<(), ActuatorError> {
        self.red
            .set_duty_cycle_fraction(u16::from(level), u16::from(u8::MAX))
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.level = Some(level);
        Ok(())
    }

    /// Last red level written, `None` until the first colour command.
    pub fn red_level(&self) -> Option<u8> {
        self.level
    }
}
