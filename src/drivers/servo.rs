//! Vent servo driver.
//!
//! Standard hobby servo on a 50 Hz PWM channel: a 500 µs pulse is 0°,
//! 2500 µs is 180°, linear in between.
//!
//! ## Dual-target design
//!
//! Generic over [`embedded_hal::pwm::SetDutyCycle`]: on ESP-IDF an
//! `esp_idf_hal::ledc::LedcDriver`, on host/test any mock channel.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;

/// PWM frame length at 50 Hz.
pub const FRAME_US: u32 = 20_000;
/// Pulse width at 0°.
pub const MIN_PULSE_US: u32 = 500;
/// Pulse width at 180°.
pub const MAX_PULSE_US: u32 = 2_500;
pub const MAX_ANGLE: u8 = 180;

/// Pulse width for `degrees`, clamped to the servo's travel.
pub fn pulse_width_us(degrees: u8) -> u32 {
    let degrees = u32::from(degrees.min(MAX_ANGLE));
    MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * degrees / u32::from(MAX_ANGLE)
}

pub struct VentServo<C> {
    channel: C,
    angle: Option<u8>,
}

impl<C: SetDutyCycle> VentServo<C> {
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            angle: None,
        }
    }

    pub fn set_angle(&mut self, degrees: u8) -> Result<(), ActuatorError> {
        let degrees = degrees.min(MAX_ANGLE);
        let max = u32::from(self.channel.max_duty_cycle());
        let duty = max * pulse_width_us(degrees) / FRAME_US;
        self.channel
            .set_duty_cycle(duty as u16)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.angle = Some(degrees);
        Ok(())
    }

    /// Last angle written, `None` before the first move.
    pub fn angle(&self) -> Option<u8> {
        self.angle
    }
}
