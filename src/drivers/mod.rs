//! Actuator drivers.

pub mod relay;
pub mod rgb;
pub mod servo;
