//! Last commanded actuator values.
//!
//! Owned by the [`GreenhouseService`](super::service::GreenhouseService);
//! the page renderer only ever reads it.  Nothing is persisted, so every
//! boot starts from [`ActuatorState::default`].

use crate::http::color::HexColor;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActuatorState {
    pub pump_on: bool,
    pub fan_on: bool,
    pub vent_open: bool,
    pub rgb_color: HexColor,
}
