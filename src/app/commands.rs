//! Inbound commands to the application service.
//!
//! Produced by the HTTP router from a dashboard request and interpreted by
//! the [`GreenhouseService`](super::service::GreenhouseService).

use crate::http::color::HexColor;

/// One actuator action.  A request yields at most one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCommand {
    PumpOn,
    PumpOff,
    FanOn,
    FanOff,
    VentOpen,
    VentClose,
    /// Store the colour and drive the light's red channel.
    SetColor(HexColor),
}
