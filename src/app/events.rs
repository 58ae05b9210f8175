//! Outbound application events.
//!
//! The [`GreenhouseService`](super::service::GreenhouseService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::http::color::HexColor;
use crate::http::router::RejectReason;

use super::state::ActuatorState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Outputs were driven to their boot values.
    Started(ActuatorState),

    PumpSwitched { on: bool },

    FanSwitched { on: bool },

    VentMoved { open: bool, angle: u8 },

    /// New light colour stored; only `red` reaches an output.
    ColorSet { color: HexColor, red: u8 },

    /// A route matched but carried an unusable argument.
    RequestRejected {
        pattern: &'static str,
        reason: RejectReason,
    },
}
