//! Port traits: the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GreenhouseService (domain)
//! ```
//!
//! Driven adapters (actuators, event sinks) implement these traits.  The
//! [`GreenhouseService`](super::service::GreenhouseService) consumes them
//! via generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
///
/// Writes are fire-and-forget.  Adapters log their own failures; the
/// domain records the commanded value regardless.
pub trait ActuatorPort {
    /// Switch the irrigation pump relay.
    fn set_pump(&mut self, on: bool);

    /// Switch the ventilation fan relay.
    fn set_fan(&mut self, on: bool);

    /// Move the vent servo to `degrees` (0–180).
    fn set_vent_angle(&mut self, degrees: u8);

    /// Set the grow light's red channel level (0–255).
    fn set_red_level(&mut self, level: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
