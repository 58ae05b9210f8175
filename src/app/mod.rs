//! Application core: pure domain logic, zero I/O.
//!
//! Holds the actuator state and the rules that turn a routed request into
//! actuator writes.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
pub mod state;
