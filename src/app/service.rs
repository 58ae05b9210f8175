//! Application service: the domain core.
//!
//! [`GreenhouseService`] owns the [`ActuatorState`] and is the only code
//! that mutates it.  All I/O flows through port traits injected at call
//! sites, making the service testable with mock adapters.
//!
//! ```text
//!  raw request ──▶ router ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                             │  GreenhouseService   │
//!            ActuatorPort ◀── │  ActuatorState       │
//!                             └──────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::http::router::{self, Routed};

use super::commands::ActuatorCommand;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink};
use super::state::ActuatorState;

// ───────────────────────────────────────────────────────────────
// GreenhouseService
// ───────────────────────────────────────────────────────────────

pub struct GreenhouseService {
    state: ActuatorState,
    vent_open_angle: u8,
    vent_closed_angle: u8,
}

impl GreenhouseService {
    /// Construct the service with boot defaults.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: ActuatorState::default(),
            vent_open_angle: config.vent_open_angle,
            vent_closed_angle: config.vent_closed_angle,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive relays low and close the vent.  The light is left untouched
    /// until the first colour command.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.set_pump(self.state.pump_on);
        hw.set_fan(self.state.fan_on);
        hw.set_vent_angle(self.vent_angle(self.state.vent_open));
        sink.emit(&AppEvent::Started(self.state.clone()));
        info!("GreenhouseService started: {:?}", self.state);
    }

    // ── Request handling ──────────────────────────────────────

    /// Route a raw request and apply the resulting command, if any.
    ///
    /// At most one actuator changes per call.  Returns the applied command.
    pub fn handle_request(
        &mut self,
        raw: impl AsRef<[u8]>,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Option<ActuatorCommand> {
        match router::route(raw) {
            Routed::Command(cmd) => {
                self.apply(cmd.clone(), hw, sink);
                Some(cmd)
            }
            Routed::Rejected { pattern, reason } => {
                sink.emit(&AppEvent::RequestRejected { pattern, reason });
                None
            }
            Routed::Unmatched => {
                debug!("no route matched");
                None
            }
        }
    }

    /// Execute one command against the hardware and record it.
    pub fn apply(
        &mut self,
        cmd: ActuatorCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            ActuatorCommand::PumpOn => self.switch_pump(true, hw, sink),
            ActuatorCommand::PumpOff => self.switch_pump(false, hw, sink),
            ActuatorCommand::FanOn => self.switch_fan(true, hw, sink),
            ActuatorCommand::FanOff => self.switch_fan(false, hw, sink),
            ActuatorCommand::VentOpen => self.move_vent(true, hw, sink),
            ActuatorCommand::VentClose => self.move_vent(false, hw, sink),
            ActuatorCommand::SetColor(color) => {
                // Green and blue are decoded but have no output.
                let red = color.rgb().r;
                hw.set_red_level(red);
                self.state.rgb_color = color.clone();
                sink.emit(&AppEvent::ColorSet { color, red });
            }
        }
    }

    fn switch_pump(&mut self, on: bool, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.set_pump(on);
        self.state.pump_on = on;
        sink.emit(&AppEvent::PumpSwitched { on });
    }

    fn switch_fan(&mut self, on: bool, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.set_fan(on);
        self.state.fan_on = on;
        sink.emit(&AppEvent::FanSwitched { on });
    }

    fn move_vent(&mut self, open: bool, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let angle = self.vent_angle(open);
        hw.set_vent_angle(angle);
        self.state.vent_open = open;
        sink.emit(&AppEvent::VentMoved { open, angle });
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &ActuatorState {
        &self.state
    }

    fn vent_angle(&self, open: bool) -> u8 {
        if open {
            self.vent_open_angle
        } else {
            self.vent_closed_angle
        }
    }
}
