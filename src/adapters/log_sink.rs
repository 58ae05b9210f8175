//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger (UART / USB-CDC on the device, stderr on the host).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink {
    emitted: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events logged since boot.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match event {
            AppEvent::Started(state) => {
                info!("START | state={:?}", state);
            }
            AppEvent::PumpSwitched { on } => {
                info!("PUMP  | {}", on_off(*on));
            }
            AppEvent::FanSwitched { on } => {
                info!("FAN   | {}", on_off(*on));
            }
            AppEvent::VentMoved { open, angle } => {
                info!(
                    "VENT  | {} ({}\u{00b0})",
                    if *open { "OPEN" } else { "CLOSED" },
                    angle
                );
            }
            AppEvent::ColorSet { color, red } => {
                info!("LIGHT | color={} red={}", color, red);
            }
            AppEvent::RequestRejected { pattern, reason } => {
                warn!("REJECT | route={} reason={}", pattern, reason);
            }
        }
    }
}
