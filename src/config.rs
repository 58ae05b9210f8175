//! System configuration parameters
//!
//! All tunable parameters for the greenhouse controller.  Values are
//! compiled in; the access-point credentials can be overridden at build
//! time through `GREENHOUSE_AP_SSID` / `GREENHOUSE_AP_PASSWORD`.

use core::net::Ipv4Addr;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_AP_SSID: &str = match option_env!("GREENHOUSE_AP_SSID") {
    Some(ssid) => ssid,
    None => "ESP32_AP",
};

const DEFAULT_AP_PASSWORD: &str = match option_env!("GREENHOUSE_AP_PASSWORD") {
    Some(password) => password,
    None => "12345678",
};

// An overlong build-time credential must fail the build, not shrink to an
// empty string (an empty passphrase means an open network).
const _: () = assert!(DEFAULT_AP_SSID.len() <= 32, "GREENHOUSE_AP_SSID exceeds 32 bytes");
const _: () = assert!(
    DEFAULT_AP_PASSWORD.len() <= 64,
    "GREENHOUSE_AP_PASSWORD exceeds 64 bytes"
);

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Access point ---
    /// Network name broadcast by the controller
    pub ap_ssid: heapless::String<32>,
    /// WPA2 passphrase (empty = open network)
    pub ap_password: heapless::String<64>,
    /// Fixed gateway address of the AP interface
    pub ap_ip: [u8; 4],
    /// 2.4 GHz channel (1-13)
    pub ap_channel: u8,
    /// Maximum associated stations
    pub ap_max_connections: u16,

    // --- HTTP ---
    /// Dashboard listen port
    pub http_port: u16,
    /// Budget for receiving a whole request head, in milliseconds, counted
    /// from accept (0 = wait forever)
    pub read_timeout_ms: u32,
    /// Sleep between accept polls in milliseconds
    pub poll_interval_ms: u32,

    // --- Vent servo ---
    /// Servo angle (degrees) for an open vent
    pub vent_open_angle: u8,
    /// Servo angle (degrees) for a closed vent
    pub vent_closed_angle: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut ap_ssid = heapless::String::new();
        let mut ap_password = heapless::String::new();
        let fits = ap_ssid.push_str(DEFAULT_AP_SSID).is_ok()
            && ap_password.push_str(DEFAULT_AP_PASSWORD).is_ok();
        debug_assert!(fits, "capacities are asserted at compile time");

        Self {
            // Access point
            ap_ssid,
            ap_password,
            ap_ip: [192, 168, 4, 1],
            ap_channel: 1,
            ap_max_connections: 4,

            // HTTP
            http_port: 80,
            read_timeout_ms: 5_000,
            poll_interval_ms: 10,

            // Vent servo
            vent_open_angle: 90,
            vent_closed_angle: 0,
        }
    }
}

impl SystemConfig {
    /// Gateway address as an [`Ipv4Addr`].
    pub fn ap_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.ap_ip)
    }

    /// Client read timeout, `None` when disabled.
    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_ms > 0).then(|| Duration::from_millis(u64::from(self.read_timeout_ms)))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.vent_open_angle > 180 || self.vent_closed_angle > 180 {
            return Err(Error::Config("vent angle must be 0-180 degrees"));
        }
        if self.vent_open_angle == self.vent_closed_angle {
            return Err(Error::Config("vent open and closed angles are equal"));
        }
        if !(1..=13).contains(&self.ap_channel) {
            return Err(Error::Config("AP channel must be 1-13"));
        }
        if self.ap_ssid.is_empty() {
            return Err(Error::Config("AP SSID must not be empty"));
        }
        if (1..8).contains(&self.ap_password.len()) {
            return Err(Error::Config("AP passphrase must be empty or 8-64 bytes"));
        }
        if self.http_port == 0 {
            return Err(Error::Config("HTTP port must be non-zero"));
        }
        Ok(())
    }
}
