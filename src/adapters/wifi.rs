//! WiFi access-point adapter.
//!
//! Brings up the controller's own network: a WPA2 (or open) soft-AP with
//! a fixed gateway address and a DHCP server for connecting phones.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi driver via `esp_idf_svc::wifi`.
//! - **all other targets**: simulation stub for host-side tests.

use core::fmt;
use core::net::Ipv4Addr;

use log::info;
#[cfg(target_os = "espidf")]
use log::warn;

use crate::config::SystemConfig;

// ───────────────────────────────────────────────────────────────
// Errors
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApError {
    InvalidSsid,
    InvalidPassword,
    InvalidChannel,
    StartFailed,
    AlreadyRunning,
}

impl fmt::Display for ApError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)"),
            Self::InvalidChannel => write!(f, "channel invalid (must be 1-13)"),
            Self::StartFailed => write!(f, "access point start failed"),
            Self::AlreadyRunning => write!(f, "access point already running"),
        }
    }
}

impl std::error::Error for ApError {}

impl From<ApError> for crate::error::Error {
    fn from(_: ApError) -> Self {
        crate::error::CommsError::AccessPointFailed.into()
    }
}

// ───────────────────────────────────────────────────────────────
// Validation
// ───────────────────────────────────────────────────────────────

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), ApError> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(ApError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ApError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(ApError::InvalidPassword);
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// Radio resources
// ───────────────────────────────────────────────────────────────

/// Peripherals the AP needs on the device.
#[cfg(target_os = "espidf")]
pub struct Radio {
    pub modem: esp_idf_svc::hal::modem::Modem,
    pub sysloop: esp_idf_svc::eventloop::EspSystemEventLoop,
    pub nvs: Option<esp_idf_svc::nvs::EspDefaultNvsPartition>,
}

/// Simulation stand-in for the radio peripherals.
#[cfg(not(target_os = "espidf"))]
pub struct Radio;

// ───────────────────────────────────────────────────────────────
// Access point
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApState {
    Stopped,
    Running,
}

pub struct AccessPoint {
    ssid: heapless::String<32>,
    password: heapless::String<64>,
    gateway: Ipv4Addr,
    channel: u8,
    max_connections: u16,
    state: ApState,
    #[cfg(target_os = "espidf")]
    wifi: Option<esp_idf_svc::wifi::EspWifi<'static>>,
}

impl AccessPoint {
    /// Build from config, validating credentials up front.
    pub fn new(config: &SystemConfig) -> Result<Self, ApError> {
        validate_ssid(&config.ap_ssid)?;
        validate_password(&config.ap_password)?;
        if !(1..=13).contains(&config.ap_channel) {
            return Err(ApError::InvalidChannel);
        }
        Ok(Self {
            ssid: config.ap_ssid.clone(),
            password: config.ap_password.clone(),
            gateway: config.ap_ip(),
            channel: config.ap_channel,
            max_connections: config.ap_max_connections,
            state: ApState::Stopped,
            #[cfg(target_os = "espidf")]
            wifi: None,
        })
    }

    pub fn state(&self) -> ApState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ApState::Running
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Address clients use to reach the dashboard.
    pub fn gateway(&self) -> Ipv4Addr {
        self.gateway
    }

    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }

    /// Start broadcasting.  Can only be called once.
    pub fn start(&mut self, radio: Radio) -> Result<(), ApError> {
        if self.is_running() {
            return Err(ApError::AlreadyRunning);
        }
        self.platform_start(radio)?;
        self.state = ApState::Running;
        info!(
            "AP: '{}' up on channel {}, dashboard at http://{}/",
            self.ssid, self.channel, self.gateway
        );
        Ok(())
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_start(&mut self, radio: Radio) -> Result<(), ApError> {
        use esp_idf_svc::ipv4;
        use esp_idf_svc::netif::{EspNetif, NetifConfiguration, NetifStack};
        use esp_idf_svc::wifi::{
            AccessPointConfiguration, AuthMethod, Configuration, EspWifi, WifiDriver,
        };

        let fail = |what: &str, e: esp_idf_svc::sys::EspError| {
            warn!("AP: {} failed: {}", what, e);
            ApError::StartFailed
        };

        let driver = WifiDriver::new(radio.modem, radio.sysloop, radio.nvs)
            .map_err(|e| fail("driver init", e))?;

        let ap_netif = NetifConfiguration {
            ip_configuration: Some(ipv4::Configuration::Router(ipv4::RouterConfiguration {
                subnet: ipv4::Subnet {
                    gateway: self.gateway,
                    mask: ipv4::Mask(24),
                },
                dhcp_enabled: true,
                dns: Some(self.gateway),
                secondary_dns: None,
            })),
            ..NetifConfiguration::wifi_default_router()
        };

        let mut wifi = EspWifi::wrap_all(
            driver,
            EspNetif::new(NetifStack::Sta).map_err(|e| fail("STA netif", e))?,
            EspNetif::new_with_conf(&ap_netif).map_err(|e| fail("AP netif", e))?,
        )
        .map_err(|e| fail("wrap", e))?;

        let auth_method = if self.is_open() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };
        let conf = AccessPointConfiguration {
            ssid: self.ssid.as_str().try_into().map_err(|_| ApError::InvalidSsid)?,
            password: self
                .password
                .as_str()
                .try_into()
                .map_err(|_| ApError::InvalidPassword)?,
            auth_method,
            ssid_hidden: false,
            channel: self.channel,
            max_connections: self.max_connections,
            ..Default::default()
        };
        wifi.set_configuration(&Configuration::AccessPoint(conf))
            .map_err(|e| fail("configure", e))?;
        wifi.start().map_err(|e| fail("start", e))?;

        self.wifi = Some(wifi);
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_start(&mut self, _radio: Radio) -> Result<(), ApError> {
        info!(
            "WiFi(sim): AP '{}' ({}), max {} stations",
            self.ssid,
            if self.is_open() { "open" } else { "WPA2" },
            self.max_connections
        );
        Ok(())
    }
}
