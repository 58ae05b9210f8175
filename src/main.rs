//! Greenhouse Controller Firmware: Main Entry Point
//!
//! Hexagonal architecture around a single-client HTTP dashboard served
//! over the controller's own WiFi access point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter   LogEventSink   AccessPoint   TcpAcceptor    │
//! │  (ActuatorPort)    (EventSink)    (soft-AP)     (Listener)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │         GreenhouseService (pure logic)                 │    │
//! │  │  router · colour decoder · ActuatorState               │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  HttpServer (accept → read head → dispatch → render → close)   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::gpio::{AnyOutputPin, PinDriver};
use esp_idf_svc::hal::ledc::config::TimerConfig;
use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use log::{error, info, warn};

use greenhouse::adapters::hardware::HardwareAdapter;
use greenhouse::adapters::log_sink::LogEventSink;
use greenhouse::adapters::tcp::TcpAcceptor;
use greenhouse::adapters::wifi::{AccessPoint, Radio};
use greenhouse::app::service::GreenhouseService;
use greenhouse::config::SystemConfig;
use greenhouse::drivers::relay::Relay;
use greenhouse::drivers::rgb::GrowLight;
use greenhouse::drivers::servo::VentServo;
use greenhouse::error::{CommsError, Error};
use greenhouse::http::server::HttpServer;
use greenhouse::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Greenhouse v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config ─────────────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    let peripherals = Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = match EspDefaultNvsPartition::take() {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("NVS partition unavailable ({}), WiFi calibration will not persist", e);
            None
        }
    };

    // ── 3. Actuators ──────────────────────────────────────────
    // SAFETY: each GPIO number in `pins` is claimed exactly once, here.
    let (pump_pin, fan_pin, servo_pin, red_pin) = unsafe {
        (
            AnyOutputPin::new(pins::PUMP_GPIO),
            AnyOutputPin::new(pins::FAN_GPIO),
            AnyOutputPin::new(pins::VENT_SERVO_GPIO),
            AnyOutputPin::new(pins::RGB_RED_GPIO),
        )
    };

    let servo_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default()
            .frequency(pins::SERVO_PWM_FREQ_HZ.Hz())
            .resolution(Resolution::Bits14),
    )?;
    let light_timer = LedcTimerDriver::new(
        peripherals.ledc.timer1,
        &TimerConfig::default()
            .frequency(pins::RGB_PWM_FREQ_HZ.Hz())
            .resolution(Resolution::Bits8),
    )?;

    let mut hw = HardwareAdapter::new(
        Relay::new(PinDriver::output(pump_pin)?),
        Relay::new(PinDriver::output(fan_pin)?),
        VentServo::new(LedcDriver::new(
            peripherals.ledc.channel0,
            &servo_timer,
            servo_pin,
        )?),
        GrowLight::new(LedcDriver::new(
            peripherals.ledc.channel1,
            &light_timer,
            red_pin,
        )?),
    );

    let mut log_sink = LogEventSink::new();
    let mut app = GreenhouseService::new(&config);
    app.start(&mut hw, &mut log_sink);

    // ── 4. Access point ───────────────────────────────────────
    // Not fatal: without a radio the loop still runs and logs.
    let mut ap = AccessPoint::new(&config)?;
    if let Err(e) = ap.start(Radio {
        modem: peripherals.modem,
        sysloop,
        nvs,
    }) {
        warn!("AP: {}, continuing without network", e);
    }

    // ── 5. HTTP dashboard ─────────────────────────────────────
    let listener = TcpAcceptor::bind(config.http_port, config.read_timeout())
        .map_err(|_| Error::from(CommsError::ListenerBindFailed))?;
    let mut server = HttpServer::new(listener);

    info!("System ready. Entering serve loop.");

    // ── 6. Serve loop ─────────────────────────────────────────
    loop {
        match server.poll(&mut app, &mut hw, &mut log_sink) {
            Ok(Some(_)) => {}
            Ok(None) => std::thread::sleep(config.poll_interval()),
            Err(e) => {
                error!("HTTP listener: {}", e);
                std::thread::sleep(config.poll_interval());
            }
        }
    }
}
