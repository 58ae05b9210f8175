//! Request dispatch: route table → GreenhouseService → actuators.

use greenhouse::app::commands::ActuatorCommand;
use greenhouse::app::events::AppEvent;
use greenhouse::app::service::GreenhouseService;
use greenhouse::app::state::ActuatorState;
use greenhouse::config::SystemConfig;
use greenhouse::http::color::{ColorError, HexColor};
use greenhouse::http::page::render_page;
use greenhouse::http::router::RejectReason;

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

fn booted() -> (GreenhouseService, MockHardware, RecordingSink) {
    let mut svc = GreenhouseService::new(&SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    svc.start(&mut hw, &mut sink);
    hw.clear();
    sink.events.clear();
    (svc, hw, sink)
}

fn get(path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: 192.168.4.1\r\n\r\n")
}

#[test]
fn boot_drives_outputs_to_defaults() {
    let mut svc = GreenhouseService::new(&SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    svc.start(&mut hw, &mut sink);

    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Pump(false),
            ActuatorCall::Fan(false),
            ActuatorCall::Vent(0),
        ]
    );
    assert_eq!(sink.events, vec![AppEvent::Started(ActuatorState::default())]);
}

#[test]
fn pump_on_touches_only_the_pump() {
    let (mut svc, mut hw, mut sink) = booted();
    let before = svc.state().clone();

    let cmd = svc.handle_request(&get("/pump/on"), &mut hw, &mut sink);

    assert_eq!(cmd, Some(ActuatorCommand::PumpOn));
    assert_eq!(hw.calls, vec![ActuatorCall::Pump(true)]);
    let after = svc.state();
    assert!(after.pump_on);
    assert_eq!(after.fan_on, before.fan_on);
    assert_eq!(after.vent_open, before.vent_open);
    assert_eq!(after.rgb_color, before.rgb_color);
}

#[test]
fn pump_toggle_round_trips_to_initial_state() {
    let (mut svc, mut hw, mut sink) = booted();
    let initial = svc.state().clone();

    svc.handle_request(&get("/pump/on"), &mut hw, &mut sink);
    svc.handle_request(&get("/pump/off"), &mut hw, &mut sink);

    assert_eq!(*svc.state(), initial);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::PumpSwitched { on: true },
            AppEvent::PumpSwitched { on: false },
        ]
    );
}

#[test]
fn first_route_in_table_order_wins() {
    let (mut svc, mut hw, mut sink) = booted();

    let cmd = svc.handle_request("GET /wind/off/pump/on HTTP/1.1\r\n\r\n", &mut hw, &mut sink);

    assert_eq!(cmd, Some(ActuatorCommand::PumpOn));
    assert_eq!(hw.calls, vec![ActuatorCall::Pump(true)]);
    assert!(!svc.state().fan_on);
}

#[test]
fn fan_and_vent_routes() {
    let (mut svc, mut hw, mut sink) = booted();

    svc.handle_request(&get("/wind/on"), &mut hw, &mut sink);
    svc.handle_request(&get("/window/open"), &mut hw, &mut sink);
    assert!(svc.state().fan_on);
    assert!(svc.state().vent_open);

    svc.handle_request(&get("/window/close"), &mut hw, &mut sink);
    assert!(!svc.state().vent_open);

    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Fan(true),
            ActuatorCall::Vent(90),
            ActuatorCall::Vent(0),
        ]
    );
}

#[test]
fn green_colour_drives_red_to_zero() {
    let (mut svc, mut hw, mut sink) = booted();

    svc.handle_request("GET /rgb/color/#00FF00 HTTP/1.1\r\n\r\n", &mut hw, &mut sink);

    assert_eq!(svc.state().rgb_color.as_str(), "#00FF00");
    assert_eq!(hw.calls, vec![ActuatorCall::Red(0)]);
    assert_eq!(
        sink.events,
        vec![AppEvent::ColorSet {
            color: HexColor::parse("#00FF00").unwrap(),
            red: 0,
        }]
    );
}

#[test]
fn percent_encoded_hash_is_accepted() {
    let (mut svc, mut hw, mut sink) = booted();

    svc.handle_request(&get("/rgb/color/%231A2B3C"), &mut hw, &mut sink);

    assert_eq!(svc.state().rgb_color.as_str(), "#1A2B3C");
    assert_eq!(hw.calls, vec![ActuatorCall::Red(0x1A)]);
}

#[test]
fn truncated_colour_keeps_previous_value() {
    let (mut svc, mut hw, mut sink) = booted();

    let cmd = svc.handle_request("GET /rgb/color/", &mut hw, &mut sink);

    assert_eq!(cmd, None);
    assert_eq!(svc.state().rgb_color.as_str(), "#FFFFFF");
    assert!(hw.calls.is_empty());
    assert_eq!(
        sink.events,
        vec![AppEvent::RequestRejected {
            pattern: "/rgb/color/",
            reason: RejectReason::Unterminated,
        }]
    );
}

#[test]
fn malformed_colour_keeps_previous_value() {
    let (mut svc, mut hw, mut sink) = booted();
    svc.handle_request(&get("/rgb/color/#102030"), &mut hw, &mut sink);
    hw.clear();
    sink.events.clear();

    svc.handle_request(&get("/rgb/color/#GG0000"), &mut hw, &mut sink);

    assert_eq!(svc.state().rgb_color.as_str(), "#102030");
    assert!(hw.calls.is_empty());
    assert_eq!(
        sink.events,
        vec![AppEvent::RequestRejected {
            pattern: "/rgb/color/",
            reason: RejectReason::Color(ColorError::InvalidDigit),
        }]
    );
}

#[test]
fn unknown_path_changes_nothing() {
    let (mut svc, mut hw, mut sink) = booted();

    assert_eq!(svc.handle_request(&get("/favicon.ico"), &mut hw, &mut sink), None);
    assert_eq!(*svc.state(), ActuatorState::default());
    assert!(hw.calls.is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn fresh_boot_renders_defaults() {
    let (svc, _, _) = booted();
    let page = render_page(svc.state());

    assert!(page.contains(r#"<input type="checkbox" id="pump" >"#));
    assert!(page.contains(r#"<input type="checkbox" id="wind" >"#));
    assert!(page.contains(r#"<input type="checkbox" id="window" >"#));
    assert!(page.contains(r##"value="#FFFFFF""##));
}

#[test]
fn custom_vent_angles_are_used() {
    let config = SystemConfig {
        vent_open_angle: 120,
        vent_closed_angle: 30,
        ..SystemConfig::default()
    };
    let mut svc = GreenhouseService::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    svc.start(&mut hw, &mut sink);
    svc.handle_request(&get("/window/open"), &mut hw, &mut sink);

    assert_eq!(hw.calls[2], ActuatorCall::Vent(30));
    assert_eq!(hw.last_call(), Some(&ActuatorCall::Vent(120)));
}
