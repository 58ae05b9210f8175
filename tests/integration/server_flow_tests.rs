//! Connection loop end to end: listener → request reader → dispatch → page.

use greenhouse::app::service::GreenhouseService;
use greenhouse::config::SystemConfig;
use greenhouse::http::request::MAX_REQUEST_LEN;
use greenhouse::http::server::{HttpServer, Served};

use crate::mock_hw::{ActuatorCall, MockHardware, QueueListener, RecordingSink};

struct Rig {
    server: HttpServer<QueueListener>,
    svc: GreenhouseService,
    hw: MockHardware,
    sink: RecordingSink,
}

impl Rig {
    fn new(listener: QueueListener) -> Self {
        Self {
            server: HttpServer::new(listener),
            svc: GreenhouseService::new(&SystemConfig::default()),
            hw: MockHardware::new(),
            sink: RecordingSink::default(),
        }
    }

    fn poll(&mut self) -> Option<Served> {
        self.server
            .poll(&mut self.svc, &mut self.hw, &mut self.sink)
            .unwrap()
    }
}

#[test]
fn clients_are_served_one_per_poll_in_order() {
    let listener = QueueListener::default()
        .client(&[b"GET /pump/on HTTP/1.1\r\nHost: gh\r\n\r\n"])
        .client(&[b"GET /wind/on HTTP/1.1\r\n\r\n"]);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::Responded));
    assert!(rig.svc.state().pump_on);
    assert!(!rig.svc.state().fan_on);

    assert_eq!(rig.poll(), Some(Served::Responded));
    assert!(rig.svc.state().fan_on);

    assert_eq!(rig.poll(), None);
    assert_eq!(rig.server.served(), 2);
}

#[test]
fn response_reflects_state_after_the_request() {
    let listener = QueueListener::default().client(&[b"GET /window/open HTTP/1.1\r\n\r\n"]);
    let mut rig = Rig::new(listener);
    rig.poll();

    let response = rig.server.listener().response(0);
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Connection: close\r\n"));
    assert!(response.contains(r#"id="window" checked>"#));
    assert!(response.contains(r#"id="pump" >"#));
}

#[test]
fn unknown_path_still_gets_the_page() {
    let listener = QueueListener::default().client(&[b"GET / HTTP/1.1\r\n\r\n"]);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::Responded));
    assert!(rig.hw.calls.is_empty());
    assert!(rig.server.listener().response(0).contains("<html"));
}

#[test]
fn bare_lf_framing_is_accepted() {
    let listener = QueueListener::default().client(&[b"GET /rgb/color/#800000 HTTP/1.0\n\n"]);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::Responded));
    assert_eq!(rig.hw.calls, vec![ActuatorCall::Red(0x80)]);
}

#[test]
fn byte_at_a_time_client_is_reassembled() {
    let raw = b"GET /pump/on HTTP/1.1\r\n\r\n";
    let chunks: Vec<&[u8]> = raw.chunks(1).collect();
    let listener = QueueListener::default().client(&chunks);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::Responded));
    assert!(rig.svc.state().pump_on);
}

#[test]
fn hang_up_before_blank_line_gets_no_response() {
    let listener = QueueListener::default().client(&[b"GET /pump/on HTTP/1.1\r\n"]);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::Disconnected));
    assert!(!rig.svc.state().pump_on);
    assert!(rig.server.listener().response(0).is_empty());
    assert_eq!(rig.server.served(), 0);
}

#[test]
fn oversized_head_is_dropped() {
    let mut head = b"GET /pump/on HTTP/1.1\r\nX-Pad: ".to_vec();
    head.resize(MAX_REQUEST_LEN + 64, b'a');
    head.extend_from_slice(b"\r\n\r\n");
    let listener = QueueListener::default().client(&[&head]);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::TooLarge));
    assert!(!rig.svc.state().pump_on);
    assert!(rig.server.listener().response(0).is_empty());
}

#[test]
fn trailing_body_after_blank_line_is_ignored() {
    let listener =
        QueueListener::default().client(&[b"GET / HTTP/1.1\r\n\r\n/pump/on /wind/on"]);
    let mut rig = Rig::new(listener);

    assert_eq!(rig.poll(), Some(Served::Responded));
    assert!(rig.hw.calls.is_empty());
}
