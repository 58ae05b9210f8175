//! Mock adapters for integration tests.
//!
//! Records every actuator call and every emitted event so tests can
//! assert on the full history without touching real GPIO/PWM registers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use greenhouse::app::events::AppEvent;
use greenhouse::app::ports::{ActuatorPort, EventSink};
use greenhouse::http::transport::{Connection, Listener, TransportError};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    Pump(bool),
    Fan(bool),
    Vent(u8),
    Red(u8),
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl ActuatorPort for MockHardware {
    fn set_pump(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Pump(on));
    }

    fn set_fan(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Fan(on));
    }

    fn set_vent_angle(&mut self, degrees: u8) {
        self.calls.push(ActuatorCall::Vent(degrees));
    }

    fn set_red_level(&mut self, level: u8) {
        self.calls.push(ActuatorCall::Red(level));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── In-memory transport ───────────────────────────────────────

/// Everything a client received, recorded when the server closes it.
pub type Transcript = Rc<RefCell<Vec<Vec<u8>>>>;

/// A client that sends its chunks in order, then hangs up.
pub struct MemConn {
    chunks: VecDeque<Vec<u8>>,
    written: Vec<u8>,
    transcript: Transcript,
}

impl Connection for MemConn {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let Some(mut chunk) = self.chunks.pop_front() else {
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            self.chunks.push_front(chunk.split_off(n));
        }
        Ok(n)
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.written.extend_from_slice(data);
        Ok(())
    }

    fn close(&mut self) {
        self.transcript
            .borrow_mut()
            .push(std::mem::take(&mut self.written));
    }
}

/// Hands out queued clients, then reports an idle listener.
#[derive(Default)]
pub struct QueueListener {
    waiting: VecDeque<VecDeque<Vec<u8>>>,
    pub transcript: Transcript,
}

impl QueueListener {
    /// Queue a client that will send `chunks` and then disconnect.
    pub fn client<I, C>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        self.waiting
            .push_back(chunks.into_iter().map(|c| c.as_ref().to_vec()).collect());
        self
    }

    /// Response bytes for the `n`th served client, as text.
    pub fn response(&self, n: usize) -> String {
        String::from_utf8_lossy(&self.transcript.borrow()[n]).into_owned()
    }
}

impl Listener for QueueListener {
    type Conn = MemConn;

    fn accept(&mut self) -> Result<Option<MemConn>, TransportError> {
        Ok(self.waiting.pop_front().map(|chunks| MemConn {
            chunks,
            written: Vec::new(),
            transcript: Rc::clone(&self.transcript),
        }))
    }
}
