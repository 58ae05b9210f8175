//! Single-client connection loop.
//!
//! Each call to [`HttpServer::poll`] accepts at most one client and serves
//! it to completion: read the request head, dispatch it, write the page,
//! close.  Other clients wait in the listener backlog until the next poll.
//!
//! A client that disconnects, stalls past the read deadline, or sends an
//! oversized head gets no response; its partial request is dropped.

use log::{debug, info, warn};

use crate::app::ports::{ActuatorPort, EventSink};
use crate::app::service::GreenhouseService;

use super::page::render_response;
use super::request::{Progress, RequestReader};
use super::transport::{Connection, Listener, TransportError};

const READ_CHUNK: usize = 256;

/// What happened to the client handled by one [`HttpServer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Served {
    /// Request dispatched and the page written.
    Responded,
    /// Peer closed before the blank line.
    Disconnected,
    /// Read deadline expired before the blank line.
    TimedOut,
    /// Request head exceeded the reader capacity.
    TooLarge,
    /// Socket error while reading or writing.
    Failed(TransportError),
}

pub struct HttpServer<L: Listener> {
    listener: L,
    reader: RequestReader,
    served: u32,
}

impl<L: Listener> HttpServer<L> {
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            reader: RequestReader::new(),
            served: 0,
        }
    }

    /// Accept and serve one waiting client, if any.
    ///
    /// Returns `Ok(None)` when nobody is waiting.  Per-client failures are
    /// reported through [`Served`]; only a failing listener is an `Err`.
    pub fn poll(
        &mut self,
        service: &mut GreenhouseService,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<Option<Served>, TransportError> {
        let Some(mut conn) = self.listener.accept()? else {
            return Ok(None);
        };
        info!("New client");

        let outcome = self.serve(&mut conn, service, hw, sink);
        conn.close();
        self.reader.reset();

        match outcome {
            Served::Responded => self.served = self.served.wrapping_add(1),
            Served::Disconnected => info!("Client disconnected mid-request"),
            Served::TimedOut => warn!("Client timed out, request dropped"),
            Served::TooLarge => warn!("Request head too large, dropped"),
            Served::Failed(e) => warn!("Client I/O failed: {}", e),
        }
        debug!("Connection closed");
        Ok(Some(outcome))
    }

    fn serve(
        &mut self,
        conn: &mut L::Conn,
        service: &mut GreenhouseService,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Served {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = match conn.read(&mut chunk) {
                Ok(0) => return Served::Disconnected,
                Ok(n) => n,
                Err(TransportError::TimedOut) => return Served::TimedOut,
                Err(e) => return Served::Failed(e),
            };
            match self.reader.feed(&chunk[..n]).1 {
                Progress::Pending => {}
                Progress::Complete => break,
                Progress::Overflow => return Served::TooLarge,
            }
        }

        debug!("Request: {}", self.reader.request_line());
        service.handle_request(self.reader.as_bytes(), hw, sink);

        let response = render_response(service.state());
        match conn.write_all(response.as_bytes()) {
            Ok(()) => Served::Responded,
            Err(e) => Served::Failed(e),
        }
    }

    /// Number of requests answered since boot.
    pub fn served(&self) -> u32 {
        self.served
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }
}
