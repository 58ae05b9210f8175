//! Transport abstraction: a listener handing out byte-stream connections.
//!
//! The connection loop is generic over [`Listener`], so the dashboard can
//! be served from a real TCP socket on the device and from in-memory
//! streams in tests.

use core::fmt;

/// Errors raised by a listener or connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// No data arrived before the read deadline.
    TimedOut,
    /// Socket-level I/O failure.
    Io,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimedOut => write!(f, "read timed out"),
            Self::Io => write!(f, "socket I/O error"),
        }
    }
}

/// One accepted client.
pub trait Connection {
    /// Read up to `buf.len()` bytes, blocking until data, deadline or EOF.
    /// Returns `Ok(0)` once the peer has closed the connection.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;

    /// Write all of `data`.
    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Shut the connection down.  Idempotent.
    fn close(&mut self);
}

/// Source of client connections.
pub trait Listener {
    type Conn: Connection;

    /// Non-blocking accept: `Ok(None)` when no client is waiting.
    fn accept(&mut self) -> Result<Option<Self::Conn>, TransportError>;
}
