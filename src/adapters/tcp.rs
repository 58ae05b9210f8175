//! Plain TCP transport for the dashboard.
//!
//! Implements [`Listener`] / [`Connection`] on `std::net`, which ESP-IDF
//! backs with lwIP sockets, so the same code runs on the device and on
//! the host.
//!
//! The listening socket is non-blocking so the main loop can poll it.
//! Accepted clients are switched back to blocking reads.  The configured
//! read timeout is a deadline for the whole request head, counted from
//! accept: each read waits only for the time left, so a client that
//! trickles bytes cannot hold the loop past it.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::http::transport::{Connection, Listener, TransportError};

fn map_io(e: &std::io::Error) -> TransportError {
    match e.kind() {
        ErrorKind::WouldBlock | ErrorKind::TimedOut => TransportError::TimedOut,
        _ => TransportError::Io,
    }
}

// ───────────────────────────────────────────────────────────────
// Listener
// ───────────────────────────────────────────────────────────────

pub struct TcpAcceptor {
    listener: TcpListener,
    read_timeout: Option<Duration>,
}

impl TcpAcceptor {
    /// Bind to `0.0.0.0:<port>`.  Port `0` lets the OS pick a free port
    /// (use [`local_addr()`](Self::local_addr) to discover it).
    pub fn bind(port: u16, read_timeout: Option<Duration>) -> Result<Self, TransportError> {
        Self::bind_addr(SocketAddr::from(([0, 0, 0, 0], port)), read_timeout)
    }

    pub fn bind_addr(
        addr: SocketAddr,
        read_timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr).map_err(|_| TransportError::Io)?;
        listener
            .set_nonblocking(true)
            .map_err(|_| TransportError::Io)?;
        info!("HTTP: listening on {}", addr);
        Ok(Self {
            listener,
            read_timeout,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        self.listener.local_addr().map_err(|_| TransportError::Io)
    }
}

impl Listener for TcpAcceptor {
    type Conn = TcpClient;

    fn accept(&mut self) -> Result<Option<TcpClient>, TransportError> {
        match self.listener.accept() {
            Ok((stream, peer)) => {
                // Accepted sockets may inherit O_NONBLOCK from the listener.
                if stream.set_nonblocking(false).is_err() {
                    warn!("HTTP: failed to configure socket for {}", peer);
                    return Err(TransportError::Io);
                }
                info!("HTTP: client {}", peer);
                Ok(Some(TcpClient {
                    stream: Some(stream),
                    deadline: self.read_timeout.map(|t| Instant::now() + t),
                }))
            }
            Err(ref e) if e.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(e) => {
                warn!("HTTP: accept error: {}", e);
                Err(TransportError::Io)
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Connection
// ───────────────────────────────────────────────────────────────

pub struct TcpClient {
    stream: Option<TcpStream>,
    /// `None` waits forever.
    deadline: Option<Instant>,
}

impl Connection for TcpClient {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(0);
        };
        loop {
            if let Some(deadline) = self.deadline {
                let left = deadline.saturating_duration_since(Instant::now());
                // A zero timeout is rejected by the socket layer.
                if left.is_zero() {
                    return Err(TransportError::TimedOut);
                }
                stream.set_read_timeout(Some(left)).map_err(|e| map_io(&e))?;
            }
            match stream.read(buf) {
                Ok(n) => return Ok(n),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(ref e) => return Err(map_io(e)),
            }
        }
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), TransportError> {
        let stream = self.stream.as_mut().ok_or(TransportError::Io)?;
        stream.write_all(data).map_err(|e| map_io(&e))?;
        stream.flush().map_err(|e| map_io(&e))
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use std::thread::sleep;

    use super::*;

    fn acceptor(timeout_ms: u64) -> TcpAcceptor {
        TcpAcceptor::bind_addr(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            Some(Duration::from_millis(timeout_ms)),
        )
        .unwrap()
    }

    fn accept_one(acc: &mut TcpAcceptor) -> TcpClient {
        for _ in 0..100 {
            if let Some(c) = acc.accept().unwrap() {
                return c;
            }
            sleep(Duration::from_millis(10));
        }
        panic!("no client accepted");
    }

    #[test]
    fn accept_without_client_is_none() {
        let mut acc = acceptor(100);
        assert!(acc.accept().unwrap().is_none());
    }

    #[test]
    fn read_write_and_close() {
        let mut acc = acceptor(1_000);
        let mut peer = TcpStream::connect(acc.local_addr().unwrap()).unwrap();
        let mut conn = accept_one(&mut acc);

        peer.write_all(b"ping").unwrap();
        let mut buf = [0u8; 16];
        let n = conn.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"ping");

        conn.write_all(b"pong").unwrap();
        conn.close();
        conn.close();

        let mut reply = Vec::new();
        peer.read_to_end(&mut reply).unwrap();
        assert_eq!(reply, b"pong");
    }

    #[test]
    fn silent_peer_times_out() {
        let mut acc = acceptor(50);
        let _peer = TcpStream::connect(acc.local_addr().unwrap()).unwrap();
        let mut conn = accept_one(&mut acc);

        let mut buf = [0u8; 16];
        assert_eq!(conn.read(&mut buf), Err(TransportError::TimedOut));
    }

    #[test]
    fn deadline_spans_all_reads() {
        let mut acc = acceptor(200);
        let mut peer = TcpStream::connect(acc.local_addr().unwrap()).unwrap();
        let mut conn = accept_one(&mut acc);
        let started = Instant::now();

        let writer = std::thread::spawn(move || {
            for _ in 0..10 {
                if peer.write_all(b"x").is_err() {
                    break;
                }
                sleep(Duration::from_millis(60));
            }
        });

        let mut buf = [0u8; 16];
        let outcome = loop {
            match conn.read(&mut buf) {
                Ok(0) => break Ok(0),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        assert_eq!(outcome, Err(TransportError::TimedOut));
        assert!(started.elapsed() < Duration::from_millis(500));

        conn.close();
        writer.join().unwrap();
    }

    #[test]
    fn peer_close_reads_as_eof() {
        let mut acc = acceptor(1_000);
        let peer = TcpStream::connect(acc.local_addr().unwrap()).unwrap();
        let mut conn = accept_one(&mut acc);
        drop(peer);

        let mut buf = [0u8; 16];
        assert_eq!(conn.read(&mut buf), Ok(0));
    }
}
