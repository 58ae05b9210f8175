//! Streaming HTTP request-head accumulator.
//!
//! Bytes are fed in as they arrive from the socket.  The head is complete
//! once an empty line is seen: a `\n` with no other characters (ignoring
//! `\r`) since the previous `\n` or the start of the request.  Nothing past
//! the head is interpreted; bodies are never read.

use core::str;

/// Default capacity for the dashboard server.
pub const MAX_REQUEST_LEN: usize = 2048;

/// Result of feeding a chunk into the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Still waiting for the terminating blank line.
    Pending,
    /// Blank line seen; the request is ready for dispatch.
    Complete,
    /// The buffer filled before the blank line arrived.
    Overflow,
}

/// Fixed-capacity request reader.
pub struct RequestReader<const N: usize = MAX_REQUEST_LEN> {
    buf: heapless::Vec<u8, N>,
    line_len: usize,
    state: Progress,
}

impl<const N: usize> RequestReader<N> {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            line_len: 0,
            state: Progress::Pending,
        }
    }

    /// Consume bytes until the head completes or the buffer overflows.
    ///
    /// Returns the number of bytes of `data` that were consumed alongside
    /// the current progress.  Bytes after the blank line are left unread.
    pub fn feed(&mut self, data: &[u8]) -> (usize, Progress) {
        if self.state != Progress::Pending {
            return (0, self.state);
        }

        for (i, &byte) in data.iter().enumerate() {
            if self.buf.push(byte).is_err() {
                self.state = Progress::Overflow;
                return (i, self.state);
            }
            match byte {
                b'\n' if self.line_len == 0 => {
                    self.state = Progress::Complete;
                    return (i + 1, self.state);
                }
                b'\n' => self.line_len = 0,
                b'\r' => {}
                _ => self.line_len += 1,
            }
        }
        (data.len(), self.state)
    }

    pub fn progress(&self) -> Progress {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == Progress::Complete
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Accumulated request bytes, as received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Accumulated request as text, for logging.  Invalid UTF-8 is
    /// truncated at the first bad byte; route on [`as_bytes`](Self::as_bytes).
    pub fn as_str(&self) -> &str {
        match str::from_utf8(&self.buf) {
            Ok(s) => s,
            Err(e) => str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// First line of the request (`GET /path HTTP/1.1`), without line ending.
    pub fn request_line(&self) -> &str {
        let text = self.as_str();
        let line = text.split('\n').next().unwrap_or_default();
        line.trim_end_matches('\r')
    }

    /// Forget everything and start a new request.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.line_len = 0;
        self.state = Progress::Pending;
    }
}

impl<const N: usize> Default for RequestReader<N> {
    fn default() -> Self {
        Self::new()
    }
}
