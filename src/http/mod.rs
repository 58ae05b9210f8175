//! HTTP dashboard: request framing, routing, rendering, connection loop.
//!
//! ```text
//!  Listener ──▶ server ──▶ request ──▶ router ──▶ GreenhouseService
//!                  ▲                                   │
//!                  └────────────── page ◀──────────────┘
//! ```
//!
//! Only the path substrings in [`router::ROUTES`] are interpreted; method
//! and headers are accumulated but never parsed.

pub mod color;
pub mod page;
pub mod request;
pub mod router;
pub mod server;
pub mod transport;
