//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements       | Connects to                 |
//! |------------|------------------|-----------------------------|
//! | `hardware` | ActuatorPort     | Relays, servo, grow light   |
//! | `log_sink` | EventSink        | Serial log output           |
//! | `tcp`      | Listener         | `std::net` TCP socket       |
//! |            | Connection       |                             |
//! | `wifi`     | (none)           | ESP-IDF WiFi soft-AP        |

pub mod hardware;
pub mod log_sink;
pub mod tcp;
pub mod wifi;
