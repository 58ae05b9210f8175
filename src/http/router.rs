//! Path dispatch table.
//!
//! Routes are checked against the raw request bytes in table order.  The
//! first pattern found anywhere in the request decides the outcome; later
//! patterns are never consulted, even if the first one's handler rejects
//! the request.  Matching is byte-wise, so non-UTF-8 bytes elsewhere in
//! the request do not hide a route.

use core::{fmt, str};

use crate::app::commands::ActuatorCommand;
use crate::http::color::{ColorError, HexColor};

/// Prefix of the colour route; the colour token follows it.
pub const COLOR_PREFIX: &str = "/rgb/color/";

/// Why a matched route produced no command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The colour token is not terminated by a space.
    Unterminated,
    /// The colour token failed to decode.
    Color(ColorError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unterminated => write!(f, "colour token not terminated by a space"),
            Self::Color(e) => write!(f, "{e}"),
        }
    }
}

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// A route matched and produced a command.
    Command(ActuatorCommand),
    /// A route matched but its argument was unusable.
    Rejected {
        pattern: &'static str,
        reason: RejectReason,
    },
    /// No pattern occurs in the request.
    Unmatched,
}

/// A route handler receives the request bytes that follow the pattern.
type Handler = fn(&[u8]) -> Result<ActuatorCommand, RejectReason>;

pub struct Route {
    pub pattern: &'static str,
    handler: Handler,
}

/// Priority-ordered route table.
pub static ROUTES: [Route; 7] = [
    Route { pattern: "/pump/on", handler: pump_on },
    Route { pattern: "/pump/off", handler: pump_off },
    Route { pattern: "/wind/on", handler: fan_on },
    Route { pattern: "/wind/off", handler: fan_off },
    Route { pattern: "/window/open", handler: vent_open },
    Route { pattern: "/window/close", handler: vent_close },
    Route { pattern: COLOR_PREFIX, handler: color_handler },
];

fn pump_on(_: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    Ok(ActuatorCommand::PumpOn)
}

fn pump_off(_: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    Ok(ActuatorCommand::PumpOff)
}

fn fan_on(_: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    Ok(ActuatorCommand::FanOn)
}

fn fan_off(_: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    Ok(ActuatorCommand::FanOff)
}

fn vent_open(_: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    Ok(ActuatorCommand::VentOpen)
}

fn vent_close(_: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    Ok(ActuatorCommand::VentClose)
}

fn color_handler(rest: &[u8]) -> Result<ActuatorCommand, RejectReason> {
    let end = rest
        .iter()
        .position(|&b| b == b' ')
        .ok_or(RejectReason::Unterminated)?;
    let token = str::from_utf8(&rest[..end])
        .map_err(|_| RejectReason::Color(ColorError::InvalidDigit))?;

    // Browsers percent-encode the '#' of a fetched URL.
    let mut decoded: heapless::String<16> = heapless::String::new();
    let token = match token.strip_prefix("%23") {
        Some(digits) => {
            decoded
                .push('#')
                .and_then(|()| decoded.push_str(digits))
                .map_err(|()| RejectReason::Color(ColorError::TooLong))?;
            decoded.as_str()
        }
        None => token,
    };

    HexColor::parse(token)
        .map(ActuatorCommand::SetColor)
        .map_err(RejectReason::Color)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Match `raw` against [`ROUTES`].
pub fn route(raw: impl AsRef<[u8]>) -> Routed {
    let raw = raw.as_ref();
    for r in &ROUTES {
        if let Some(at) = find(raw, r.pattern.as_bytes()) {
            let rest = &raw[at + r.pattern.len()..];
            return match (r.handler)(rest) {
                Ok(cmd) => Routed::Command(cmd),
                Err(reason) => Routed::Rejected {
                    pattern: r.pattern,
                    reason,
                },
            };
        }
    }
    Routed::Unmatched
}
