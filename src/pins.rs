//! GPIO / peripheral pin assignments for the greenhouse controller board.
//!
//! Single source of truth: `main` builds every driver from these numbers
//! rather than hard-coding pins.

// ---------------------------------------------------------------------------
// Relays (digital outputs, active HIGH)
// ---------------------------------------------------------------------------

/// Irrigation pump relay.
pub const PUMP_GPIO: i32 = 26;
/// Ventilation fan relay.
pub const FAN_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Vent servo (LEDC PWM, 50 Hz)
// ---------------------------------------------------------------------------

pub const VENT_SERVO_GPIO: i32 = 18;
/// Hobby-servo frame rate.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

// ---------------------------------------------------------------------------
// Grow light (LEDC PWM)
// ---------------------------------------------------------------------------

/// Red channel of the RGB grow light.  Green and blue are not wired.
pub const RGB_RED_GPIO: i32 = 19;
pub const RGB_PWM_FREQ_HZ: u32 = 5_000;
