//! GPIO / peripheral pin assignments for the three-LED demo board.
//!
//! Single source of truth — the LEDC driver references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// LED outputs
// ---------------------------------------------------------------------------

/// First LED, LEDC channel 0.
pub const LED1_GPIO: i32 = 2;
/// Second LED, LEDC channel 1.
pub const LED2_GPIO: i32 = 4;
/// Third LED, LEDC channel 2.
pub const LED3_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits). 10-bit gives 0 – 1023 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 10;
/// Full-scale duty value at the configured resolution.
pub const DUTY_MAX: u16 = ((1u32 << PWM_RESOLUTION_BITS) - 1) as u16;
/// LEDC base frequency for the LED channels (5 kHz — flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 5_000;
