//! Binary-counter pattern.
//!
//! A three-bit counter runs 0 through 7 and wraps. Bit 0 drives channel 0,
//! bit 1 channel 1, bit 2 channel 2 — each hard on or off, dressed as a
//! short fade for visual smoothing. The value is logged most-significant
//! bit first, then the driver waits one step before advancing.

use std::thread;
use std::time::Duration;

use log::info;

use super::{CancelToken, Channel, FadePort, level_duty};
use crate::config::RunConfig;

/// Three-bit wrapping counter with per-channel bit decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryCounter {
    value: u8,
}

impl BinaryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value, always in `0..8`.
    pub fn value(self) -> u8 {
        self.value
    }

    /// Bit `i` of the counter drives channel `i`.
    pub fn bits(self) -> [bool; 3] {
        [
            self.value & 1 != 0,
            self.value >> 1 & 1 != 0,
            self.value >> 2 & 1 != 0,
        ]
    }

    /// Advance modulo 8.
    pub fn advance(&mut self) {
        self.value = (self.value + 1) % 8;
    }
}

/// Drive the counter until cancellation.
pub fn run(port: &mut impl FadePort, cfg: &RunConfig, cancel: &CancelToken) {
    let mut counter = BinaryCounter::new();
    while !cancel.is_cancelled() {
        let bits = counter.bits();
        for (ch, on) in Channel::ALL.into_iter().zip(bits) {
            port.fade_blocking(ch, level_duty(on), cfg.step_ms);
        }
        info!("Binary: {:03b}", counter.value());
        thread::sleep(Duration::from_millis(cfg.step_ms.into()));
        counter.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_all_bits_clear() {
        let c = BinaryCounter::new();
        assert_eq!(c.value(), 0);
        assert_eq!(c.bits(), [false, false, false]);
    }

    #[test]
    fn decodes_low_bits_lsb_first() {
        let mut c = BinaryCounter::new();
        for _ in 0..5 {
            c.advance();
        }
        // 5 = 0b101 → channels 0 and 2 on
        assert_eq!(c.bits(), [true, false, true]);
    }

    #[test]
    fn wraps_to_zero_after_seven() {
        let mut c = BinaryCounter::new();
        for _ in 0..8 {
            c.advance();
        }
        assert_eq!(c.value(), 0);
    }
}
