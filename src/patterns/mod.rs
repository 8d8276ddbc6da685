//! Pattern drivers and the port they drive.
//!
//! The three drivers share one shape: an unending loop issuing blocking
//! fades through [`FadePort`], checking a [`CancelToken`] between steps.
//! Everything in this module tree is pure logic — hardware lives behind the
//! port, implemented by `drivers::ledc::LedcController` on the device and by
//! recording mocks in tests.

pub mod binary;
pub mod chase;
pub mod random;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::config::{Pattern, RunConfig};
use crate::pins;

/// One of the three PWM outputs. Bound to a fixed GPIO and LEDC channel at
/// initialization; patterns only ever see this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Led1,
    Led2,
    Led3,
}

impl Channel {
    /// All channels, in LEDC channel order.
    pub const ALL: [Channel; 3] = [Channel::Led1, Channel::Led2, Channel::Led3];

    /// LEDC channel number / bit position for this output.
    pub const fn index(self) -> usize {
        match self {
            Channel::Led1 => 0,
            Channel::Led2 => 1,
            Channel::Led3 => 2,
        }
    }
}

/// Blocking fade interface the pattern drivers run against.
///
/// Implementations clamp duty targets to `[0, DUTY_MAX]`; `fade_blocking`
/// must not return until the ramp has completed, so consecutive fades on one
/// channel can never overlap.
pub trait FadePort {
    /// Ramp `channel` linearly from its current duty to `target` over
    /// `duration_ms`, blocking the calling task until the ramp completes.
    fn fade_blocking(&mut self, channel: Channel, target: u16, duration_ms: u32);

    /// Immediate duty write, no ramp.
    fn set_duty(&mut self, channel: Channel, duty: u16);

    /// Last duty written to `channel`.
    fn duty(&self, channel: Channel) -> u16;

    /// All channels dark.
    fn all_off(&mut self) {
        for ch in Channel::ALL {
            self.set_duty(ch, 0);
        }
    }
}

/// Full-scale or dark: the binary and random drivers only use the extremes.
pub fn level_duty(on: bool) -> u16 {
    if on { pins::DUTY_MAX } else { 0 }
}

/// Clonable cancellation handle, checked between pattern steps.
///
/// Production never triggers it — the pattern task runs for the lifetime of
/// the device — but it gives tests and future shutdown paths a clean exit.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run the selected pattern until cancellation, then blank all channels.
pub fn run(port: &mut impl FadePort, cfg: &RunConfig, cancel: &CancelToken) {
    info!("Pattern task: {} (step {} ms)", cfg.pattern, cfg.step_ms);
    match cfg.pattern {
        Pattern::Chase => chase::run(port, cfg, cancel),
        Pattern::BinaryCounter => binary::run(port, cfg, cancel),
        Pattern::RandomBlink => random::run(port, cfg, cancel),
    }
    port.all_off();
    info!("Pattern task: cancelled, channels off");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_indices_are_dense() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    #[test]
    fn token_starts_clear_and_latches() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        let observer = token.clone();
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn level_duty_uses_extremes_only() {
        assert_eq!(level_duty(true), pins::DUTY_MAX);
        assert_eq!(level_duty(false), 0);
    }
}
