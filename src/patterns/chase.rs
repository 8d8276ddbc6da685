//! Sequential chase pattern.
//!
//! Each step raises one channel to full scale and lowers it back to dark,
//! both as timed hardware fades. The sweep runs across channels 0, 1, 2 and
//! returns through the middle channel only, giving an asymmetric ping-pong.

use super::{CancelToken, Channel, FadePort};
use crate::config::RunConfig;
use crate::pins;

/// Sweep order for one full pass. The return leg re-visits the middle
/// channel instead of mirroring the whole sweep.
pub const SWEEP_ORDER: [Channel; 4] = [
    Channel::Led1,
    Channel::Led2,
    Channel::Led3,
    Channel::Led2,
];

/// Drive the chase until cancellation. The blocking fades provide all the
/// pacing; there is no extra inter-step delay.
pub fn run(port: &mut impl FadePort, cfg: &RunConfig, cancel: &CancelToken) {
    while !cancel.is_cancelled() {
        for ch in SWEEP_ORDER {
            if cancel.is_cancelled() {
                return;
            }
            port.fade_blocking(ch, pins::DUTY_MAX, cfg.step_ms);
            port.fade_blocking(ch, 0, cfg.step_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_revisits_middle_channel() {
        let indices: Vec<usize> = SWEEP_ORDER.iter().map(|c| c.index()).collect();
        assert_eq!(indices, [0, 1, 2, 1]);
    }
}
