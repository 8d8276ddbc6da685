//! LEDC PWM controller: one shared timer, three fade-capable channels.
//!
//! Configures LEDC timer 0 (5 kHz, 10-bit, auto clock) and channels 0-2 on
//! the LED GPIOs, installs the hardware fade service, and hands back an
//! owned [`LedcController`]. The handle is the only way to touch the
//! channels, so exclusive `&mut` access rules out overlapping fades.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: timer/channel config and hardware fades via raw sys calls;
//! `LEDC_FADE_WAIT_DONE` suspends the calling task for the ramp duration.
//! On host/test: duty tracked in-memory, fades sleep for the requested time.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
use log::info;

use crate::patterns::{Channel, FadePort};
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot LEDC initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedcError {
    /// A live controller already owns the timer and channels.
    AlreadyClaimed,
    TimerConfigFailed(i32),
    ChannelConfigFailed { channel: u8, rc: i32 },
    FadeServiceFailed(i32),
}

impl fmt::Display for LedcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyClaimed => write!(f, "LEDC timer/channels already claimed"),
            Self::TimerConfigFailed(rc) => write!(f, "LEDC timer config failed (rc={rc})"),
            Self::ChannelConfigFailed { channel, rc } => {
                write!(f, "LEDC channel {channel} config failed (rc={rc})")
            }
            Self::FadeServiceFailed(rc) => {
                write!(f, "LEDC fade service install failed (rc={rc})")
            }
        }
    }
}

// ── Controller ────────────────────────────────────────────────

/// Set while a controller instance is alive. The GPIOs and LEDC timer are
/// physical singletons, so a second claim must fail until the first handle
/// is dropped.
static CLAIMED: AtomicBool = AtomicBool::new(false);

#[cfg(target_os = "espidf")]
const fn gpio_for(channel: Channel) -> i32 {
    match channel {
        Channel::Led1 => pins::LED1_GPIO,
        Channel::Led2 => pins::LED2_GPIO,
        Channel::Led3 => pins::LED3_GPIO,
    }
}

#[cfg(target_os = "espidf")]
fn ledc_channel_for(channel: Channel) -> u32 {
    ledc_channel_t_LEDC_CHANNEL_0 + channel.index() as u32
}

/// Owned handle over LEDC timer 0 and channels 0-2.
pub struct LedcController {
    duty: [u16; Channel::ALL.len()],
}

impl LedcController {
    /// Configure the shared timer, the three channels, and the fade service.
    ///
    /// Returns [`LedcError::AlreadyClaimed`] while a previous controller is
    /// still alive; any ESP-IDF failure releases the claim before returning.
    pub fn init() -> Result<Self, LedcError> {
        if CLAIMED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(LedcError::AlreadyClaimed);
        }

        if let Err(e) = Self::configure_hw() {
            CLAIMED.store(false, Ordering::SeqCst);
            return Err(e);
        }

        info!(
            "ledc: timer 0 @ {} Hz, {}-bit, channels 0-2 on GPIO {}/{}/{}",
            pins::LED_PWM_FREQ_HZ,
            pins::PWM_RESOLUTION_BITS,
            pins::LED1_GPIO,
            pins::LED2_GPIO,
            pins::LED3_GPIO
        );
        Ok(Self {
            duty: [0; Channel::ALL.len()],
        })
    }

    #[cfg(target_os = "espidf")]
    fn configure_hw() -> Result<(), LedcError> {
        // SAFETY: Reached only behind the CLAIMED flag, before the pattern
        // task exists; no concurrent LEDC access is possible.
        unsafe {
            let timer = ledc_timer_config_t {
                speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                timer_num: ledc_timer_t_LEDC_TIMER_0,
                duty_resolution: ledc_timer_bit_t_LEDC_TIMER_10_BIT,
                freq_hz: pins::LED_PWM_FREQ_HZ,
                clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
                ..Default::default()
            };
            let rc = ledc_timer_config(&timer);
            if rc != ESP_OK as i32 {
                return Err(LedcError::TimerConfigFailed(rc));
            }

            for ch in Channel::ALL {
                let cfg = ledc_channel_config_t {
                    gpio_num: gpio_for(ch),
                    speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    channel: ledc_channel_for(ch),
                    intr_type: ledc_intr_type_t_LEDC_INTR_DISABLE,
                    timer_sel: ledc_timer_t_LEDC_TIMER_0,
                    duty: 0,
                    hpoint: 0,
                    ..Default::default()
                };
                let rc = ledc_channel_config(&cfg);
                if rc != ESP_OK as i32 {
                    return Err(LedcError::ChannelConfigFailed {
                        channel: ch.index() as u8,
                        rc,
                    });
                }
            }

            let rc = ledc_fade_func_install(0);
            if rc != ESP_OK as i32 {
                return Err(LedcError::FadeServiceFailed(rc));
            }
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn configure_hw() -> Result<(), LedcError> {
        info!("ledc(sim): timer/channel config skipped");
        Ok(())
    }
}

impl FadePort for LedcController {
    fn fade_blocking(&mut self, channel: Channel, target: u16, duration_ms: u32) {
        let target = target.min(pins::DUTY_MAX);

        #[cfg(target_os = "espidf")]
        {
            // SAFETY: channel was configured in init(); WAIT_DONE suspends
            // the calling task until the hardware ramp completes.
            unsafe {
                ledc_set_fade_time_and_start(
                    ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    ledc_channel_for(channel),
                    target as u32,
                    duration_ms as i32,
                    ledc_fade_mode_t_LEDC_FADE_WAIT_DONE,
                );
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            if duration_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(duration_ms.into()));
            }
        }

        self.duty[channel.index()] = target;
    }

    fn set_duty(&mut self, channel: Channel, duty: u16) {
        let duty = duty.min(pins::DUTY_MAX);

        #[cfg(target_os = "espidf")]
        {
            // SAFETY: duty register writes on a configured channel; only the
            // owning task calls this.
            unsafe {
                ledc_set_duty(
                    ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    ledc_channel_for(channel),
                    duty as u32,
                );
                ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, ledc_channel_for(channel));
            }
        }

        self.duty[channel.index()] = duty;
    }

    fn duty(&self, channel: Channel) -> u16 {
        self.duty[channel.index()]
    }
}

impl Drop for LedcController {
    fn drop(&mut self) {
        self.all_off();

        #[cfg(target_os = "espidf")]
        {
            // SAFETY: fades block their caller, so none can be in flight
            // once we hold the handle exclusively.
            unsafe {
                ledc_fade_func_uninstall();
            }
        }

        CLAIMED.store(false, Ordering::SeqCst);
    }
}
