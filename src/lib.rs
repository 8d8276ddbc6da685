//! Three-channel LEDC fade-pattern firmware.
//!
//! Drives three LEDs through the ESP32 LEDC peripheral: one shared 5 kHz,
//! 10-bit timer and three fade-capable channels. A single pattern task —
//! chase, binary counter, or random blink, chosen at build time — issues
//! blocking hardware fades forever.
//!
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module, so the pattern logic and the fade contract compile
//! and test on the host with a plain `cargo test`.

#![deny(unused_must_use)]

pub mod config;
pub mod drivers;
pub mod patterns;
pub mod pins;
