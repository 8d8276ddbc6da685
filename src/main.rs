//! LED pattern demo — main entry point.
//!
//! Boot sequence: ESP-IDF bootstrap, LEDC init (fatal halt on failure),
//! then one pattern task that fades the three LEDs forever.

#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use led_patterns::config::RunConfig;
use led_patterns::drivers::ledc::LedcController;
use led_patterns::drivers::task::{self, TaskSpec};
use led_patterns::patterns::{self, CancelToken};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════╗");
    info!("║  LED patterns v{}         ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════╝");

    let cfg = RunConfig::compiled();
    info!("Selected pattern: {} (step {} ms)", cfg.pattern, cfg.step_ms);

    // ── 2. Claim the LEDC timer and channels ──────────────────
    let controller = match LedcController::init() {
        Ok(c) => c,
        Err(e) => {
            // Peripheral init failure is critical — log and halt.
            error!("LEDC init failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Hand off to the pattern task ───────────────────────
    let cancel = CancelToken::new();
    let handle = task::spawn(&TaskSpec::pattern_task(), move || {
        let mut controller = controller;
        patterns::run(&mut controller, &cfg, &cancel);
    });

    // The pattern task runs for the lifetime of the device; join() only
    // returns if the task is cancelled, which production never does.
    let _ = handle.join();
    Ok(())
}
