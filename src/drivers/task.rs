//! Pattern-task spawning.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread::spawn` creates a
//! FreeRTOS task with an explicit core, priority, and stack size. On non-ESP
//! targets, falls back to a plain named thread.
//!
//! ESP-IDF implements `std::thread` via pthreads, thin wrappers around
//! FreeRTOS tasks. `esp_pthread_set_cfg()` is thread-local and applies to
//! the *next* `pthread_create()` from the calling thread, so the
//! config→spawn pair must not be interleaved with other thread creation on
//! the same thread.

/// CPU core identifiers for the dual-core ESP32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 0 (PRO_CPU) — protocol stacks.
    Pro = 0,
    /// Core 1 (APP_CPU) — application logic.
    App = 1,
}

/// FreeRTOS task parameters for a spawned thread.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    /// Null-terminated task name (e.g. `"led-pattern\0"`).
    pub name: &'static str,
    pub core: Core,
    pub priority: u8,
    pub stack_kb: usize,
}

impl TaskSpec {
    /// The single pattern-driver task: 4 KiB stack, priority 5.
    pub const fn pattern_task() -> Self {
        Self {
            name: "led-pattern\0",
            core: Core::App,
            priority: 5,
            stack_kb: 4,
        }
    }
}

/// Spawn a thread as a FreeRTOS task described by `spec`.
#[cfg(target_os = "espidf")]
pub fn spawn(spec: &TaskSpec, f: impl FnOnce() + Send + 'static) -> std::thread::JoinHandle<()> {
    unsafe {
        let mut cfg = esp_idf_svc::sys::esp_create_default_pthread_config();
        cfg.pin_to_core = spec.core as i32;
        cfg.prio = spec.priority as i32;
        cfg.stack_size = (spec.stack_kb * 1024) as i32;
        cfg.thread_name = spec.name.as_ptr() as *const _;
        let ret = esp_idf_svc::sys::esp_pthread_set_cfg(&cfg);
        assert!(
            ret == esp_idf_svc::sys::ESP_OK as i32,
            "esp_pthread_set_cfg failed: {ret}"
        );
    }

    let display_name = spec.name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        display_name,
        spec.core,
        spec.priority,
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(display_name.into())
        .spawn(f)
        .expect("task spawn failed")
}

/// Simulation fallback — ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn(spec: &TaskSpec, f: impl FnOnce() + Send + 'static) -> std::thread::JoinHandle<()> {
    let display_name = spec.name.trim_end_matches('\0');
    log::info!("Spawning '{}' (sim, stack={}KB)", display_name, spec.stack_kb);

    std::thread::Builder::new()
        .name(display_name.into())
        .stack_size(spec.stack_kb * 1024)
        .spawn(f)
        .expect("task spawn (sim) failed")
}
