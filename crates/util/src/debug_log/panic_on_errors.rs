//! Whether or not [crate::debug_log_error] should panic.

#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether panicking on errors is enabled (see [crate::debug_log_error]).
///
/// Terminal logging ([super::enabled]) must be on for this to have any effect.
/// It's enabled by default in debug builds and always off in release builds.
pub fn enabled() -> bool {
    #[cfg(debug_assertions)]
    return ENABLED.load(Ordering::Relaxed);

    #[cfg(not(debug_assertions))]
    false
}

/// Disable panicking on errors (see [crate::debug_log_error]).
pub fn disable() {
    #[cfg(debug_assertions)]
    ENABLED.store(false, Ordering::Relaxed);
}

#[cfg(debug_assertions)]
static ENABLED: AtomicBool = AtomicBool::new(true);
