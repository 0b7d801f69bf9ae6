//! Reduced Motion - Process-wide animation preference
//!
//! Animation consumers read this once at initialization (the engine itself is
//! motion-agnostic). The preference comes from the `REDUCED_MOTION`
//! environment variable on first read and is cached afterwards; tests and
//! embedders can override it explicitly.

use std::sync::atomic::{AtomicU8, Ordering};

const UNSET: u8 = 0;
const OFF: u8 = 1;
const ON: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNSET);

/// Whether the user prefers reduced motion.
///
/// Resolved from the environment on first call, then cached.
pub fn prefers_reduced_motion() -> bool {
    match STATE.load(Ordering::SeqCst) {
        ON => true,
        OFF => false,
        _ => {
            let detected = detect_from_env();
            STATE.store(if detected { ON } else { OFF }, Ordering::SeqCst);
            detected
        }
    }
}

/// Override the preference, bypassing environment detection.
pub fn set_reduced_motion(value: bool) {
    STATE.store(if value { ON } else { OFF }, Ordering::SeqCst);
}

/// Forget any cached or overridden value (for testing).
pub fn reset_motion_state() {
    STATE.store(UNSET, Ordering::SeqCst);
}

fn detect_from_env() -> bool {
    match std::env::var("REDUCED_MOTION") {
        Ok(value) => !value.is_empty() && value != "0",
        Err(_) => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
