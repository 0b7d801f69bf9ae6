//! Role Rotator - Cycles an element through phrases forever
//!
//! Holds each phrase for a fixed dwell time, then scrambles to the next one,
//! modulo the phrase list, for as long as the element exists. There is no
//! external cancellation: the worker holds only a weak element handle between
//! transitions and exits once every strong handle is dropped. Replacing an
//! element means initializing a new rotator on the new element.
//!
//! When the user prefers reduced motion the rotator sets the first phrase and
//! does nothing else — no worker, no timers.

use std::thread;
use std::time::Duration;

use super::ease::Ease;
use super::scramble::{ScrambleOptions, scramble_to};
use crate::element::TextElement;
use crate::state::motion;

/// Configuration for a role rotator.
#[derive(Clone, Debug)]
pub struct RotatorOptions {
    /// Delay before the first cycle starts.
    pub initial_delay: Duration,
    /// How long each phrase stays fully displayed.
    pub dwell: Duration,
    /// Transition settings used between phrases.
    pub scramble: ScrambleOptions,
    /// Skip all animation and show only the first phrase.
    pub reduced_motion: bool,
}

impl Default for RotatorOptions {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(2000),
            dwell: Duration::from_millis(1400),
            scramble: ScrambleOptions {
                ease: Ease::InOutCubic,
                ..Default::default()
            },
            reduced_motion: false,
        }
    }
}

/// Start rotating `element` through `roles`, honoring the process-wide
/// reduced-motion preference.
pub fn init_role_rotator(element: &TextElement, roles: &[&str]) {
    init_role_rotator_with(
        element,
        roles,
        RotatorOptions {
            reduced_motion: motion::prefers_reduced_motion(),
            ..Default::default()
        },
    );
}

/// Start rotating `element` through `roles` with explicit options.
///
/// Empty `roles` is a no-op. Otherwise the first role is shown immediately;
/// unless `reduced_motion` is set, a worker then waits `initial_delay` and
/// loops forever: dwell, advance modulo the role count, scramble, wait for
/// completion. Cycles are strictly sequential — a new transition never starts
/// before the previous one has signaled completion.
pub fn init_role_rotator_with(element: &TextElement, roles: &[&str], options: RotatorOptions) {
    if roles.is_empty() {
        return;
    }

    element.set_text(roles[0]);
    if options.reduced_motion {
        return;
    }

    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    let weak = element.downgrade();

    thread::spawn(move || {
        thread::sleep(options.initial_delay);
        let mut current = 0usize;
        loop {
            thread::sleep(options.dwell);
            current = (current + 1) % roles.len();

            let Some(element) = weak.upgrade() else {
                break;
            };
            let transition = scramble_to(&element, &roles[current], options.scramble.clone());
            drop(element);
            transition.wait();
        }
    });
}

// =============================================================================
// TESTS
// =============================================================================
