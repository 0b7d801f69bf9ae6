//! Glitch Wave - Ambient scramble-then-resolve loop
//!
//! Repeatedly snaps an element to a fully randomized string (same length as
//! the phrase, spaces preserved) and resolves it back through the scramble
//! engine, resting between cycles. Compared to the rotator's transitions the
//! defaults use a longer duration and a larger reveal delay, so the initial
//! all-glitch phase is clearly visible.
//!
//! The returned stop closure is the only cancellation handle. Stopping is
//! cooperative: the active flag is cleared and the original phrase restored
//! immediately, but a resolve already in flight still finishes its tick
//! sequence — only the next cycle is prevented. That latency is part of the
//! contract, not an oversight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::randomized_text;
use super::scramble::{ScrambleOptions, scramble_to};
use crate::element::TextElement;
use crate::types::Cleanup;

/// Configuration for a glitch wave.
#[derive(Clone, Debug)]
pub struct WaveOptions {
    /// Transition settings for each resolve.
    pub scramble: ScrambleOptions,
    /// Pause between the end of one resolve and the next randomization.
    pub rest: Duration,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            scramble: ScrambleOptions {
                duration: Duration::from_millis(800),
                steps: 20,
                reveal_delay: 0.2,
                ..Default::default()
            },
            rest: Duration::from_millis(2000),
        }
    }
}

/// Start an ambient glitch wave on `element`, resolving to `text` each cycle.
///
/// Returns the stop handle. Callers that honor reduced motion should check
/// the preference before constructing a wave; the engine itself is
/// motion-agnostic.
pub fn create_glitch_wave(element: &TextElement, text: &str, options: WaveOptions) -> Cleanup {
    let active = Arc::new(AtomicBool::new(true));

    let worker_active = active.clone();
    let worker_element = element.clone();
    let worker_text = text.to_string();
    thread::spawn(move || {
        let mut rng = rand::thread_rng();
        while worker_active.load(Ordering::SeqCst) {
            worker_element.set_text(randomized_text(&worker_text, &mut rng));
            scramble_to(&worker_element, &worker_text, options.scramble.clone()).wait();

            if !worker_active.load(Ordering::SeqCst) {
                break;
            }
            thread::sleep(options.rest);
        }
    });

    let element = element.clone();
    let text = text.to_string();
    Box::new(move || {
        active.store(false, Ordering::SeqCst);
        element.set_text(text);
    })
}

// =============================================================================
// TESTS
// =============================================================================
