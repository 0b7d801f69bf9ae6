//! Scramble Engine - Glitch transition between two strings
//!
//! Animates an element's text from whatever it currently shows to a target
//! string over a fixed number of timer ticks. Two independent quantities drive
//! each frame:
//!
//! - **Visible length** interpolates from the start length to the target
//!   length through the easing curve, so strings of different lengths grow or
//!   shrink smoothly instead of truncating.
//! - **Reveal progress** stays at zero until eased progress passes
//!   `reveal_delay`, then ramps to one. Positions below
//!   `target_len * reveal_progress` lock to their target character; everything
//!   else flickers with a fresh random glyph every tick (spaces excepted —
//!   they are always emitted literally).
//!
//! The split makes the whole string glitch uniformly before characters start
//! locking left-to-right, instead of locking as soon as the cursor passes.
//!
//! After the last tick the element is force-set to exactly the target text,
//! eliminating any rounding residue, and the completion signal fires once.
//!
//! The engine keeps no state between invocations. Two concurrent transitions
//! on the *same* element race on its text (last tick wins); callers are
//! responsible for sequencing their own transitions, as the rotator and wave
//! do.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rand::Rng;
use unicode_segmentation::UnicodeSegmentation;

use super::ease::Ease;
use super::random_glyph;
use crate::element::TextElement;

// =============================================================================
// OPTIONS
// =============================================================================

/// Configuration for one scramble transition.
#[derive(Clone, Debug)]
pub struct ScrambleOptions {
    /// Total wall-clock duration of the transition.
    pub duration: Duration,
    /// Number of discrete update ticks. Clamped to at least 1.
    pub steps: u32,
    /// Fraction of eased progress that elapses before any character locks.
    /// Must be below 1.0 or nothing would ever lock; clamped accordingly.
    pub reveal_delay: f64,
    /// Easing curve applied to tick progress.
    pub ease: Ease,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(650),
            steps: 18,
            reveal_delay: 0.15,
            ease: Ease::InOutQuint,
        }
    }
}

// =============================================================================
// TRANSITION HANDLE
// =============================================================================

/// Completion handle for a running transition.
///
/// Dropping it does not cancel anything; the worker always runs to completion.
pub struct Transition {
    done: mpsc::Receiver<()>,
}

impl Transition {
    /// Block until the transition has set the final text.
    pub fn wait(self) {
        let _ = self.done.recv();
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Animate `element` from its current text to `new_text`.
///
/// Spawns a timer worker that overwrites the element once per tick
/// (`duration / steps`) and signals completion through the returned
/// [`Transition`] after force-setting the exact target text. Degenerate
/// inputs (empty target, target already displayed) still run every tick and
/// complete normally; the engine validates nothing.
pub fn scramble_to(element: &TextElement, new_text: &str, options: ScrambleOptions) -> Transition {
    let steps = options.steps.max(1);
    // A reveal delay of 1.0 would never lock a character before the force-set.
    let reveal_delay = options.reveal_delay.clamp(0.0, 0.99);
    let ease = options.ease;
    let tick = options.duration / steps;

    let element = element.clone();
    let new_text = new_text.to_string();
    let (tx, rx) = mpsc::channel();

    element.transition_started();
    thread::spawn(move || {
        let start_len = element.text().graphemes(true).count();
        let target: Vec<String> = new_text.graphemes(true).map(str::to_owned).collect();
        let mut rng = rand::thread_rng();

        for step in 1..=steps {
            thread::sleep(tick);
            let frame = scramble_frame(&target, start_len, step, steps, reveal_delay, ease, &mut rng);
            element.set_text(frame);
        }

        element.set_text(new_text);
        element.transition_finished();
        let _ = tx.send(());
    });

    Transition { done: rx }
}

/// Compute the frame shown at `step` of `steps`.
///
/// Pure except for the glyph draws, so the visual contract is testable with a
/// seeded RNG and no timers.
fn scramble_frame(
    target: &[String],
    start_len: usize,
    step: u32,
    steps: u32,
    reveal_delay: f64,
    ease: Ease,
    rng: &mut impl Rng,
) -> String {
    let eased = ease.apply(step as f64 / steps as f64);
    let end_len = target.len();

    let current_len =
        (start_len as f64 + (end_len as f64 - start_len as f64) * eased).round() as usize;

    let reveal_progress = ((eased - reveal_delay) / (1.0 - reveal_delay)).max(0.0);
    let reveal_threshold = end_len as f64 * reveal_progress;

    let mut out = String::new();
    for i in 0..current_len {
        match target.get(i) {
            Some(unit) if (i as f64) < reveal_threshold => out.push_str(unit),
            Some(unit) if unit == " " => out.push(' '),
            _ => out.push(random_glyph(rng)),
        }
    }
    out.trim().to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::GLITCH_GLYPHS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn units(text: &str) -> Vec<String> {
        text.graphemes(true).map(str::to_owned).collect()
    }

    /// Positions showing their target character (spaces excluded — they are
    /// always preserved). The glyph alphabet contains no letters, so for
    /// all-letter targets a match can only mean "locked".
    fn locked_count(frame: &str, target: &[String]) -> usize {
        frame
            .graphemes(true)
            .zip(target.iter())
            .filter(|(shown, want)| shown == &want.as_str() && want.as_str() != " ")
            .count()
    }

    #[test]
    fn final_step_shows_target_fully_locked() {
        let target = units("director");
        let mut rng = StdRng::seed_from_u64(1);

        let frame = scramble_frame(&target, 3, 18, 18, 0.15, Ease::InOutQuint, &mut rng);
        assert_eq!(frame, "director");
    }

    #[test]
    fn spaces_are_preserved_at_every_step() {
        // Equal start/end length keeps the visible length fixed, so the space
        // positions are stable across the whole transition.
        let target = units("ab cd ef");
        let mut rng = StdRng::seed_from_u64(2);

        for step in 1..=18 {
            let frame = scramble_frame(&target, 8, step, 18, 0.15, Ease::InOutQuint, &mut rng);
            let shown: Vec<&str> = frame.graphemes(true).collect();
            assert_eq!(shown.len(), 8, "step {step}");
            assert_eq!(shown[2], " ", "step {step}");
            assert_eq!(shown[5], " ", "step {step}");
        }
    }

    #[test]
    fn reveal_never_regresses() {
        let target = units("creative");
        let mut rng = StdRng::seed_from_u64(3);

        let mut prev = 0;
        for step in 1..=18 {
            let frame = scramble_frame(&target, 8, step, 18, 0.15, Ease::InOutQuint, &mut rng);
            let locked = locked_count(&frame, &target);
            assert!(locked >= prev, "step {step}: {locked} < {prev}");
            prev = locked;
        }
        assert_eq!(prev, target.len());
    }

    #[test]
    fn nothing_locks_before_the_reveal_delay() {
        let target = units("writer");
        let mut rng = StdRng::seed_from_u64(4);

        // Step 3 of 18 with quintic easing is deep inside the delay window.
        let frame = scramble_frame(&target, 6, 3, 18, 0.15, Ease::InOutQuint, &mut rng);
        assert_eq!(locked_count(&frame, &target), 0);
        for g in frame.graphemes(true) {
            let c = g.chars().next().unwrap();
            assert!(GLITCH_GLYPHS.contains(&c));
        }
    }

    #[test]
    fn visible_length_interpolates_monotonically() {
        let target = units("shrt");
        let start_len = 12;
        let mut rng = StdRng::seed_from_u64(5);

        let mut prev = start_len;
        for step in 1..=18 {
            // Untrimmed length tracks the interpolation exactly; all-letter
            // target and space-free glyphs mean trim is a no-op here.
            let frame = scramble_frame(&target, start_len, step, 18, 0.15, Ease::Linear, &mut rng);
            let len = frame.graphemes(true).count();
            assert!(len <= prev, "step {step}: grew from {prev} to {len}");
            assert!(len >= target.len(), "step {step}: undershot target length");
            prev = len;
        }
        assert_eq!(prev, target.len());
    }

    #[test]
    fn completes_and_sets_exact_text() {
        let el = TextElement::new("abc");
        let t = scramble_to(
            &el,
            "wxyz",
            ScrambleOptions {
                duration: Duration::from_millis(40),
                steps: 4,
                ..Default::default()
            },
        );
        t.wait();
        assert_eq!(el.text(), "wxyz");
        assert_eq!(el.active_transitions(), 0);
    }

    #[test]
    fn idempotent_target_still_completes() {
        let el = TextElement::new("same");
        let t = scramble_to(
            &el,
            "same",
            ScrambleOptions {
                duration: Duration::from_millis(40),
                steps: 4,
                ..Default::default()
            },
        );
        t.wait();
        assert_eq!(el.text(), "same");
    }

    #[test]
    fn empty_target_still_completes() {
        let el = TextElement::new("something");
        let t = scramble_to(
            &el,
            "",
            ScrambleOptions {
                duration: Duration::from_millis(40),
                steps: 4,
                ..Default::default()
            },
        );
        t.wait();
        assert_eq!(el.text(), "");
        assert_eq!(el.active_transitions(), 0);
    }

    #[test]
    fn zero_steps_is_clamped_not_panicking() {
        let el = TextElement::new("a");
        let t = scramble_to(
            &el,
            "b",
            ScrambleOptions {
                duration: Duration::from_millis(10),
                steps: 0,
                ..Default::default()
            },
        );
        t.wait();
        assert_eq!(el.text(), "b");
    }

    #[test]
    fn transitions_on_different_elements_are_independent() {
        let a = TextElement::new("aaaa");
        let b = TextElement::new("bbbb");
        let opts = ScrambleOptions {
            duration: Duration::from_millis(40),
            steps: 4,
            ..Default::default()
        };

        let ta = scramble_to(&a, "alpha", opts.clone());
        let tb = scramble_to(&b, "beta", opts);
        ta.wait();
        tb.wait();

        assert_eq!(a.text(), "alpha");
        assert_eq!(b.text(), "beta");
    }
}
