//! # glitch-tui
//!
//! Glitch-scramble text animation effects for terminal UIs.
//!
//! The core is a timer-driven scramble engine that transitions a text element
//! from its current content to a target string: displayed length interpolates
//! smoothly between the two strings, characters lock in left-to-right after an
//! initial all-glitch phase, and unlocked positions flicker with random glyphs
//! on every tick. Two orchestrators build on it: a role rotator that cycles an
//! element through a list of phrases forever, and a glitch wave that
//! scramble-resolves a fixed phrase as an ambient effect with a stop handle.
//!
//! ## Architecture
//!
//! ```text
//! TextElement  ←─ writes ──  scramble engine (one timer worker per transition)
//!      │                          ▲              ▲
//!      │ reads                    │              │
//!  InlinePresenter           role rotator   glitch wave
//! ```
//!
//! Each running transition owns its state exclusively; nothing is shared
//! between invocations. Orchestrators run one transition at a time on their
//! own element by construction. The engine does not guard against two callers
//! animating the same element concurrently — don't do that.
//!
//! ## Modules
//!
//! - [`element`] - Shared text slots animated by the effects
//! - [`effects`] - Easing, scramble engine, role rotator, glitch wave
//! - [`state`] - Reduced-motion preference, event bus, preview registry
//! - [`renderer`] - Inline terminal presenter for animated elements

pub mod effects;
pub mod element;
pub mod renderer;
pub mod state;
pub mod types;

pub use types::Cleanup;

pub use element::{TextElement, WeakTextElement, text_signal};

pub use effects::{
    GLITCH_GLYPHS, randomized_text,
    ease::Ease,
    rotator::{RotatorOptions, init_role_rotator, init_role_rotator_with},
    scramble::{ScrambleOptions, Transition, scramble_to},
    wave::{WaveOptions, create_glitch_wave},
};

pub use state::{
    events::{EventBus, UiEvent},
    motion::{prefers_reduced_motion, reset_motion_state, set_reduced_motion},
    preview::PreviewRegistry,
};

pub use renderer::InlinePresenter;
