//! Core types shared across the crate.

/// Teardown closure returned by subscriptions and effect starters.
///
/// Calling it releases whatever the producer set up (stops a glitch wave,
/// removes an event listener). Safe to call from any thread.
pub type Cleanup = Box<dyn FnOnce() + Send>;
